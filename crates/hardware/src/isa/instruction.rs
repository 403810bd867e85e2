//! Instruction identity and timing records.
//!
//! An [`Instruction`] is the immutable identity supplied by the program. The
//! scheduler pairs each one with an [`InstructionRecord`] whose [`Timing`] is
//! written exactly once, on the cycle the instruction is dispatched.

use serde::{Deserialize, Serialize};

use super::opcodes::OpCode;
use crate::common::{AddressRole, Cycle, Register};

/// Encoded length of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InstructionLength {
    /// 15-bit instruction; four fit in a word.
    #[default]
    #[serde(alias = "S")]
    Short,
    /// 30-bit instruction carrying an 18-bit constant.
    #[serde(alias = "L")]
    Long,
}

impl InstructionLength {
    /// Single-letter tag used in schedule listings.
    pub const fn letter(self) -> char {
        match self {
            Self::Short => 'S',
            Self::Long => 'L',
        }
    }
}

/// One instruction of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    /// Operation performed.
    pub opcode: OpCode,
    /// Encoded length.
    #[serde(default)]
    pub length: InstructionLength,
    /// First source register (`j`).
    pub operand1: Register,
    /// Second source register (`k`), or `K` for the constant field.
    pub operand2: Register,
    /// Destination register (`i`).
    #[serde(alias = "output_register")]
    pub output: Register,
    /// First instruction of a 60-bit instruction word.
    #[serde(default, alias = "is_start_of_word")]
    pub start_of_word: bool,
    /// Last instruction of a 60-bit instruction word.
    #[serde(default, alias = "is_end_of_word")]
    pub end_of_word: bool,
}

impl Instruction {
    /// Creates an instruction that neither starts nor ends a word.
    pub const fn new(
        opcode: OpCode,
        length: InstructionLength,
        operand1: Register,
        operand2: Register,
        output: Register,
    ) -> Self {
        Self {
            opcode,
            length,
            operand1,
            operand2,
            output,
            start_of_word: false,
            end_of_word: false,
        }
    }

    /// Marks this instruction as the first of its word.
    #[must_use]
    pub const fn starts_word(mut self) -> Self {
        self.start_of_word = true;
        self
    }

    /// Marks this instruction as the last of its word.
    #[must_use]
    pub const fn ends_word(mut self) -> Self {
        self.end_of_word = true;
        self
    }

    /// Returns true if either source operand is `reg`.
    pub fn reads(&self, reg: Register) -> bool {
        self.operand1 == reg || self.operand2 == reg
    }

    /// Memory access triggered by this instruction.
    ///
    /// Only increment instructions reference memory, through the address
    /// register named by their first operand.
    pub const fn address_role(&self) -> AddressRole {
        if self.opcode.is_increment() {
            self.operand1.address_role()
        } else {
            AddressRole::None
        }
    }
}

/// Cycle numbers computed for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timing {
    /// Cycle the instruction was issued to its unit.
    pub issue: Cycle,
    /// Cycle execution started.
    pub start: Cycle,
    /// Cycle the result was produced.
    pub result: Cycle,
    /// Cycle the unit can accept another operation.
    pub unit_ready: Cycle,
    /// Cycle the triggered memory read completes.
    pub fetch: Option<Cycle>,
    /// Cycle the triggered memory write completes.
    pub store: Option<Cycle>,
}

impl Timing {
    /// Cycle after which the instruction no longer occupies its unit.
    pub fn completion(&self) -> Cycle {
        self.fetch.or(self.store).unwrap_or(self.result).max(self.result)
    }
}

/// Program instruction together with the state the scheduler tracks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionRecord {
    /// Identity as supplied by the program.
    pub instruction: Instruction,
    /// Timing, present once the instruction has been dispatched.
    pub timing: Option<Timing>,
    /// Issued with its start or result delayed by a register conflict.
    pub is_being_held: bool,
}

impl InstructionRecord {
    /// Wraps an instruction with no timing.
    pub const fn new(instruction: Instruction) -> Self {
        Self {
            instruction,
            timing: None,
            is_being_held: false,
        }
    }

    /// Returns true once timing has been assigned.
    pub const fn is_finished(&self) -> bool {
        self.timing.is_some()
    }
}
