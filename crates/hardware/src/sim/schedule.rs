//! Per-instruction timing records produced by a run.

use serde::Serialize;

use crate::common::Cycle;
use crate::core::HazardKind;
use crate::isa::{InstructionLength, OpCode, Timing, UnitType};

/// Timing of one instruction, in the order instructions were finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleRecord {
    /// Position of the instruction in the program.
    pub index: usize,
    /// Operation.
    pub opcode: OpCode,
    /// Encoded length.
    pub length: InstructionLength,
    /// Unit the instruction was issued to.
    pub unit: UnitType,
    /// Conflict the instruction was issued under.
    pub hazard: HazardKind,
    /// Cycle numbers.
    #[serde(flatten)]
    pub timing: Timing,
}

/// Result of a run: the timing log and the elapsed cycle count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    /// One record per instruction, in finalization order.
    pub records: Vec<ScheduleRecord>,
    /// Value of the cycle counter when the last instruction was finalized.
    pub cycles: Cycle,
}

impl Schedule {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true for the schedule of an empty program.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record of the instruction at `index` in the program.
    pub fn record(&self, index: usize) -> Option<&ScheduleRecord> {
        self.records.iter().find(|record| record.index == index)
    }

    /// Records sorted back into program order.
    pub fn in_program_order(&self) -> Vec<ScheduleRecord> {
        let mut records = self.records.clone();
        records.sort_by_key(|record| record.index);
        records
    }
}
