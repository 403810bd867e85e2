//! Functional Unit Types and Timing Tables.
//!
//! This module holds the static timing data of the two supported machines:
//! 1. **Unit Types:** The eight kinds of functional unit on the scoreboard.
//! 2. **Durations:** Cycles from an opcode's start to its result.
//! 3. **Segment Times:** Cycles a unit stays busy after producing a result.
//!
//! All tables are exhaustive matches, so every opcode has a duration and every
//! unit a segment time on both machines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::opcodes::OpCode;
use crate::common::{Cycle, SimError};

/// Kind of functional unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnitType {
    /// Branch unit.
    Branch,
    /// Boolean (logical) unit.
    Boolean,
    /// Shift, normalize, pack and mask unit.
    Shift,
    /// Floating add unit.
    Add,
    /// 60-bit integer add unit.
    LongAdd,
    /// Floating divide and population count unit.
    Divide,
    /// Floating multiply unit.
    Multiply,
    /// Increment (address and index arithmetic) unit.
    Increment,
}

impl UnitType {
    /// Number of unit types.
    pub const COUNT: usize = 8;

    /// Every unit type in scoreboard order.
    ///
    /// Hazard scans visit units in this order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Branch,
        Self::Boolean,
        Self::Shift,
        Self::Add,
        Self::LongAdd,
        Self::Divide,
        Self::Multiply,
        Self::Increment,
    ];

    /// Position of this unit on the scoreboard.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Machine whose timing tables drive the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Machine {
    /// CDC 6600: unsegmented units, 100 ns minor cycle.
    #[serde(alias = "6600", alias = "CDC6600")]
    Cdc6600,
    /// CDC 7600: segmented (pipelined) units, 27.5 ns clock.
    #[default]
    #[serde(alias = "7600", alias = "CDC7600")]
    Cdc7600,
}

impl Machine {
    /// Display name of the machine.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cdc6600 => "CDC6600",
            Self::Cdc7600 => "CDC7600",
        }
    }

    /// Cycles from an opcode's start to its result.
    pub const fn duration(self, op: OpCode) -> Cycle {
        match self {
            Self::Cdc6600 => duration_6600(op),
            Self::Cdc7600 => duration_7600(op),
        }
    }

    /// Cycles a unit of the given type stays busy after producing a result.
    pub const fn segment_time(self, unit: UnitType) -> Cycle {
        match self {
            // Units are not segmented: a unit is busy for its whole operation.
            Self::Cdc6600 => match unit {
                UnitType::Branch => 8,
                UnitType::Boolean | UnitType::Shift | UnitType::LongAdd | UnitType::Increment => 3,
                UnitType::Add => 4,
                UnitType::Divide => 29,
                UnitType::Multiply => 10,
            },
            Self::Cdc7600 => match unit {
                UnitType::Multiply => 2,
                UnitType::Divide => 18,
                UnitType::Branch
                | UnitType::Boolean
                | UnitType::Shift
                | UnitType::Add
                | UnitType::LongAdd
                | UnitType::Increment => 1,
            },
        }
    }
}

const fn duration_6600(op: OpCode) -> Cycle {
    match op {
        OpCode::ReturnJumpToK => 14,
        OpCode::NormalizeXkInXiAndBj | OpCode::RoundNormalizeXkInXiAndBj => 4,
        OpCode::Pass => 1,
        OpCode::SumOfOnes => 8,
        OpCode::FloatingDivide | OpCode::RoundFloatingDivide => 29,
        _ => match op.unit_type() {
            UnitType::Branch => 8,
            UnitType::Boolean | UnitType::Shift | UnitType::LongAdd | UnitType::Increment => 3,
            UnitType::Add => 4,
            UnitType::Multiply => 10,
            UnitType::Divide => 29,
        },
    }
}

const fn duration_7600(op: OpCode) -> Cycle {
    match op {
        OpCode::ReturnJumpToK => 11,
        OpCode::NormalizeXkInXiAndBj | OpCode::RoundNormalizeXkInXiAndBj => 3,
        OpCode::Pass | OpCode::SumOfOnes => 2,
        OpCode::FloatingDivide | OpCode::RoundFloatingDivide => 20,
        _ => match op.unit_type() {
            UnitType::Branch => 5,
            UnitType::Boolean | UnitType::Shift | UnitType::LongAdd | UnitType::Increment => 2,
            UnitType::Add => 4,
            UnitType::Multiply => 5,
            UnitType::Divide => 20,
        },
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Machine {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().trim_start_matches("CDC") {
            "6600" => Ok(Self::Cdc6600),
            "7600" => Ok(Self::Cdc7600),
            _ => Err(SimError::UnknownMachine(s.to_owned())),
        }
    }
}
