//! Instruction Set Definitions.
//!
//! Contains the static opcode catalogue, the opcode-to-unit and
//! opcode-to-duration tables, and the instruction records the scheduler
//! operates on.

/// Instruction identity, timing, and per-run records.
pub mod instruction;

/// Opcode catalogue and opcode-to-unit map.
pub mod opcodes;

/// Unit types, machine models, durations and segment times.
pub mod timing;

pub use instruction::{Instruction, InstructionLength, InstructionRecord, Timing};
pub use opcodes::OpCode;
pub use timing::{Machine, UnitType};
