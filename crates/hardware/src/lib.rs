//! CDC 6600/7600 scoreboard timing simulator library.
//!
//! This crate reproduces, cycle by cycle, when each instruction of a static
//! program issues, starts, produces its result and completes any memory
//! reference, on a machine whose functional units are coordinated by a
//! scoreboard. It contains:
//! 1. **Common:** Cycle type, constants, registers, and errors.
//! 2. **ISA:** Opcode catalogue, unit and duration tables, instruction records.
//! 3. **Core:** Functional units, dispatch window, scoreboard, hazard classification.
//! 4. **Simulation:** Scheduling loop, program loader, schedule output.
//! 5. **Statistics:** Conflict and stall counters for a run.
//!
//! ```
//! use cdcsim_core::common::Register;
//! use cdcsim_core::isa::{Instruction, InstructionLength, OpCode};
//! use cdcsim_core::{Config, Simulator};
//!
//! let program = vec![
//!     Instruction::new(OpCode::FloatingSum, InstructionLength::Short, Register::X1, Register::X2, Register::X3),
//!     Instruction::new(OpCode::FloatingProduct, InstructionLength::Short, Register::X3, Register::X3, Register::X4),
//! ];
//! let mut sim = Simulator::with_program(Config::default(), program);
//! let schedule = sim.run().unwrap();
//! assert_eq!(schedule.records[1].timing.start, schedule.records[0].timing.result);
//! ```

/// Common types and constants (cycles, registers, errors).
pub mod common;
/// Simulator configuration (defaults and JSON structures).
pub mod config;
/// Processor model (functional units, dispatch window, scoreboard, hazards).
pub mod core;
/// Instruction set (opcodes, timing tables, instruction records).
pub mod isa;
/// Scheduling loop, program loader, and schedule records.
pub mod sim;
/// Run statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Error type for loading and running programs.
pub use crate::common::SimError;
/// Output of a run.
pub use crate::sim::{Schedule, ScheduleRecord};
/// Cycle-driven scheduler; construct with `Simulator::with_program`.
pub use crate::sim::Simulator;
