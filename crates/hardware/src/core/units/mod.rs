//! Execution units.
//!
//! The scoreboard holds one pipelined functional unit per unit type.

/// Pipelined functional unit with reservation and retirement.
pub mod functional_unit;

pub use functional_unit::{FunctionalUnit, Resident};
