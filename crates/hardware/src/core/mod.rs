//! Core processor model.
//!
//! This module contains the functional units and the issue state (dispatch
//! window, scoreboard, hazard logic) that the simulator drives each cycle.

/// Issue state: dispatch window, scoreboard, hazard classification.
pub mod pipeline;

/// Functional units.
pub mod units;

pub use self::pipeline::{DispatchWindow, Hazard, HazardKind, Scoreboard};
pub use self::units::FunctionalUnit;
