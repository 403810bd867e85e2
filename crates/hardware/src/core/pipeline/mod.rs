//! Processor issue state.
//!
//! This module contains the state the scheduler steps each cycle:
//! 1. **Window:** The three-slot dispatch window.
//! 2. **Scoreboard:** One functional unit per unit type.
//! 3. **Hazards:** Classification of the dispatch candidate against the scoreboard.

/// Hazard classification (resource, read-after-write, write-after-read).
pub mod hazards;

/// Functional-unit scoreboard and conflict scans.
pub mod scoreboard;

/// Three-slot dispatch window.
pub mod window;

pub use hazards::{Hazard, HazardKind, classify};
pub use scoreboard::Scoreboard;
pub use window::DispatchWindow;
