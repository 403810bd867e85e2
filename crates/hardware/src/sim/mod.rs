//! Scheduling loop, program loading, and run output.
//!
//! Provides the cycle-driven simulator, the JSON program loader, and the
//! structured schedule a run produces.

/// JSON program loader.
pub mod loader;

/// Timing records produced by a run.
pub mod schedule;

/// Cycle-driven scheduler.
pub mod simulator;

pub use loader::{load_program_file, parse_program};
pub use schedule::{Schedule, ScheduleRecord};
pub use simulator::{Phase, Simulator};
