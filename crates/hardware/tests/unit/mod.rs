//! # Unit Components
//!
//! Tests grouped by the layer they exercise, from static tables up to
//! complete runs of the scheduling loop.




/// Scheduling loop scenarios, program loading, and schedule properties.
pub mod sim;

/// Run statistics.
///
/// Checks that [`SimStats`](cdcsim_core::stats::SimStats) counts conflicts,
/// stalls, and clock adjustments the way the schedule shows them.
pub mod stats;
