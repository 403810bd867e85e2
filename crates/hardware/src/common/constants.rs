//! Global Timing Constants.
//!
//! This module defines the fixed timing constants of the modelled machine. It includes:
//! 1. **Clock:** The cycle type and the value the clock holds before the first pass.
//! 2. **Memory:** Fetch and store latencies measured from an instruction's result cycle.
//! 3. **Instruction Words:** The issue granularity of a 60-bit instruction word.
//! 4. **Simulation Control:** The default liveness bound on a single run.

/// A clock cycle number. Signed because the clock starts before cycle zero.
pub type Cycle = i64;

/// Value of the cycle counter before the first pass of the scheduling loop.
///
/// Models the instruction-fetch pipeline fill delay: the first instruction
/// reaches the oldest dispatch slot at cycle 0 and issues at cycle 1.
pub const INITIAL_CYCLE: Cycle = -3;

/// Cycles between an increment instruction's result and the completion of the
/// memory read it triggers.
pub const FETCH_LATENCY: Cycle = 4;

/// Cycles between an increment instruction's result and the completion of the
/// memory write it triggers.
pub const STORE_LATENCY: Cycle = 4;

/// Minimum number of cycles between the starts of two consecutive instruction words.
pub const NEW_WORD_TIME: Cycle = 6;

/// Default upper bound on the cycle counter before a run is declared stalled.
pub const DEFAULT_MAX_CYCLES: u64 = 1_000_000;
