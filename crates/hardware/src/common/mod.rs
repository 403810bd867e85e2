//! Common utilities and types used throughout the scoreboard simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Fixed latencies and the initial value of the cycle counter.
//! 2. **Error Handling:** The `SimError` type returned by fallible operations.
//! 3. **Registers:** The CDC register names and their memory-address roles.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for program loading and simulation.
pub mod error;

/// Register names and address-register classification.
pub mod reg;

pub use constants::{Cycle, FETCH_LATENCY, INITIAL_CYCLE, NEW_WORD_TIME, STORE_LATENCY};
pub use error::SimError;
pub use reg::{AddressRole, Register};
