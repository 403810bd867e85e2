//! Configuration system for the scoreboard simulator.
//!
//! This module defines the configuration structures used to parameterize a run:
//! 1. **Defaults:** The documented machine constants.
//! 2. **General:** Schedule tracing and the liveness bound.
//! 3. **Timing:** Machine model and the memory and word-issue latencies.
//!
//! Configuration is read from JSON; every field is optional and falls back to
//! the defaults, or use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Cycle, SimError};
use crate::isa::Machine;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::{Cycle, constants};

    /// Cycle bound before a run is reported as non-converging.
    pub const MAX_CYCLES: u64 = constants::DEFAULT_MAX_CYCLES;

    /// Memory read latency after an increment's result.
    pub const FETCH_LATENCY: Cycle = constants::FETCH_LATENCY;

    /// Memory write latency after an increment's result.
    pub const STORE_LATENCY: Cycle = constants::STORE_LATENCY;

    /// Minimum spacing between the starts of consecutive instruction words.
    pub const NEW_WORD_TIME: Cycle = constants::NEW_WORD_TIME;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use cdcsim_core::config::Config;
/// use cdcsim_core::isa::Machine;
///
/// let json = r#"{
///     "general": { "max_cycles": 5000 },
///     "timing": { "machine": "6600" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, 5000);
/// assert_eq!(config.timing.machine, Machine::Cdc6600);
/// assert_eq!(config.timing.fetch_latency, 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine model and latencies
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every finalized timing record at info level instead of debug.
    #[serde(default)]
    pub trace_schedule: bool,

    /// Cycle bound after which a run fails with `DidNotConverge`.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_schedule: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Machine model and timing constants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Machine whose duration and segment-time tables are used.
    #[serde(default)]
    pub machine: Machine,

    /// Cycles from an increment's result to the end of its memory read.
    #[serde(default = "TimingConfig::default_fetch_latency")]
    pub fetch_latency: Cycle,

    /// Cycles from an increment's result to the end of its memory write.
    #[serde(default = "TimingConfig::default_store_latency")]
    pub store_latency: Cycle,

    /// Minimum cycles between the starts of consecutive instruction words.
    #[serde(default = "TimingConfig::default_new_word_time")]
    pub new_word_time: Cycle,
}

impl TimingConfig {
    const fn default_fetch_latency() -> Cycle {
        defaults::FETCH_LATENCY
    }

    const fn default_store_latency() -> Cycle {
        defaults::STORE_LATENCY
    }

    const fn default_new_word_time() -> Cycle {
        defaults::NEW_WORD_TIME
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            machine: Machine::default(),
            fetch_latency: defaults::FETCH_LATENCY,
            store_latency: defaults::STORE_LATENCY,
            new_word_time: defaults::NEW_WORD_TIME,
        }
    }
}
