//! Simulator error definitions.
//!
//! Program loading rejects malformed input before any cycle is simulated, so
//! the only error a run itself can produce is a failure to converge.

use thiserror::Error;

use super::constants::Cycle;

/// Errors produced while loading a program or running the scheduler.
#[derive(Debug, Error)]
pub enum SimError {
    /// An opcode catalogue number with no entry in the opcode tables.
    #[error("unknown opcode {0:02}")]
    UnknownOpcode(u16),

    /// An opcode name with no entry in the opcode tables.
    #[error("unknown opcode name `{0}`")]
    UnknownOpcodeName(String),

    /// A machine name other than 6600 or 7600.
    #[error("unknown machine `{0}` (expected 6600 or 7600)")]
    UnknownMachine(String),

    /// The program text has no instruction list.
    #[error("program has no `instructions` array")]
    MissingInstructions,

    /// The program text could not be parsed.
    #[error("malformed program: {0}")]
    Parse(#[from] serde_json::Error),

    /// A program or configuration file could not be read.
    #[error("cannot read `{path}`: {source}")]
    Io {
        /// Path of the file that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The scheduling loop passed its cycle bound with instructions still pending.
    ///
    /// Indicates a hazard chain that never drains.
    #[error("schedule did not converge by cycle {cycle}: {pending} instruction(s) pending")]
    DidNotConverge {
        /// Cycle at which the run was abandoned.
        cycle: Cycle,
        /// Number of instructions without timing.
        pending: usize,
    },
}
