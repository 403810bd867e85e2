//! Issue Hazard Classification.
//!
//! Decides how the instruction in the oldest dispatch slot may issue. Checks
//! run in strict priority order:
//! 1. **First order (resource):** the target unit is reserved; nothing issues.
//! 2. **Second order (read-after-write):** a resident instruction has yet to
//!    produce a register the candidate reads; the candidate issues but its
//!    start waits for that value.
//! 3. **Third order (write-after-read):** a resident instruction has yet to
//!    consume a register the candidate writes; the candidate starts now but
//!    its result is pinned to the reader's.
//! 4. **Clear:** the candidate issues and starts immediately.

use serde::Serialize;

use super::scoreboard::Scoreboard;
use crate::common::Cycle;
use crate::core::units::Resident;
use crate::isa::Instruction;

/// Outcome of classifying a dispatch candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    /// Target unit is reserved; retry next cycle.
    ResourceBusy,
    /// Candidate reads the output of this resident instruction.
    ReadAfterWrite(Resident),
    /// Candidate overwrites an operand of this resident instruction.
    WriteAfterRead(Resident),
    /// No conflict.
    Clear,
}

/// Conflict an instruction was issued under, as reported in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HazardKind {
    /// Issued and started on the same cycle.
    NoConflict,
    /// Second-order conflict: start delayed until an operand is produced.
    ReadAfterWrite,
    /// Third-order conflict: result pinned to a pending reader.
    WriteAfterRead,
}

impl HazardKind {
    /// Short tag used in schedule listings.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::NoConflict => "-",
            Self::ReadAfterWrite => "RAW",
            Self::WriteAfterRead => "WAR",
        }
    }
}

/// Classifies `candidate` against the scoreboard state at `cycle`.
pub fn classify(scoreboard: &Scoreboard, candidate: &Instruction, cycle: Cycle) -> Hazard {
    let unit = scoreboard.unit(candidate.opcode.unit_type());
    if !unit.is_ready(cycle) {
        return Hazard::ResourceBusy;
    }
    if let Some(producer) = scoreboard.find_producer(candidate) {
        return Hazard::ReadAfterWrite(*producer);
    }
    if let Some(reader) = scoreboard.find_reader(candidate) {
        return Hazard::WriteAfterRead(*reader);
    }
    Hazard::Clear
}
