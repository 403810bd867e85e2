//! Simulation statistics collection and reporting.
//!
//! This module tracks where the cycles of a run went. It provides:
//! 1. **Totals:** Elapsed cycles and instructions issued.
//! 2. **Conflicts:** Instructions issued clear, under a read-after-write
//!    conflict, or under a write-after-read conflict.
//! 3. **Stalls:** Cycles the oldest slot waited on a reserved unit.
//! 4. **Adjustments:** Cycles added by long instructions and skipped at word boundaries.

use std::fmt;

use serde::Serialize;

use crate::common::Cycle;
use crate::core::HazardKind;

/// Counters for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Final value of the cycle counter.
    pub cycles: Cycle,
    /// Instructions that received timing.
    pub instructions_issued: u64,
    /// Instructions issued without a register conflict.
    pub issued_clear: u64,
    /// Instructions issued under a read-after-write conflict.
    pub issued_raw: u64,
    /// Instructions issued under a write-after-read conflict.
    pub issued_war: u64,
    /// Cycles the oldest slot waited on a reserved unit.
    pub stalls_resource: u64,
    /// Extra cycles charged for long instructions.
    pub long_instruction_cycles: u64,
    /// Cycles skipped to align with an instruction-word boundary.
    pub word_boundary_cycles: u64,
}

impl SimStats {
    /// Counts one issued instruction.
    pub const fn record_issue(&mut self, kind: HazardKind) {
        self.instructions_issued += 1;
        match kind {
            HazardKind::NoConflict => self.issued_clear += 1,
            HazardKind::ReadAfterWrite => self.issued_raw += 1,
            HazardKind::WriteAfterRead => self.issued_war += 1,
        }
    }

    /// Cycles per instruction, or zero for an empty run.
    pub fn cpi(&self) -> f64 {
        if self.instructions_issued == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_issued as f64
        }
    }

    /// Prints the statistics to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "SCOREBOARD STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "cycles                   {}", self.cycles)?;
        writeln!(f, "instructions             {}", self.instructions_issued)?;
        writeln!(f, "cpi                      {:.2}", self.cpi())?;
        writeln!(f, "issued clear             {}", self.issued_clear)?;
        writeln!(f, "issued raw (2nd order)   {}", self.issued_raw)?;
        writeln!(f, "issued war (3rd order)   {}", self.issued_war)?;
        writeln!(f, "stalls unit reserved     {}", self.stalls_resource)?;
        writeln!(f, "long instruction cycles  {}", self.long_instruction_cycles)?;
        write!(f, "word boundary cycles     {}", self.word_boundary_cycles)
    }
}
