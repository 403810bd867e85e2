//! Text rendering of a schedule.

use std::fmt::Write;

use cdcsim_core::Schedule;
use cdcsim_core::common::Cycle;
use cdcsim_core::isa::Machine;

/// Renders the timing table: one row per instruction in finalization order.
pub fn render_table(machine: Machine, schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{machine}");
    let _ = writeln!(out, "====================== Timing Schedule ======================");
    let _ = writeln!(out, "Code\tLength\tIssue\tStart\tResult\tUnit\tFetch\tStore\tHazard");
    for record in &schedule.records {
        let t = &record.timing;
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            record.opcode,
            record.length.letter(),
            t.issue,
            t.start,
            t.result,
            t.unit_ready,
            optional(t.fetch),
            optional(t.store),
            record.hazard.tag(),
        );
    }
    let _ = write!(out, "Simulation completed in: {} clock cycles", schedule.cycles);
    out
}

fn optional(cycle: Option<Cycle>) -> String {
    cycle.map_or_else(String::new, |c| c.to_string())
}
