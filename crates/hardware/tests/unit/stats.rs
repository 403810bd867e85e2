//! # Statistics Verification
//!
//! Checks that run statistics agree with the schedule they describe.

use cdcsim_core::common::Register::{X0, X1, X2, X3, X4, X5, X6, X7};
use cdcsim_core::core::HazardKind;
use cdcsim_core::isa::OpCode;
use cdcsim_core::stats::SimStats;
use pretty_assertions::assert_eq;

use crate::common::{ax2_plus_b, run, short};

#[test]
fn counters_match_schedule() {
    let (sim, schedule) = run(ax2_plus_b());
    let stats = sim.stats();

    let count = |kind: HazardKind| schedule.records.iter().filter(|r| r.hazard == kind).count() as u64;
    assert_eq!(stats.cycles, schedule.cycles);
    assert_eq!(stats.instructions_issued, schedule.len() as u64);
    assert_eq!(stats.issued_clear, count(HazardKind::NoConflict));
    assert_eq!(stats.issued_raw, count(HazardKind::ReadAfterWrite));
    assert_eq!(stats.issued_war, count(HazardKind::WriteAfterRead));
}

#[test]
fn stall_and_war_counters() {
    let (sim, _) = run(vec![
        short(OpCode::FloatingProduct, X1, X2, X3),
        short(OpCode::FloatingProduct, X3, X4, X5),
        short(OpCode::FloatingProduct, X6, X7, X0),
        short(OpCode::FloatingSum, X6, X7, X4),
    ]);
    let stats = sim.stats();
    assert_eq!(stats.stalls_resource, 3);
    assert_eq!(stats.issued_war, 1);
    assert_eq!(stats.word_boundary_cycles, 0);
}

#[test]
fn stats_reset_between_runs() {
    let (mut sim, _) = run(ax2_plus_b());
    let first = sim.stats().clone();
    let _ = sim.run().unwrap();
    assert_eq!(sim.stats(), &first);
}

#[test]
fn report_and_json() {
    let (sim, _) = run(ax2_plus_b());
    let text = sim.stats().to_string();
    assert!(text.contains("SCOREBOARD STATISTICS"));
    assert!(text.contains("cycles                   18"));

    let json = serde_json::to_value(sim.stats()).unwrap();
    assert_eq!(json["cycles"], 18);
    assert_eq!(json["issued_raw"], 2);
    assert_eq!(SimStats::default().instructions_issued, 0);
}
