//! Schedule Properties: Generated Programs.
//!
//! Runs arbitrary straight-line programs on both machines and checks the
//! invariants every schedule must satisfy, whatever the conflicts.

use cdcsim_core::common::Register;
use cdcsim_core::core::HazardKind;
use cdcsim_core::isa::{Instruction, InstructionLength, Machine, OpCode};
use cdcsim_core::Simulator;
use proptest::prelude::*;

use crate::common::config_for;

const REGISTERS: &[Register] = &[
    Register::K,
    Register::X0,
    Register::X1,
    Register::X2,
    Register::X3,
    Register::X6,
    Register::X7,
    Register::A0,
    Register::A1,
    Register::A2,
    Register::A6,
    Register::A7,
    Register::B1,
];

fn instruction() -> impl Strategy<Value = Instruction> {
    (
        prop::sample::select(OpCode::ALL),
        any::<bool>(),
        prop::sample::select(REGISTERS),
        prop::sample::select(REGISTERS),
        prop::sample::select(REGISTERS),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(op, is_long, j, k, i, sow, eow)| {
            let length = if is_long { InstructionLength::Long } else { InstructionLength::Short };
            let mut instr = Instruction::new(op, length, j, k, i);
            instr.start_of_word = sow;
            instr.end_of_word = eow;
            instr
        })
}

fn machine() -> impl Strategy<Value = Machine> {
    prop_oneof![Just(Machine::Cdc6600), Just(Machine::Cdc7600)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_instruction_is_scheduled_once(
        program in prop::collection::vec(instruction(), 0..24),
        machine in machine(),
    ) {
        let mut sim = Simulator::with_program(config_for(machine), program.clone());
        let schedule = sim.run().unwrap();

        prop_assert_eq!(schedule.len(), program.len());
        let mut indices: Vec<usize> = schedule.records.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..program.len()).collect::<Vec<_>>());
        prop_assert!(sim.program().iter().all(|r| r.is_finished()));
    }

    #[test]
    fn timing_follows_hazard_rules(
        program in prop::collection::vec(instruction(), 1..24),
        machine in machine(),
    ) {
        let mut sim = Simulator::with_program(config_for(machine), program);
        let schedule = sim.run().unwrap();

        for record in &schedule.records {
            let t = record.timing;
            prop_assert!(t.issue >= 1);
            prop_assert!(t.issue <= schedule.cycles);
            prop_assert!(t.fetch.is_none() || t.store.is_none());
            match record.hazard {
                HazardKind::NoConflict => {
                    prop_assert_eq!(t.start, t.issue);
                    prop_assert_eq!(t.result, t.start + machine.duration(record.opcode));
                }
                HazardKind::ReadAfterWrite => {
                    prop_assert_eq!(t.result, t.start + machine.duration(record.opcode));
                }
                HazardKind::WriteAfterRead => {
                    prop_assert_eq!(t.start, t.issue);
                }
            }
        }
        // Finalization order is issue order.
        prop_assert!(schedule.records.windows(2).all(|w| w[0].timing.issue < w[1].timing.issue));
    }

    #[test]
    fn runs_are_deterministic(
        program in prop::collection::vec(instruction(), 0..16),
        machine in machine(),
    ) {
        let mut first = Simulator::with_program(config_for(machine), program.clone());
        let mut second = Simulator::with_program(config_for(machine), program);
        let a = first.run().unwrap();
        let b = second.run().unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(first.run().unwrap(), a);
    }
}
