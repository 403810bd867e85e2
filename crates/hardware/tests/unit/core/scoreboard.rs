//! Scoreboard Tests: Unit Indexing and Conflict Scans.

use cdcsim_core::common::Register::{self, X1, X2, X3, X4, X5};
use cdcsim_core::core::Scoreboard;
use cdcsim_core::core::units::Resident;
use cdcsim_core::isa::{Instruction, InstructionLength, Machine, OpCode, Timing, UnitType};

fn instr(op: OpCode, j: Register, k: Register, i: Register) -> Instruction {
    Instruction::new(op, InstructionLength::Short, j, k, i)
}

fn issue(sb: &mut Scoreboard, index: usize, instruction: Instruction, issue: i64, result: i64) {
    sb.unit_mut(instruction.opcode.unit_type()).enqueue(Resident {
        index,
        instruction,
        timing: Timing {
            issue,
            start: issue,
            result,
            unit_ready: issue + 1,
            fetch: None,
            store: None,
        },
        held: false,
    });
}

#[test]
fn one_unit_per_type_with_machine_segment_times() {
    for machine in [Machine::Cdc6600, Machine::Cdc7600] {
        let sb = Scoreboard::new(machine);
        for unit_type in UnitType::ALL {
            let unit = sb.unit(unit_type);
            assert_eq!(unit.unit_type(), unit_type);
            assert_eq!(unit.segment_time(), machine.segment_time(unit_type));
        }
    }
}

#[test]
fn producer_scan_finds_writer_of_operand() {
    let mut sb = Scoreboard::new(Machine::Cdc7600);
    issue(&mut sb, 0, instr(OpCode::FloatingSum, X1, X2, X3), 1, 5);

    let reads_x3 = instr(OpCode::FloatingProduct, X3, X4, X5);
    assert_eq!(sb.find_producer(&reads_x3).map(|r| r.index), Some(0));

    let unrelated = instr(OpCode::FloatingProduct, X4, X4, X5);
    assert!(sb.find_producer(&unrelated).is_none());
}

#[test]
fn reader_scan_finds_pending_consumer_of_output() {
    let mut sb = Scoreboard::new(Machine::Cdc7600);
    issue(&mut sb, 0, instr(OpCode::FloatingProduct, X1, X2, X3), 1, 6);

    let writes_x2 = instr(OpCode::FloatingSum, X4, X5, X2);
    assert_eq!(sb.find_reader(&writes_x2).map(|r| r.index), Some(0));
}

#[test]
fn scan_visits_units_in_scoreboard_order() {
    let mut sb = Scoreboard::new(Machine::Cdc7600);
    // Issued first, but lives on the increment unit (last in scan order).
    issue(&mut sb, 0, instr(OpCode::SumAjAndKToXi, Register::A1, Register::K, X1), 1, 3);
    // Issued later on the add unit.
    issue(&mut sb, 1, instr(OpCode::FloatingSum, X4, X5, X2), 3, 7);

    let reads_both = instr(OpCode::FloatingProduct, X1, X2, X3);
    assert_eq!(sb.find_producer(&reads_both).map(|r| r.index), Some(1));
}

#[test]
fn retire_all_counts_every_unit() {
    let mut sb = Scoreboard::new(Machine::Cdc7600);
    issue(&mut sb, 0, instr(OpCode::FloatingSum, X1, X2, X3), 1, 5);
    issue(&mut sb, 1, instr(OpCode::FloatingProduct, X1, X2, X4), 2, 7);
    assert_eq!(sb.residents().count(), 2);
    assert_eq!(sb.retire_all(5), 1);
    assert_eq!(sb.retire_all(7), 1);
    assert_eq!(sb.residents().count(), 0);
}

#[test]
fn reset_empties_all_units() {
    let mut sb = Scoreboard::new(Machine::Cdc7600);
    issue(&mut sb, 0, instr(OpCode::FloatingSum, X1, X2, X3), 1, 5);
    sb.unit_mut(UnitType::Add).reserve();
    sb.reset();
    assert_eq!(sb.residents().count(), 0);
    assert!(UnitType::ALL.iter().all(|&u| !sb.unit(u).is_reserved()));
}
