//! Functional Unit Tests: Reservation and Retirement.
//!
//! Verifies that a unit keeps its residents in issue order, retires only from
//! the front, and releases a reservation when the held resident starts.

use cdcsim_core::common::{Cycle, Register};
use cdcsim_core::core::units::{FunctionalUnit, Resident};
use cdcsim_core::isa::{Instruction, InstructionLength, OpCode, Timing, UnitType};

fn multiply_unit() -> FunctionalUnit {
    FunctionalUnit::new(UnitType::Multiply, 2)
}

fn resident(index: usize, issue: Cycle, start: Cycle, result: Cycle, held: bool) -> Resident {
    Resident {
        index,
        instruction: Instruction::new(
            OpCode::FloatingProduct,
            InstructionLength::Short,
            Register::X1,
            Register::X2,
            Register::X3,
        ),
        timing: Timing {
            issue,
            start,
            result,
            unit_ready: result + 2,
            fetch: None,
            store: None,
        },
        held,
    }
}

#[test]
fn new_unit_is_idle() {
    let unit = multiply_unit();
    assert!(unit.pipeline().is_empty());
    assert!(!unit.is_reserved());
    assert!(unit.is_ready(0));
    assert_eq!(unit.last_start(), None);
    assert_eq!(unit.segment_time(), 2);
}

#[test]
fn enqueue_tracks_last_start() {
    let mut unit = multiply_unit();
    unit.enqueue(resident(0, 1, 1, 6, false));
    unit.enqueue(resident(1, 2, 6, 11, true));
    assert_eq!(unit.pipeline().len(), 2);
    assert_eq!(unit.last_start(), Some(6));
}

#[test]
fn retire_waits_for_completion() {
    let mut unit = multiply_unit();
    unit.enqueue(resident(0, 1, 1, 6, false));
    assert_eq!(unit.retire(5), 0);
    assert_eq!(unit.retire(6), 1);
    assert!(unit.pipeline().is_empty());
}

#[test]
fn retire_is_front_only() {
    let mut unit = multiply_unit();
    unit.enqueue(resident(0, 1, 1, 20, false));
    unit.enqueue(resident(1, 2, 2, 7, false));

    // The second entry has completed but is behind an unfinished one.
    assert_eq!(unit.retire(10), 0);
    assert_eq!(unit.pipeline().len(), 2);

    // The front leaves first; the entry behind it needs a later inspection.
    assert_eq!(unit.retire(20), 1);
    assert_eq!(unit.pipeline()[0].index, 1);
    assert_eq!(unit.retire(20), 1);
}

#[test]
fn one_removal_per_inspection() {
    let mut unit = multiply_unit();
    unit.enqueue(resident(0, 1, 1, 6, false));
    unit.enqueue(resident(1, 2, 2, 7, false));
    unit.enqueue(resident(2, 3, 3, 8, false));
    assert_eq!(unit.retire(30), 1);
    assert_eq!(unit.pipeline().len(), 2);
}

#[test]
fn reservation_released_when_held_resident_starts() {
    let mut unit = multiply_unit();
    unit.enqueue(resident(0, 1, 1, 6, false));
    unit.enqueue(resident(1, 2, 6, 11, true));
    unit.reserve();
    assert!(!unit.is_ready(3));

    let _ = unit.retire(5);
    assert!(unit.is_reserved());

    let _ = unit.retire(6);
    assert!(!unit.is_reserved());
    assert!(!unit.pipeline()[0].held, "held flag is consumed");
}

#[test]
fn consumed_hold_does_not_release_later_reservation() {
    let mut unit = multiply_unit();
    unit.enqueue(resident(0, 1, 4, 9, true));
    unit.reserve();
    let _ = unit.retire(4);
    assert!(!unit.is_reserved());

    unit.enqueue(resident(1, 5, 9, 14, true));
    unit.reserve();
    let _ = unit.retire(5);
    assert!(unit.is_reserved(), "only the new hold can release this reservation");
}

#[test]
fn fetch_extends_residency() {
    let mut unit = FunctionalUnit::new(UnitType::Increment, 1);
    let mut fetcher = resident(0, 1, 1, 3, false);
    fetcher.instruction = Instruction::new(
        OpCode::SumAjAndKToXi,
        InstructionLength::Long,
        Register::A1,
        Register::K,
        Register::X1,
    );
    fetcher.timing.fetch = Some(7);
    assert_eq!(fetcher.value_ready(), 7);

    unit.enqueue(fetcher);
    assert_eq!(unit.retire(3), 0);
    assert_eq!(unit.retire(7), 1);
}

#[test]
fn reset_clears_everything() {
    let mut unit = multiply_unit();
    unit.enqueue(resident(0, 1, 6, 11, true));
    unit.reserve();
    unit.reset();
    assert!(unit.pipeline().is_empty());
    assert!(!unit.is_reserved());
    assert_eq!(unit.last_start(), None);
}
