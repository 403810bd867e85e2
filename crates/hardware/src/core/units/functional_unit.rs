//! Pipelined Functional Unit.
//!
//! Each unit owns a FIFO of the instructions currently in flight on it,
//! ordered by issue cycle. It provides:
//! 1. **Issue Gating:** A reservation flag that blocks new issues while a
//!    read-after-write conflict on this unit is unresolved.
//! 2. **Occupancy:** Enqueue on issue, retirement from the front once the
//!    oldest entry has completed.

use std::collections::VecDeque;

use tracing::trace;

use crate::common::{AddressRole, Cycle};
use crate::isa::{Instruction, Timing, UnitType};

/// An instruction resident in a unit's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resident {
    /// Position of the instruction in the program.
    pub index: usize,
    /// Instruction identity.
    pub instruction: Instruction,
    /// Timing assigned at dispatch.
    pub timing: Timing,
    /// Set while this instruction's delayed start still gates its unit's reservation.
    pub held: bool,
}

impl Resident {
    /// Cycle at which this instruction's output register holds its new value.
    ///
    /// For an increment that sets a read address register the value arrives
    /// with the fetch; for a write address register, with the store.
    pub fn value_ready(&self) -> Cycle {
        match self.instruction.address_role() {
            AddressRole::Read => self.timing.fetch.unwrap_or(self.timing.result),
            AddressRole::Write => self.timing.store.unwrap_or(self.timing.result),
            AddressRole::None => self.timing.result,
        }
    }

    /// Cycle after which this instruction leaves its unit.
    pub fn completion(&self) -> Cycle {
        self.timing.completion()
    }
}

/// One pipelined execution resource.
#[derive(Debug, Clone)]
pub struct FunctionalUnit {
    unit_type: UnitType,
    segment_time: Cycle,
    is_reserved: bool,
    last_start: Option<Cycle>,
    pipeline: VecDeque<Resident>,
}

impl FunctionalUnit {
    /// Creates an idle, unreserved unit.
    pub const fn new(unit_type: UnitType, segment_time: Cycle) -> Self {
        Self {
            unit_type,
            segment_time,
            is_reserved: false,
            last_start: None,
            pipeline: VecDeque::new(),
        }
    }

    /// Kind of operation this unit executes.
    pub const fn unit_type(&self) -> UnitType {
        self.unit_type
    }

    /// Busy time added after a result before the unit is free again.
    pub const fn segment_time(&self) -> Cycle {
        self.segment_time
    }

    /// Returns true while a read-after-write conflict blocks new issues.
    pub const fn is_reserved(&self) -> bool {
        self.is_reserved
    }

    /// Start cycle of the most recently enqueued instruction.
    pub const fn last_start(&self) -> Option<Cycle> {
        self.last_start
    }

    /// Instructions in flight, oldest first.
    pub const fn pipeline(&self) -> &VecDeque<Resident> {
        &self.pipeline
    }

    /// Returns true if a new instruction may be issued to this unit.
    pub const fn is_ready(&self, _cycle: Cycle) -> bool {
        !self.is_reserved
    }

    /// Blocks new issues until a held resident reaches its start cycle.
    pub const fn reserve(&mut self) {
        self.is_reserved = true;
    }

    /// Appends an issued instruction to the pipeline tail.
    pub fn enqueue(&mut self, resident: Resident) {
        debug_assert!(
            self.pipeline.back().is_none_or(|last| last.timing.issue <= resident.timing.issue),
            "pipeline must stay ordered by issue cycle"
        );
        self.last_start = Some(resident.timing.start);
        self.pipeline.push_back(resident);
    }

    /// Releases a resolved reservation and removes the front instruction once it has completed.
    ///
    /// A held resident whose start cycle has been reached clears the
    /// reservation once. At most one instruction leaves per inspection, and
    /// only from the front: a completed entry behind an unfinished one stays
    /// resident, and so still counts for conflicts.
    ///
    /// Returns the number of instructions retired (0 or 1).
    pub fn retire(&mut self, cycle: Cycle) -> usize {
        for resident in &mut self.pipeline {
            if resident.held && resident.timing.start <= cycle {
                resident.held = false;
                self.is_reserved = false;
                trace!(unit = %self.unit_type, index = resident.index, cycle, "reservation released");
            }
        }

        if !self.pipeline.front().is_some_and(|front| front.completion() <= cycle) {
            return 0;
        }
        match self.pipeline.pop_front() {
            Some(done) => {
                trace!(unit = %self.unit_type, index = done.index, cycle, "retired");
                1
            }
            None => 0,
        }
    }

    /// Empties the pipeline and clears the reservation.
    pub fn reset(&mut self) {
        self.is_reserved = false;
        self.last_start = None;
        self.pipeline.clear();
    }
}
