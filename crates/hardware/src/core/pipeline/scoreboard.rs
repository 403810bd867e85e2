//! Functional-unit scoreboard.
//!
//! Holds exactly one [`FunctionalUnit`] per [`UnitType`], indexed by unit
//! type, and answers the register-conflict queries the issue logic needs.
//! Conflict scans walk units in [`UnitType::ALL`] order and each pipeline
//! from oldest to newest; the first match wins.

use crate::common::Cycle;
use crate::core::units::{FunctionalUnit, Resident};
use crate::isa::{Instruction, Machine, UnitType};

/// The set of functional units.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    units: [FunctionalUnit; UnitType::COUNT],
}

impl Scoreboard {
    /// Creates idle units with the segment times of `machine`.
    pub fn new(machine: Machine) -> Self {
        Self {
            units: UnitType::ALL.map(|unit| FunctionalUnit::new(unit, machine.segment_time(unit))),
        }
    }

    /// Unit of the given type.
    pub const fn unit(&self, unit: UnitType) -> &FunctionalUnit {
        &self.units[unit.index()]
    }

    /// Mutable unit of the given type.
    pub const fn unit_mut(&mut self, unit: UnitType) -> &mut FunctionalUnit {
        &mut self.units[unit.index()]
    }

    /// Every resident instruction, in scan order.
    pub fn residents(&self) -> impl Iterator<Item = &Resident> {
        self.units.iter().flat_map(|unit| unit.pipeline().iter())
    }

    /// Retires completed instructions on every unit. Returns the number retired.
    pub fn retire_all(&mut self, cycle: Cycle) -> usize {
        self.units.iter_mut().map(|unit| unit.retire(cycle)).sum()
    }

    /// First resident whose output `candidate` reads (read-after-write).
    pub fn find_producer(&self, candidate: &Instruction) -> Option<&Resident> {
        self.residents().find(|r| candidate.reads(r.instruction.output))
    }

    /// First resident that reads `candidate`'s output (write-after-read).
    pub fn find_reader(&self, candidate: &Instruction) -> Option<&Resident> {
        self.residents().find(|r| r.instruction.reads(candidate.output))
    }

    /// Empties every unit.
    pub fn reset(&mut self) {
        for unit in &mut self.units {
            unit.reset();
        }
    }
}
