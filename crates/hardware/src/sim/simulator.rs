//! Simulator: drives the clock, the dispatch window, and the scoreboard.
//!
//! Each pass of the scheduling loop advances the clock by one cycle. If the
//! oldest dispatch slot is occupied, completed instructions are retired from
//! every unit and the occupant is classified and, if its unit is free, issued.
//! Whenever the oldest slot is empty the window shifts to admit the next
//! program instruction. A run ends once every instruction has timing.
//!
//! The window is owned by [`Simulator::run`] and handed to each step, so no
//! slot outlives the run that filled it.

use tracing::{debug, info, trace, warn};

use crate::common::{AddressRole, Cycle, INITIAL_CYCLE, SimError};
use crate::config::Config;
use crate::core::pipeline::{DispatchWindow, Hazard, HazardKind, Scoreboard, classify};
use crate::core::units::Resident;
use crate::isa::{Instruction, InstructionLength, InstructionRecord, Timing};
use crate::sim::schedule::{Schedule, ScheduleRecord};
use crate::stats::SimStats;

/// Stage of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The window is filling; nothing has reached the oldest slot yet.
    Priming,
    /// Instructions are being dispatched.
    Scheduling,
    /// Every instruction has timing.
    Done,
}

/// Cycle-driven scheduler for one program.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: Config,
    program: Vec<InstructionRecord>,
    scoreboard: Scoreboard,
    cycle: Cycle,
    next_fetch: usize,
    last_word_start: Cycle,
    remaining: usize,
    phase: Phase,
    records: Vec<ScheduleRecord>,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator with an empty program.
    pub fn new(config: Config) -> Self {
        let scoreboard = Scoreboard::new(config.timing.machine);
        Self {
            config,
            program: Vec::new(),
            scoreboard,
            cycle: INITIAL_CYCLE,
            next_fetch: 0,
            last_word_start: 0,
            remaining: 0,
            phase: Phase::Priming,
            records: Vec::new(),
            stats: SimStats::default(),
        }
    }

    /// Creates a simulator and loads `program`.
    pub fn with_program(config: Config, program: Vec<Instruction>) -> Self {
        let mut sim = Self::new(config);
        sim.load_program(program);
        sim
    }

    /// Replaces the program and resets all run state.
    pub fn load_program(&mut self, program: Vec<Instruction>) {
        self.program = program.into_iter().map(InstructionRecord::new).collect();
        self.reset();
    }

    /// Clears timing, the clock, every unit, the log, and the statistics.
    pub fn reset(&mut self) {
        for record in &mut self.program {
            record.timing = None;
            record.is_being_held = false;
        }
        self.scoreboard.reset();
        self.cycle = INITIAL_CYCLE;
        self.next_fetch = 0;
        self.last_word_start = 0;
        self.remaining = self.program.len();
        self.phase = Phase::Priming;
        self.records.clear();
        self.stats = SimStats::default();
    }

    /// Runs the loaded program to completion.
    ///
    /// Starts from a full reset, so running twice yields identical schedules.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DidNotConverge`] if the clock passes
    /// `general.max_cycles` with instructions still lacking timing.
    pub fn run(&mut self) -> Result<Schedule, SimError> {
        self.reset();
        if self.program.is_empty() {
            self.cycle = 0;
            self.phase = Phase::Done;
            return Ok(Schedule::default());
        }

        let limit = Cycle::try_from(self.config.general.max_cycles).unwrap_or(Cycle::MAX);
        let mut window = DispatchWindow::new();
        info!(
            machine = %self.config.timing.machine,
            instructions = self.program.len(),
            "run started"
        );

        while self.remaining > 0 {
            self.cycle += 1;
            if self.cycle > limit {
                warn!(cycle = self.cycle, pending = self.remaining, "schedule did not converge");
                return Err(SimError::DidNotConverge {
                    cycle: self.cycle,
                    pending: self.remaining,
                });
            }

            if window.oldest.is_some() {
                self.phase = Phase::Scheduling;
                let retired = self.scoreboard.retire_all(self.cycle);
                if retired > 0 {
                    trace!(cycle = self.cycle, retired, "pipelines drained");
                }
                self.dispatch(&mut window);
            }

            if window.oldest.is_none() {
                self.advance_window(&mut window);
            }
        }

        self.phase = Phase::Done;
        self.stats.cycles = self.cycle;
        info!(cycles = self.cycle, "run complete");
        Ok(Schedule {
            records: self.records.clone(),
            cycles: self.cycle,
        })
    }

    /// Current stage of the run.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current value of the cycle counter.
    pub const fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// Statistics of the most recent run.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Loaded program with the timing assigned so far.
    pub fn program(&self) -> &[InstructionRecord] {
        &self.program
    }

    /// Functional units.
    pub const fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Attempts to issue the instruction in the oldest slot.
    fn dispatch(&mut self, window: &mut DispatchWindow) {
        let Some(index) = window.oldest else {
            return;
        };
        let instruction = self.program[index].instruction;
        let unit_type = instruction.opcode.unit_type();
        let now = self.cycle;
        let duration = self.config.timing.machine.duration(instruction.opcode);
        let segment_time = self.scoreboard.unit(unit_type).segment_time();

        let (start, result, unit_ready, kind) = match classify(&self.scoreboard, &instruction, now) {
            Hazard::ResourceBusy => {
                self.stats.stalls_resource += 1;
                debug!(cycle = now, index, unit = %unit_type, "unit reserved, holding");
                return;
            }
            Hazard::ReadAfterWrite(producer) => {
                let start = producer.value_ready();
                (
                    start,
                    start + duration,
                    producer.timing.result + segment_time,
                    HazardKind::ReadAfterWrite,
                )
            }
            Hazard::WriteAfterRead(reader) => (
                now,
                reader.timing.result,
                reader.timing.result + segment_time,
                HazardKind::WriteAfterRead,
            ),
            Hazard::Clear => (now, now + duration, now + segment_time, HazardKind::NoConflict),
        };

        let (fetch, store) = match instruction.address_role() {
            AddressRole::Read => (Some(result + self.config.timing.fetch_latency), None),
            AddressRole::Write => (None, Some(result + self.config.timing.store_latency)),
            AddressRole::None => (None, None),
        };
        let timing = Timing {
            issue: now,
            start,
            result,
            unit_ready,
            fetch,
            store,
        };
        let held = kind != HazardKind::NoConflict;

        let unit = self.scoreboard.unit_mut(unit_type);
        if kind == HazardKind::ReadAfterWrite {
            unit.reserve();
        }
        unit.enqueue(Resident {
            index,
            instruction,
            timing,
            held,
        });

        let record = &mut self.program[index];
        debug_assert!(!record.is_finished(), "timing is written once per run");
        record.timing = Some(timing);
        record.is_being_held = held;
        self.remaining -= 1;
        self.stats.record_issue(kind);

        let entry = ScheduleRecord {
            index,
            opcode: instruction.opcode,
            length: instruction.length,
            unit: unit_type,
            hazard: kind,
            timing,
        };
        if self.config.general.trace_schedule {
            info!(?entry, "issued");
        } else {
            debug!(cycle = now, index, hazard = kind.tag(), start, result, "issued");
        }
        self.records.push(entry);
        window.clear_oldest();

        if instruction.length == InstructionLength::Long {
            self.cycle += 1;
            self.stats.long_instruction_cycles += 1;
        }

        if instruction.end_of_word {
            let boundary = self.last_word_start + self.config.timing.new_word_time - 1;
            if boundary > self.cycle {
                trace!(from = self.cycle, to = boundary, "word boundary");
                self.stats.word_boundary_cycles += (boundary - self.cycle) as u64;
                self.cycle = boundary;
            }
        }
    }

    /// Shifts the window and admits the next program instruction, if any.
    fn advance_window(&mut self, window: &mut DispatchWindow) {
        if window
            .middle
            .is_some_and(|i| self.program[i].instruction.start_of_word)
        {
            self.last_word_start = self.cycle + 1;
        }

        let next = (self.next_fetch < self.program.len()).then_some(self.next_fetch);
        if next.is_some() {
            self.next_fetch += 1;
        }
        window.advance(next);
        trace!(cycle = self.cycle, ?window, "window advanced");
    }
}
