//! Shared builders and harness for scheduler tests.

use cdcsim_core::common::Register::{self, A1, A2, A3, A6, K, X0, X1, X2, X3, X6, X7};
use cdcsim_core::config::Config;
use cdcsim_core::isa::{Instruction, InstructionLength, Machine, OpCode};
use cdcsim_core::{Schedule, ScheduleRecord, Simulator};

/// Short (15-bit) instruction `i = j op k`.
pub fn short(op: OpCode, j: Register, k: Register, i: Register) -> Instruction {
    Instruction::new(op, InstructionLength::Short, j, k, i)
}

/// Long (30-bit) instruction `i = j op K`.
pub fn long(op: OpCode, j: Register, i: Register) -> Instruction {
    Instruction::new(op, InstructionLength::Long, j, K, i)
}

/// Memory read of `X<n>` through `A<n>`.
pub fn fetch(a: Register, x: Register) -> Instruction {
    long(OpCode::SumAjAndKToXi, a, x)
}

/// Y = A*X^2 + B, packed into three instruction words.
pub fn ax2_plus_b() -> Vec<Instruction> {
    vec![
        fetch(A1, X1).starts_word(),
        fetch(A2, X2).ends_word(),
        short(OpCode::FloatingProduct, X1, X1, X0).starts_word(),
        short(OpCode::FloatingProduct, X0, X2, X6),
        fetch(A3, X3).ends_word(),
        short(OpCode::FloatingSum, X6, X3, X7).starts_word(),
        long(OpCode::SumAjAndKToXi, A6, X7).ends_word(),
    ]
}

/// Configuration for `machine` with every other setting at its default.
pub fn config_for(machine: Machine) -> Config {
    let mut config = Config::default();
    config.timing.machine = machine;
    config
}

/// Runs `program` on the default 7600 configuration.
pub fn run(program: Vec<Instruction>) -> (Simulator, Schedule) {
    run_with(Config::default(), program)
}

/// Runs `program` with `config`, panicking if the run fails.
pub fn run_with(config: Config, program: Vec<Instruction>) -> (Simulator, Schedule) {
    let mut sim = Simulator::with_program(config, program);
    let schedule = sim.run().unwrap();
    (sim, schedule)
}

/// Record of the instruction at program position `index`.
pub fn record(schedule: &Schedule, index: usize) -> ScheduleRecord {
    *schedule.record(index).unwrap()
}
