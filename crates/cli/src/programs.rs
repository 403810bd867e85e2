//! Built-in sample programs.
//!
//! Each program evaluates a small polynomial the way a CDC compiler would
//! schedule it: operand fetches through A1..A5, arithmetic on X registers,
//! and a result store through A6 or A7.

use cdcsim_core::common::Register::{A1, A2, A3, A4, A6, A7, K, X0, X1, X2, X3, X4, X5, X6, X7};
use cdcsim_core::isa::InstructionLength::{Long, Short};
use cdcsim_core::isa::{Instruction, OpCode};

/// A named sample program.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// Name accepted by `--builtin`.
    pub name: &'static str,
    /// What the program computes.
    pub description: &'static str,
    build: fn() -> Vec<Instruction>,
}

impl Builtin {
    /// Instructions of the program.
    pub fn program(&self) -> Vec<Instruction> {
        (self.build)()
    }
}

/// Every built-in program.
pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "ax2-plus-b",
        description: "Y = A*X^2 + B",
        build: ax2_plus_b,
    },
    Builtin {
        name: "ax2-plus-bx-plus-c",
        description: "Y = A*X^2 + B*X + C",
        build: ax2_plus_bx_plus_c,
    },
];

/// Looks up a built-in program by name.
pub fn find(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name.eq_ignore_ascii_case(name))
}

fn ax2_plus_b() -> Vec<Instruction> {
    vec![
        // fetch X
        Instruction::new(OpCode::SumAjAndKToXi, Long, A1, K, X1).starts_word(),
        // fetch A
        Instruction::new(OpCode::SumAjAndKToXi, Long, A2, K, X2).ends_word(),
        // X^2
        Instruction::new(OpCode::FloatingProduct, Short, X1, X1, X0).starts_word(),
        // A*X^2
        Instruction::new(OpCode::FloatingProduct, Short, X0, X2, X6),
        // fetch B
        Instruction::new(OpCode::SumAjAndKToXi, Long, A3, K, X3).ends_word(),
        // Y
        Instruction::new(OpCode::FloatingSum, Short, X6, X3, X7).starts_word(),
        // store Y
        Instruction::new(OpCode::SumAjAndKToXi, Long, A7, K, X7).ends_word(),
    ]
}

fn ax2_plus_bx_plus_c() -> Vec<Instruction> {
    vec![
        // fetch X
        Instruction::new(OpCode::SumAjAndKToXi, Long, A1, K, X1).starts_word(),
        // fetch A
        Instruction::new(OpCode::SumAjAndKToXi, Long, A2, K, X2).ends_word(),
        // fetch B
        Instruction::new(OpCode::SumAjAndKToXi, Long, A3, K, X3).starts_word(),
        // A*X
        Instruction::new(OpCode::FloatingProduct, Short, X1, X2, X0),
        // A*X + B
        Instruction::new(OpCode::FloatingSum, Short, X0, X3, X5).ends_word(),
        // fetch C
        Instruction::new(OpCode::SumAjAndKToXi, Long, A4, K, X4).starts_word(),
        // (A*X + B)*X
        Instruction::new(OpCode::FloatingProduct, Short, X5, X1, X6),
        // Y
        Instruction::new(OpCode::FloatingSum, Short, X6, X4, X6).ends_word(),
        // store Y
        Instruction::new(OpCode::SumAjAndKToXi, Long, A6, K, X6).starts_word().ends_word(),
    ]
}
