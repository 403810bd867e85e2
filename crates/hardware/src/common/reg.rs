//! CDC Register Names.
//!
//! The machine has three register banks of eight registers each plus the
//! immediate constant field `K`:
//! 1. **X registers:** 60-bit operand registers.
//! 2. **A registers:** 18-bit address registers. Setting A1..A5 reads memory
//!    into the matching X register; setting A6..A7 writes the matching X
//!    register to memory.
//! 3. **B registers:** 18-bit index registers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Memory role of a register when it is the first operand of an increment instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressRole {
    /// A1..A5: the increment triggers a memory read.
    Read,
    /// A6..A7: the increment triggers a memory write.
    Write,
    /// Any other register.
    None,
}

/// Symbolic register name.
///
/// `K` stands for the immediate constant field of a long instruction.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Register {
    #[serde(alias = "Ki")]
    K,
    X0,
    X1,
    X2,
    X3,
    X4,
    X5,
    X6,
    X7,
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
    B0,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
}

impl Register {
    /// Returns the memory role this register has as an increment target address.
    pub const fn address_role(self) -> AddressRole {
        match self {
            Self::A1 | Self::A2 | Self::A3 | Self::A4 | Self::A5 => AddressRole::Read,
            Self::A6 | Self::A7 => AddressRole::Write,
            _ => AddressRole::None,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
