//! CDC Central Processor Opcodes.
//!
//! Defines the opcode catalogue and the static opcode-to-unit map. Each entry
//! carries its catalogue number (the octal digits of the instruction's `fm`
//! field, written as they appear in the reference manual) and the functional
//! unit that executes it. The tables are generated from a single list, so every
//! opcode has exactly one code and one unit.
//!
//! The add and long-add families reuse octal codes 30-37 in the manual, where
//! the branch family also lives, so their catalogue numbers carry a trailing zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::timing::UnitType;
use crate::common::SimError;

macro_rules! opcode_table {
    ($( $(#[$doc:meta])* $name:ident = $code:literal => $unit:ident, )*) => {
        /// Central processor operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "OpCodeRepr")]
        pub enum OpCode {
            $( $(#[$doc])* $name, )*
        }

        impl OpCode {
            /// Every opcode in catalogue order.
            pub const ALL: &'static [Self] = &[$(Self::$name,)*];

            /// Returns the catalogue number of this opcode.
            pub const fn code(self) -> u16 {
                match self {
                    $(Self::$name => $code,)*
                }
            }

            /// Returns the functional unit that executes this opcode.
            pub const fn unit_type(self) -> UnitType {
                match self {
                    $(Self::$name => UnitType::$unit,)*
                }
            }

            /// Looks up an opcode by catalogue number.
            pub const fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$name),)*
                    _ => None,
                }
            }

            /// Returns the symbolic name of this opcode.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }
        }
    };
}

opcode_table! {
    /// 00: program stop.
    Stop = 0 => Branch,
    /// 01: return jump to K.
    ReturnJumpToK = 1 => Branch,
    /// 02: go to K + Bi.
    GoToKPlusBi = 2 => Branch,
    /// 03: go to K if Bi = Bj.
    GoToKIfBiEqualsBj = 3 => Branch,
    /// 04: go to K if Bi != Bj.
    GoToKIfBiNotEqualsBj = 4 => Branch,
    /// 05: go to K if Bi >= Bj.
    GoToKIfBiGreaterOrEqualBj = 5 => Branch,
    /// 06: go to K if Bi < Bj.
    GoToKIfBiLessThanBj = 6 => Branch,
    /// 30: go to K if Xj = 0.
    GoToKIfXEqualsZero = 30 => Branch,
    /// 31: go to K if Xj != 0.
    GoToKIfXNotEqualsZero = 31 => Branch,
    /// 32: go to K if Xj positive.
    GoToKIfXPositive = 32 => Branch,
    /// 33: go to K if Xj negative.
    GoToKIfXNegative = 33 => Branch,
    /// 34: go to K if Xj in range.
    GoToKIfXInRange = 34 => Branch,
    /// 35: go to K if Xj out of range.
    GoToKIfXOutOfRange = 35 => Branch,
    /// 36: go to K if Xj definite.
    GoToKIfXDefinite = 36 => Branch,
    /// 37: go to K if Xj indefinite.
    GoToKIfXIndefinite = 37 => Branch,

    /// 10: transmit Xj to Xi.
    TransmitXjToXi = 10 => Boolean,
    /// 11: logical product of Xj and Xk to Xi.
    LogicalProductXjAndXkToXi = 11 => Boolean,
    /// 12: logical sum of Xj and Xk to Xi.
    LogicalSumXjAndXkToXi = 12 => Boolean,
    /// 13: logical difference of Xj and Xk to Xi.
    LogicalDifferenceXjAndXkToXi = 13 => Boolean,
    /// 14: transmit complement of Xk to Xi.
    TransmitXjAndXkComplementToXi = 14 => Boolean,
    /// 15: logical product of Xj and complement of Xk to Xi.
    LogicalProductXjAndXkComplementToXi = 15 => Boolean,
    /// 16: logical sum of Xj and complement of Xk to Xi.
    LogicalSumXjAndXkComplementToXi = 16 => Boolean,
    /// 17: logical difference of Xj and complement of Xk to Xi.
    LogicalDifferenceXjAndXkComplementToXi = 17 => Boolean,

    /// 20: left shift Xi jk places.
    ShiftXiLeftJkPlaces = 20 => Shift,
    /// 21: right shift Xi jk places.
    ShiftXiRightJkPlaces = 21 => Shift,
    /// 22: left shift Xi nominally Bj places.
    ShiftXiNominallyLeftBjPlaces = 22 => Shift,
    /// 23: right shift Xi nominally Bj places.
    ShiftXiNominallyRightBjPlaces = 23 => Shift,
    /// 24: normalize Xk in Xi and Bj.
    NormalizeXkInXiAndBj = 24 => Shift,
    /// 25: round and normalize Xk in Xi and Bj.
    RoundNormalizeXkInXiAndBj = 25 => Shift,
    /// 26: unpack Xk to Xi and Bj.
    UnpackXkToXiAndBj = 26 => Shift,
    /// 27: pack Xi from Xk and Bj.
    PackXiFromXkAndBj = 27 => Shift,
    /// 43: form jk mask in Xi.
    FormJkMaskInXi = 43 => Shift,

    /// 30: floating sum.
    FloatingSum = 300 => Add,
    /// 31: floating difference.
    FloatingDifference = 310 => Add,
    /// 32: floating double-precision sum.
    FloatingDpSum = 320 => Add,
    /// 33: floating double-precision difference.
    FloatingDpDifference = 330 => Add,
    /// 34: round floating sum.
    RoundFloatingSum = 340 => Add,
    /// 35: round floating difference.
    RoundFloatingDifference = 350 => Add,

    /// 36: integer sum.
    IntegerSum = 360 => LongAdd,
    /// 37: integer difference.
    IntegerDifference = 370 => LongAdd,

    /// 44: floating divide.
    FloatingDivide = 44 => Divide,
    /// 45: round floating divide.
    RoundFloatingDivide = 45 => Divide,
    /// 46: pass.
    Pass = 46 => Divide,
    /// 47: population count.
    SumOfOnes = 47 => Divide,

    /// 40: floating product.
    FloatingProduct = 40 => Multiply,
    /// 41: round floating product.
    RoundFloatingProduct = 41 => Multiply,
    /// 42: floating double-precision product.
    FloatingDpProduct = 42 => Multiply,

    /// 50: Aj + K to Ai.
    SumAjAndKToAi = 50 => Increment,
    /// 51: Bj + K to Ai.
    SumBjAndKToAi = 51 => Increment,
    /// 52: Xj + K to Ai.
    SumXjAndKToAi = 52 => Increment,
    /// 53: Xj + Bk to Ai.
    SumXjAndBkToAi = 53 => Increment,
    /// 54: Aj + Bk to Ai.
    SumAjAndBkToAi = 54 => Increment,
    /// 55: Aj - Bk to Ai.
    DifferenceAjAndBkToAi = 55 => Increment,
    /// 56: Bj + Bk to Ai.
    SumBjAndBkToAi = 56 => Increment,
    /// 57: Bj - Bk to Ai.
    DifferenceBjAndBkToAi = 57 => Increment,
    /// 60: Aj + K to Bi.
    SumAjAndKToBi = 60 => Increment,
    /// 61: Bj + K to Bi.
    SumBjAndKToBi = 61 => Increment,
    /// 62: Xj + K to Bi.
    SumXjAndKToBi = 62 => Increment,
    /// 63: Xj + Bk to Bi.
    SumXjAndBkToBi = 63 => Increment,
    /// 64: Aj + Bk to Bi.
    SumAjAndBkToBi = 64 => Increment,
    /// 65: Aj - Bk to Bi.
    DifferenceAjAndBkToBi = 65 => Increment,
    /// 66: Bj + Bk to Bi.
    SumBjAndBkToBi = 66 => Increment,
    /// 67: Bj - Bk to Bi.
    DifferenceBjAndBkToBi = 67 => Increment,
    /// 70: Aj + K to Xi.
    SumAjAndKToXi = 70 => Increment,
    /// 71: Bj + K to Xi.
    SumBjAndKToXi = 71 => Increment,
    /// 72: Xj + K to Xi.
    SumXjAndKToXi = 72 => Increment,
    /// 73: Xj + Bk to Xi.
    SumXjAndBkToXi = 73 => Increment,
    /// 74: Aj + Bk to Xi.
    SumAjAndBkToXi = 74 => Increment,
    /// 75: Aj - Bk to Xi.
    DifferenceAjAndBkToXi = 75 => Increment,
    /// 76: Bj + Bk to Xi.
    SumBjAndBkToXi = 76 => Increment,
    /// 77: Bj - Bk to Xi.
    DifferenceBjAndBkToXi = 77 => Increment,
}

impl OpCode {
    /// Returns true for the register-to-register sum/difference family.
    ///
    /// Only these opcodes can set an address register and so trigger a
    /// memory fetch or store.
    pub const fn is_increment(self) -> bool {
        matches!(self.unit_type(), UnitType::Increment)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.code())
    }
}

impl FromStr for OpCode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SimError::UnknownOpcodeName(s.to_owned()))
    }
}

impl TryFrom<u16> for OpCode {
    type Error = SimError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(SimError::UnknownOpcode(code))
    }
}

/// Serialized form of an opcode: a catalogue number or a symbolic name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OpCodeRepr {
    /// Catalogue number, e.g. `40`.
    Code(u16),
    /// Variant name, matched case-insensitively.
    Name(String),
}

impl TryFrom<OpCodeRepr> for OpCode {
    type Error = SimError;

    fn try_from(repr: OpCodeRepr) -> Result<Self, Self::Error> {
        match repr {
            OpCodeRepr::Code(code) => Self::try_from(code),
            OpCodeRepr::Name(name) => name.parse(),
        }
    }
}
