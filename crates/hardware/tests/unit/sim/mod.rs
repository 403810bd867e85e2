//! Unit tests for the scheduling loop and its inputs.


/// Properties that hold for every generated program.
pub mod properties;
