//! Program Loader.
//!
//! Reads a program from JSON. Two layouts are accepted: a bare array of
//! instructions, or an object with an `instructions` array. Opcodes may be
//! given as catalogue numbers or names. Every opcode is checked against the
//! catalogue before the program is returned, so an unknown opcode is rejected
//! before any cycle is simulated.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::common::SimError;
use crate::isa::Instruction;
use crate::isa::opcodes::{OpCode, OpCodeRepr};

/// Parses a program from JSON text.
pub fn parse_program(text: &str) -> Result<Vec<Instruction>, SimError> {
    let entries = match serde_json::from_str::<Value>(text)? {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("instructions") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(SimError::MissingInstructions),
        },
        _ => return Err(SimError::MissingInstructions),
    };

    let program = entries
        .into_iter()
        .map(|entry| -> Result<Instruction, SimError> {
            if let Some(opcode) = entry.get("opcode") {
                let repr: OpCodeRepr = serde_json::from_value(opcode.clone())?;
                let _: OpCode = OpCode::try_from(repr)?;
            }
            Ok(serde_json::from_value(entry)?)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(instructions = program.len(), "program parsed");
    Ok(program)
}

/// Reads and parses a program file.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<Instruction>, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_program(&text)
}
