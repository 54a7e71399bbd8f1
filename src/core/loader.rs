// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Program loading for LS8
//!
//! LS8 programs are plain text files with one instruction byte per line,
//! written as a binary literal:
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! # Parsing Rules
//!
//! - Only lines whose first character is `0` or `1` contribute a byte
//! - The first 8 characters of such a line are parsed in base 2
//! - Everything else (comments, blank lines, indented text) is ignored
//! - Bytes are placed consecutively from address 0
//!
//! # Example
//!
//! ```
//! use ls8::core::loader::Program;
//!
//! let program = Program::parse("10000010\n00000000\n00001000\n00000001\n").unwrap();
//! assert_eq!(program.bytes(), &[0x82, 0x00, 0x08, 0x01]);
//! ```

use std::path::Path;

use super::error::{EmulatorError, Result};
use super::memory::MEMORY_SIZE;

/// Number of characters of a line read as a binary literal
const LITERAL_WIDTH: usize = 8;

/// A parsed LS8 program image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    /// Parse program text
    ///
    /// # Arguments
    ///
    /// * `source` - Contents of a `.ls8` file
    ///
    /// # Returns
    ///
    /// - `Ok(Program)` if every instruction line is a valid binary literal
    /// - `Err(EmulatorError::ProgramLoad)` on a malformed literal or if the
    ///   program does not fit in memory
    pub fn parse(source: &str) -> Result<Self> {
        let mut bytes = Vec::new();

        for (number, line) in source.lines().enumerate() {
            if !line.starts_with(['0', '1']) {
                continue;
            }

            let literal: String = line.chars().take(LITERAL_WIDTH).collect();
            let byte = u8::from_str_radix(literal.trim(), 2).map_err(|e| {
                EmulatorError::ProgramLoad(format!(
                    "line {}: invalid binary literal '{}': {}",
                    number + 1,
                    literal,
                    e
                ))
            })?;
            bytes.push(byte);
        }

        if bytes.len() > MEMORY_SIZE {
            return Err(EmulatorError::ProgramLoad(format!(
                "program is {} bytes, memory holds {}",
                bytes.len(),
                MEMORY_SIZE
            )));
        }

        log::debug!("Parsed program: {} bytes", bytes.len());
        Ok(Self { bytes })
    }

    /// Read and parse a program file
    ///
    /// # Returns
    ///
    /// - `Err(EmulatorError::ProgramNotFound)` if the file does not exist
    /// - `Err(EmulatorError::Io)` on other read failures
    /// - otherwise the result of [`Program::parse`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                EmulatorError::ProgramNotFound(path.display().to_string())
            }
            _ => EmulatorError::Io(e),
        })?;

        let program = Self::parse(&source)?;
        log::info!("Loaded {} ({} bytes)", path.display(), program.len());
        Ok(program)
    }

    /// Program bytes in load order
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
