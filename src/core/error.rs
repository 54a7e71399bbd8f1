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

/// Emulator error types
use thiserror::Error;

/// Result type for emulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Main error type for the emulator
#[derive(Error, Debug)]
pub enum EmulatorError {
    #[error("Invalid memory access at 0x{address:02X} (valid range: 0x00-0xFF)")]
    AddressError { address: usize },

    #[error("Invalid register index: {index} (valid range: 0-7)")]
    InvalidRegister { index: u8 },

    #[error("Unknown opcode 0x{opcode:02X} at PC=0x{pc:02X}")]
    UnknownOpcode { opcode: u8, pc: usize },

    #[error("Arithmetic fault: {0}")]
    Arithmetic(#[from] ArithmeticFault),

    #[error("Program file not found: {0}")]
    ProgramNotFound(String),

    #[error("Program load error: {0}")]
    ProgramLoad(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// ALU faults that stop the CPU gracefully instead of aborting the process
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFault {
    #[error("integer division by zero")]
    DivideByZero,

    #[error("modulo by zero")]
    ModuloByZero,
}
