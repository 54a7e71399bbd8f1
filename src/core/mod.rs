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

//! Core emulation components
//!
//! This module contains all machine components:
//! - CPU (registers, ALU, control unit, tracer, disassembler)
//! - Memory (256 bytes)
//! - Interrupt controller and interval timer
//! - Program loader and configuration
//! - System integration

pub mod config;
pub mod cpu;
pub mod error;
pub mod interrupt;
pub mod loader;
pub mod memory;
pub mod system;
pub mod timer;

// Re-export commonly used types
pub use config::Config;
pub use cpu::CPU;
pub use error::{ArithmeticFault, EmulatorError, Result};
pub use loader::Program;
pub use memory::Memory;
pub use system::System;
