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

//! LS8 emulator core library
//!
//! This library emulates the LS8, a small 8-bit register machine with 256
//! bytes of memory, a hardware stack and timer-driven interrupts.
//!
//! # Example
//!
//! ```
//! use ls8::core::cpu::CPU;
//! use ls8::core::timer::ManualClock;
//!
//! let mut cpu = CPU::new();
//! cpu.load_program(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap(); // LDI R0,8; PRN R0; HLT
//!
//! let mut output = Vec::new();
//! cpu.run(&mut ManualClock::new(), &mut output).unwrap();
//! assert_eq!(output, b"8\n");
//! ```

pub mod core;
