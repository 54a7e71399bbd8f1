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

//! CPU test modules
//!
//! Tests are organized into the following categories:
//! - `basic`: CPU initialization, reset, register access, PC handling
//! - `decode`: Opcode table and instruction byte layout
//! - `alu`: Arithmetic, logical, shift and compare instructions
//! - `stack`: PUSH/POP and raw stack discipline
//! - `branch`: JMP, conditional jumps, CALL/RET
//! - `interrupts`: Timer interrupt delivery, INT, IRET
//! - `execution`: Whole programs run through the control unit
//! - `properties`: Property-based tests





#[cfg(test)]
mod branch;

#[cfg(test)]
mod interrupts;



use super::*;
use crate::core::timer::ManualClock;

// Instruction bytes used by the test programs
const NOP: u8 = 0x00;
const HLT: u8 = 0x01;
const RET: u8 = 0x11;
const IRET: u8 = 0x13;
const PUSH: u8 = 0x45;
const POP: u8 = 0x46;
const PRN: u8 = 0x47;
const PRA: u8 = 0x48;
const CALL: u8 = 0x50;
const INT: u8 = 0x52;
const JMP: u8 = 0x54;
const LDI: u8 = 0x82;
const LD: u8 = 0x83;
const ST: u8 = 0x84;
const ADD: u8 = 0xA0;
const MUL: u8 = 0xA2;
const DIV: u8 = 0xA3;
const MOD: u8 = 0xA4;
const CMP: u8 = 0xA7;

/// Create a CPU with `program` loaded at address 0
fn cpu_with_program(program: &[u8]) -> CPU {
    let mut cpu = CPU::new();
    cpu.load_program(program).unwrap();
    cpu
}

/// Execute one cycle with no elapsed time, discarding output
fn step(cpu: &mut CPU) -> Result<()> {
    cpu.step(&mut ManualClock::new(), &mut std::io::sink())
}

/// Run `program` until it halts and return the CPU and its console output
fn run_program(program: &[u8]) -> (CPU, String) {
    let mut cpu = cpu_with_program(program);
    let mut out = Vec::new();

    let reason = cpu
        .run_for(&mut ManualClock::new(), &mut out, 10_000)
        .unwrap();
    assert!(reason.is_some(), "program did not halt");

    (cpu, String::from_utf8(out).unwrap())
}
