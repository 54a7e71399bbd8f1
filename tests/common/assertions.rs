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

//! Custom assertions for integration tests

use ls8::core::cpu::CPU;

#[allow(dead_code)]
pub fn assert_cpu_reg(cpu: &CPU, reg: u8, expected: u8) {
    let actual = cpu.reg(reg).expect("Invalid register");
    assert_eq!(
        actual, expected,
        "Register R{} mismatch: expected 0x{:02X}, got 0x{:02X}",
        reg, expected, actual
    );
}

#[allow(dead_code)]
pub fn assert_cpu_pc(cpu: &CPU, expected: usize) {
    let actual = cpu.pc();
    assert_eq!(
        actual, expected,
        "PC mismatch: expected 0x{:02X}, got 0x{:02X}",
        expected, actual
    );
}

#[allow(dead_code)]
pub fn assert_memory_byte(cpu: &CPU, addr: usize, expected: u8) {
    let actual = cpu.memory().read(addr).expect("Failed to read memory");
    assert_eq!(
        actual, expected,
        "Memory at 0x{:02X} mismatch: expected 0x{:02X}, got 0x{:02X}",
        addr, expected, actual
    );
}
