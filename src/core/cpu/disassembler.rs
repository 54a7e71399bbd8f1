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

//! LS8 instruction disassembler for debugging
//!
//! Converts instruction bytes to human-readable assembly mnemonics.

use super::decode::{operand_count, Opcode};
use crate::core::memory::Memory;

/// Instruction disassembler
///
/// # Example
/// ```
/// use ls8::core::cpu::Disassembler;
///
/// assert_eq!(Disassembler::disassemble(0x82, 0x00, 0x08), "ldi r0, 0x08");
/// assert_eq!(Disassembler::disassemble(0xA0, 0x01, 0x02), "add r1, r2");
/// assert_eq!(Disassembler::disassemble(0x01, 0x00, 0x00), "hlt");
/// ```
pub struct Disassembler;

impl Disassembler {
    /// Disassemble a single instruction
    ///
    /// # Arguments
    ///
    /// * `byte` - Instruction byte
    /// * `a` - First operand byte (ignored if unused)
    /// * `b` - Second operand byte (ignored if unused)
    ///
    /// # Returns
    ///
    /// The assembly text, or `db 0xNN` for bytes that are not instructions
    pub fn disassemble(byte: u8, a: u8, b: u8) -> String {
        let Some(opcode) = Opcode::decode(byte) else {
            return format!("db 0x{:02X}", byte);
        };
        let mnemonic = opcode.mnemonic().to_lowercase();

        match opcode {
            // Register + immediate
            Opcode::Ldi | Opcode::Addi => format!("{} r{}, 0x{:02X}", mnemonic, a, b),
            _ => match opcode.operand_count() {
                0 => mnemonic,
                1 => format!("{} r{}", mnemonic, a),
                _ => format!("{} r{}, r{}", mnemonic, a, b),
            },
        }
    }

    /// Disassemble the instruction stored at `address`
    ///
    /// # Returns
    ///
    /// `(text, length)` where `length` is the instruction size in bytes.
    /// Operand bytes past the end of memory read as 0.
    pub fn disassemble_at(memory: &Memory, address: usize) -> (String, usize) {
        let byte = memory.read(address).unwrap_or(0);
        let length = if Opcode::decode(byte).is_some() {
            operand_count(byte) + 1
        } else {
            1
        };
        let a = memory.read(address + 1).unwrap_or(0);
        let b = memory.read(address + 2).unwrap_or(0);

        (Self::disassemble(byte, a, b), length)
    }

    /// Disassemble `len` bytes of memory starting at 0
    ///
    /// Each line is `ADDR: BYTES  TEXT`.
    ///
    /// # Example
    /// ```
    /// use ls8::core::cpu::Disassembler;
    /// use ls8::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.load(0, &[0x82, 0x00, 0x08, 0x01]).unwrap();
    ///
    /// let listing = Disassembler::listing(&memory, 4);
    /// assert_eq!(listing[0], "00: 82 00 08  ldi r0, 0x08");
    /// assert_eq!(listing[1], "03: 01        hlt");
    /// ```
    pub fn listing(memory: &Memory, len: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut address = 0;

        while address < len {
            let (text, length) = Self::disassemble_at(memory, address);
            let bytes: Vec<String> = (address..address + length)
                .map(|addr| format!("{:02X}", memory.read(addr).unwrap_or(0)))
                .collect();
            lines.push(format!("{:02X}: {:<9} {}", address, bytes.join(" "), text));
            address += length;
        }

        lines
    }
}
