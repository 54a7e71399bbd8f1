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

//! Instruction decoding
//!
//! Instruction byte layout: `AABCDDDD`
//!
//! - `AA`: number of operand bytes that follow (0-2)
//! - `B`: 1 for ALU operations
//! - `C`: 1 if the instruction sets the PC
//! - `DDDD`: instruction identifier

/// Every opcode the LS8 understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0x00,
    Hlt = 0x01,
    Ret = 0x11,
    Iret = 0x13,
    Push = 0x45,
    Pop = 0x46,
    Prn = 0x47,
    Pra = 0x48,
    Call = 0x50,
    Int = 0x52,
    Jmp = 0x54,
    Jeq = 0x55,
    Jne = 0x56,
    Jgt = 0x57,
    Jlt = 0x58,
    Jle = 0x59,
    Jge = 0x5A,
    Inc = 0x65,
    Dec = 0x66,
    Not = 0x69,
    Ldi = 0x82,
    Ld = 0x83,
    St = 0x84,
    Add = 0xA0,
    Sub = 0xA1,
    Mul = 0xA2,
    Div = 0xA3,
    Mod = 0xA4,
    Addi = 0xA5,
    Cmp = 0xA7,
    And = 0xA8,
    Or = 0xAA,
    Xor = 0xAB,
    Shl = 0xAC,
    Shr = 0xAD,
}

impl Opcode {
    /// Look up an instruction byte
    ///
    /// # Returns
    ///
    /// `None` for bytes that are not part of the instruction set
    pub fn decode(byte: u8) -> Option<Self> {
        let opcode = match byte {
            0x00 => Opcode::Nop,
            0x01 => Opcode::Hlt,
            0x11 => Opcode::Ret,
            0x13 => Opcode::Iret,
            0x45 => Opcode::Push,
            0x46 => Opcode::Pop,
            0x47 => Opcode::Prn,
            0x48 => Opcode::Pra,
            0x50 => Opcode::Call,
            0x52 => Opcode::Int,
            0x54 => Opcode::Jmp,
            0x55 => Opcode::Jeq,
            0x56 => Opcode::Jne,
            0x57 => Opcode::Jgt,
            0x58 => Opcode::Jlt,
            0x59 => Opcode::Jle,
            0x5A => Opcode::Jge,
            0x65 => Opcode::Inc,
            0x66 => Opcode::Dec,
            0x69 => Opcode::Not,
            0x82 => Opcode::Ldi,
            0x83 => Opcode::Ld,
            0x84 => Opcode::St,
            0xA0 => Opcode::Add,
            0xA1 => Opcode::Sub,
            0xA2 => Opcode::Mul,
            0xA3 => Opcode::Div,
            0xA4 => Opcode::Mod,
            0xA5 => Opcode::Addi,
            0xA7 => Opcode::Cmp,
            0xA8 => Opcode::And,
            0xAA => Opcode::Or,
            0xAB => Opcode::Xor,
            0xAC => Opcode::Shl,
            0xAD => Opcode::Shr,
            _ => return None,
        };
        Some(opcode)
    }

    /// Encoded instruction byte
    #[inline(always)]
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following this instruction
    #[inline(always)]
    pub fn operand_count(self) -> usize {
        operand_count(self.byte())
    }

    /// Assembly mnemonic
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Hlt => "HLT",
            Opcode::Ret => "RET",
            Opcode::Iret => "IRET",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Prn => "PRN",
            Opcode::Pra => "PRA",
            Opcode::Call => "CALL",
            Opcode::Int => "INT",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
            Opcode::Jgt => "JGT",
            Opcode::Jlt => "JLT",
            Opcode::Jle => "JLE",
            Opcode::Jge => "JGE",
            Opcode::Inc => "INC",
            Opcode::Dec => "DEC",
            Opcode::Not => "NOT",
            Opcode::Ldi => "LDI",
            Opcode::Ld => "LD",
            Opcode::St => "ST",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Addi => "ADDI",
            Opcode::Cmp => "CMP",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
        }
    }
}

/// Operand count encoded in bits 6-7 of an instruction byte
#[inline(always)]
pub fn operand_count(byte: u8) -> usize {
    ((byte >> 6) & 0b11) as usize
}

/// Whether bit 5 marks the instruction as an ALU operation
#[inline(always)]
pub fn is_alu(byte: u8) -> bool {
    byte & 0b0010_0000 != 0
}

/// Whether bit 4 marks the instruction as one that sets the PC
#[inline(always)]
pub fn sets_pc(byte: u8) -> bool {
    byte & 0b0001_0000 != 0
}
