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

//! CPU instruction implementations
//!
//! This module contains all LS8 instruction implementations,
//! organized by instruction type for better maintainability.

use std::io::Write;

use super::decode::Opcode;
use super::{CpuState, HaltReason, CPU};
use crate::core::error::Result;

// Instruction modules organized by type
mod arithmetic;
mod branch;
mod interrupt;
mod io;
mod jump;
mod load;
mod logical;
mod shift;
mod stack;
mod store;

/// What the control unit does with the PC after an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PcUpdate {
    /// Move past the instruction and its operands
    Advance,
    /// The instruction already loaded a new PC
    Redirected,
}

impl CPU {
    /// Execute a decoded instruction
    ///
    /// # Arguments
    ///
    /// * `opcode` - Decoded instruction
    /// * `a` - First operand byte (0 if the instruction has none)
    /// * `b` - Second operand byte (0 if the instruction has fewer than two)
    /// * `console` - Output sink for PRN/PRA
    ///
    /// # Returns
    ///
    /// How the PC should be updated, or the error raised by the instruction
    pub(super) fn execute_instruction(
        &mut self,
        opcode: Opcode,
        a: u8,
        b: u8,
        console: &mut dyn Write,
    ) -> Result<PcUpdate> {
        match opcode {
            Opcode::Nop => Ok(PcUpdate::Advance),
            Opcode::Hlt => self.op_hlt(),

            // Loads, stores and output
            Opcode::Ldi => self.op_ldi(a, b),
            Opcode::Ld => self.op_ld(a, b),
            Opcode::St => self.op_st(a, b),
            Opcode::Prn => self.op_prn(a, console),
            Opcode::Pra => self.op_pra(a, console),

            // Stack
            Opcode::Push => self.op_push(a),
            Opcode::Pop => self.op_pop(a),

            // ALU
            Opcode::Add => self.op_add(a, b),
            Opcode::Addi => self.op_addi(a, b),
            Opcode::Sub => self.op_sub(a, b),
            Opcode::Mul => self.op_mul(a, b),
            Opcode::Div => self.op_div(a, b),
            Opcode::Mod => self.op_mod(a, b),
            Opcode::Inc => self.op_inc(a),
            Opcode::Dec => self.op_dec(a),
            Opcode::Cmp => self.op_cmp(a, b),
            Opcode::And => self.op_and(a, b),
            Opcode::Or => self.op_or(a, b),
            Opcode::Xor => self.op_xor(a, b),
            Opcode::Not => self.op_not(a),
            Opcode::Shl => self.op_shl(a, b),
            Opcode::Shr => self.op_shr(a, b),

            // Subroutines and jumps
            Opcode::Call => self.op_call(a),
            Opcode::Ret => self.op_ret(),
            Opcode::Jmp => self.op_jmp(a),
            Opcode::Jeq => self.op_jeq(a),
            Opcode::Jne => self.op_jne(a),
            Opcode::Jgt => self.op_jgt(a),
            Opcode::Jlt => self.op_jlt(a),
            Opcode::Jge => self.op_jge(a),
            Opcode::Jle => self.op_jle(a),

            // Interrupts
            Opcode::Int => self.op_int(a),
            Opcode::Iret => self.op_iret(),
        }
    }

    /// HLT: Halt
    ///
    /// Stops the CPU. The PC still advances past the instruction.
    pub(crate) fn op_hlt(&mut self) -> Result<PcUpdate> {
        log::debug!("HLT at PC=0x{:02X}", self.pc);
        self.set_state(CpuState::Halted(HaltReason::Instruction));
        Ok(PcUpdate::Advance)
    }
}
