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

//! Stack operations
//!
//! The stack lives in main memory and grows downward from 0xF4. SP (R7)
//! points at the most recently pushed byte.
//!
//! Stack operation:
//! - push: SP = SP - 1 (wrapping), then Memory[SP] = value
//! - pop: value = Memory[SP], then SP = SP + 1 (wrapping)

use super::super::CPU;
use super::PcUpdate;
use crate::core::error::Result;

impl CPU {
    /// Push a raw byte onto the stack
    ///
    /// Used by PUSH as well as CALL and interrupt entry, which save the PC
    /// and FL without going through a register.
    pub(crate) fn push_value(&mut self, value: u8) -> Result<()> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.memory.write(sp as usize, value)
    }

    /// Pop a raw byte off the stack
    pub(crate) fn pop_value(&mut self) -> Result<u8> {
        let sp = self.regs.sp();
        let value = self.memory.read(sp as usize)?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(value)
    }

    /// PUSH: Push register
    ///
    /// Format: push ra
    pub(crate) fn op_push(&mut self, ra: u8) -> Result<PcUpdate> {
        let value = self.reg(ra)?;
        self.push_value(value)?;
        Ok(PcUpdate::Advance)
    }

    /// POP: Pop into register
    ///
    /// Format: pop ra
    pub(crate) fn op_pop(&mut self, ra: u8) -> Result<PcUpdate> {
        // Validate the destination before touching SP
        self.reg(ra)?;
        let value = self.pop_value()?;
        self.set_reg(ra, value)?;
        Ok(PcUpdate::Advance)
    }
}
