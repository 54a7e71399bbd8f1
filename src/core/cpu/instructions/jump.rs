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

use super::super::CPU;
use super::PcUpdate;
use crate::core::error::Result;

impl CPU {
    // === Jump Instructions ===

    /// JMP: Jump
    ///
    /// Format: jmp ra
    /// Operation: PC = ra
    pub(crate) fn op_jmp(&mut self, ra: u8) -> Result<PcUpdate> {
        self.pc = self.reg(ra)? as usize;
        Ok(PcUpdate::Redirected)
    }

    /// CALL: Call subroutine
    ///
    /// Pushes the address of the instruction after the CALL (PC + 2) and
    /// jumps to the address in the register.
    ///
    /// Format: call ra
    /// Operation: push(PC + 2); PC = ra
    pub(crate) fn op_call(&mut self, ra: u8) -> Result<PcUpdate> {
        let target = self.reg(ra)?;
        let return_address = self.pc_byte(self.pc + 2)?;
        self.push_value(return_address)?;
        self.pc = target as usize;
        Ok(PcUpdate::Redirected)
    }

    /// RET: Return from subroutine
    ///
    /// The popped return-address cell is cleared. POP and IRET leave their
    /// cells untouched.
    ///
    /// Format: ret
    /// Operation: PC = Memory[SP]; Memory[SP] = 0; SP = SP + 1
    pub(crate) fn op_ret(&mut self) -> Result<PcUpdate> {
        let sp = self.regs.sp() as usize;
        let return_address = self.memory.read(sp)?;
        self.memory.write(sp, 0)?;
        self.regs.set_sp((sp as u8).wrapping_add(1));
        self.pc = return_address as usize;
        Ok(PcUpdate::Redirected)
    }
}
