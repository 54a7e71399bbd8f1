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

use super::super::{Flags, RegisterFile, CPU};
use super::PcUpdate;
use crate::core::error::Result;
use crate::core::interrupt::INTERRUPT_LINES;

impl CPU {
    // === Interrupt Instructions ===

    /// INT: Software interrupt
    ///
    /// Sets the IS bit for the interrupt number held in the register (low
    /// three bits) and opens the interrupt gate. Delivery happens at the
    /// start of a later cycle, subject to IM.
    ///
    /// Format: int ra
    /// Operation: IS |= 1 << (ra & 7)
    pub(crate) fn op_int(&mut self, ra: u8) -> Result<PcUpdate> {
        let number = self.reg(ra)? & (INTERRUPT_LINES - 1);
        self.regs.set_is(self.regs.is() | (1 << number));
        self.interrupts.enable();
        log::debug!("Software interrupt {} requested", number);
        Ok(PcUpdate::Advance)
    }

    /// IRET: Return from interrupt handler
    ///
    /// Exact inverse of interrupt entry:
    /// 1. R6-R0 are popped, in that order
    /// 2. FL is popped
    /// 3. PC is popped
    /// 4. Interrupt checking is re-enabled
    pub(crate) fn op_iret(&mut self) -> Result<PcUpdate> {
        for r in (0..=RegisterFile::IS).rev() {
            let value = self.pop_value()?;
            self.set_reg(r, value)?;
        }

        self.fl = Flags::from_bits_retain(self.pop_value()?);
        self.pc = self.pop_value()? as usize;
        self.interrupts.enable();

        log::debug!("IRET to PC=0x{:02X}", self.pc);
        Ok(PcUpdate::Redirected)
    }
}
