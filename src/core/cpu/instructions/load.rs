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
    // === Load Instructions ===

    /// LDI: Load Immediate
    ///
    /// Format: ldi ra, imm
    /// Operation: ra = imm
    pub(crate) fn op_ldi(&mut self, ra: u8, imm: u8) -> Result<PcUpdate> {
        self.set_reg(ra, imm)?;
        Ok(PcUpdate::Advance)
    }

    /// LD: Load from memory
    ///
    /// Format: ld ra, rb
    /// Operation: ra = Memory[rb]
    pub(crate) fn op_ld(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let address = self.reg(rb)? as usize;
        let value = self.memory.read(address)?;
        self.set_reg(ra, value)?;
        Ok(PcUpdate::Advance)
    }
}
