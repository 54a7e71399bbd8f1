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
    // === Shift Instructions ===
    //
    // The shift amount is the full value of rb. Shifting by 8 or more
    // clears the register.

    /// SHL: Shift Left Logical
    ///
    /// Format: shl ra, rb
    /// Operation: ra = ra << rb, low bits filled with 0
    pub(crate) fn op_shl(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let amount = self.reg(rb)? as u32;
        let result = self.reg(ra)?.checked_shl(amount).unwrap_or(0);
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// SHR: Shift Right Logical
    ///
    /// Format: shr ra, rb
    /// Operation: ra = ra >> rb, high bits filled with 0
    pub(crate) fn op_shr(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let amount = self.reg(rb)? as u32;
        let result = self.reg(ra)?.checked_shr(amount).unwrap_or(0);
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }
}
