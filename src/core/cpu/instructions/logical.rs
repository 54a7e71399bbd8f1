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
    // === Logical Instructions ===

    /// AND: Bitwise AND
    ///
    /// Format: and ra, rb
    /// Operation: ra = ra & rb
    pub(crate) fn op_and(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let result = self.reg(ra)? & self.reg(rb)?;
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// OR: Bitwise OR
    ///
    /// Format: or ra, rb
    /// Operation: ra = ra | rb
    pub(crate) fn op_or(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let result = self.reg(ra)? | self.reg(rb)?;
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// XOR: Bitwise exclusive OR
    ///
    /// Format: xor ra, rb
    /// Operation: ra = ra ^ rb
    pub(crate) fn op_xor(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let result = self.reg(ra)? ^ self.reg(rb)?;
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// NOT: Bitwise NOT
    ///
    /// Format: not ra
    /// Operation: ra = !ra
    pub(crate) fn op_not(&mut self, ra: u8) -> Result<PcUpdate> {
        let result = !self.reg(ra)?;
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }
}
