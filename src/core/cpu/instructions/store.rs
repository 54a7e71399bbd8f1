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
    // === Store Instructions ===

    /// ST: Store to memory
    ///
    /// Format: st ra, rb
    /// Operation: Memory[ra] = rb
    pub(crate) fn op_st(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let address = self.reg(ra)? as usize;
        let value = self.reg(rb)?;
        self.memory.write(address, value)?;
        Ok(PcUpdate::Advance)
    }
}
