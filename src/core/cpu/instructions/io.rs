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

use std::io::Write;

use super::super::CPU;
use super::PcUpdate;
use crate::core::error::Result;

impl CPU {
    // === Output Instructions ===

    /// PRN: Print numeric value
    ///
    /// Writes the register as a decimal number followed by a newline.
    pub(crate) fn op_prn(&mut self, ra: u8, console: &mut dyn Write) -> Result<PcUpdate> {
        let value = self.reg(ra)?;
        writeln!(console, "{}", value)?;
        Ok(PcUpdate::Advance)
    }

    /// PRA: Print alpha character
    ///
    /// Writes the register as a single character, no newline.
    pub(crate) fn op_pra(&mut self, ra: u8, console: &mut dyn Write) -> Result<PcUpdate> {
        let value = self.reg(ra)?;
        write!(console, "{}", char::from(value))?;
        Ok(PcUpdate::Advance)
    }
}
