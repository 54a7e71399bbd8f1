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

use super::super::{Flags, CPU};
use super::PcUpdate;
use crate::core::error::Result;

impl CPU {
    // === Conditional Jumps ===
    //
    // FL only ever holds one of EQUAL, GREATER or LESS, so JGE and JLE are
    // written as complements ("not less", "not greater"). With FL empty
    // (no CMP yet) JNE, JGE and JLE all jump.

    /// Jump to the address in `ra` if `condition` holds
    fn jump_if(&mut self, condition: bool, ra: u8) -> Result<PcUpdate> {
        let target = self.reg(ra)?;
        if condition {
            self.pc = target as usize;
            Ok(PcUpdate::Redirected)
        } else {
            Ok(PcUpdate::Advance)
        }
    }

    /// JEQ: Jump if equal (FL == E)
    pub(crate) fn op_jeq(&mut self, ra: u8) -> Result<PcUpdate> {
        self.jump_if(self.fl == Flags::EQUAL, ra)
    }

    /// JNE: Jump if not equal (FL != E)
    pub(crate) fn op_jne(&mut self, ra: u8) -> Result<PcUpdate> {
        self.jump_if(self.fl != Flags::EQUAL, ra)
    }

    /// JGT: Jump if greater (FL == G)
    pub(crate) fn op_jgt(&mut self, ra: u8) -> Result<PcUpdate> {
        self.jump_if(self.fl == Flags::GREATER, ra)
    }

    /// JLT: Jump if less (FL == L)
    pub(crate) fn op_jlt(&mut self, ra: u8) -> Result<PcUpdate> {
        self.jump_if(self.fl == Flags::LESS, ra)
    }

    /// JGE: Jump if greater or equal (FL != L)
    pub(crate) fn op_jge(&mut self, ra: u8) -> Result<PcUpdate> {
        self.jump_if(self.fl != Flags::LESS, ra)
    }

    /// JLE: Jump if less or equal (FL != G)
    pub(crate) fn op_jle(&mut self, ra: u8) -> Result<PcUpdate> {
        self.jump_if(self.fl != Flags::GREATER, ra)
    }
}
