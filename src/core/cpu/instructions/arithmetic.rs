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
use crate::core::error::{ArithmeticFault, Result};

impl CPU {
    // === Arithmetic Instructions ===
    //
    // All results are written back to the first register and wrap at 8 bits.

    /// ADD: Add
    ///
    /// Format: add ra, rb
    /// Operation: ra = ra + rb
    pub(crate) fn op_add(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let result = self.reg(ra)?.wrapping_add(self.reg(rb)?);
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// ADDI: Add Immediate
    ///
    /// Format: addi ra, imm
    /// Operation: ra = ra + imm
    pub(crate) fn op_addi(&mut self, ra: u8, imm: u8) -> Result<PcUpdate> {
        let result = self.reg(ra)?.wrapping_add(imm);
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// SUB: Subtract
    ///
    /// Format: sub ra, rb
    /// Operation: ra = ra - rb
    pub(crate) fn op_sub(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let result = self.reg(ra)?.wrapping_sub(self.reg(rb)?);
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// MUL: Multiply
    ///
    /// Only the low 8 bits of the product are kept.
    ///
    /// Format: mul ra, rb
    /// Operation: ra = (ra * rb) & 0xFF
    pub(crate) fn op_mul(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let result = self.reg(ra)?.wrapping_mul(self.reg(rb)?);
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// DIV: Divide
    ///
    /// Format: div ra, rb
    /// Operation: ra = ra / rb (floor)
    ///
    /// # Returns
    ///
    /// `Err(ArithmeticFault::DivideByZero)` if rb is 0; ra is left untouched
    pub(crate) fn op_div(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let divisor = self.reg(rb)?;
        if divisor == 0 {
            return Err(ArithmeticFault::DivideByZero.into());
        }

        let result = self.reg(ra)? / divisor;
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// MOD: Modulo
    ///
    /// Format: mod ra, rb
    /// Operation: ra = ra % rb
    ///
    /// # Returns
    ///
    /// `Err(ArithmeticFault::ModuloByZero)` if rb is 0; ra is left untouched
    pub(crate) fn op_mod(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        let divisor = self.reg(rb)?;
        if divisor == 0 {
            return Err(ArithmeticFault::ModuloByZero.into());
        }

        let result = self.reg(ra)? % divisor;
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// INC: Increment
    pub(crate) fn op_inc(&mut self, ra: u8) -> Result<PcUpdate> {
        let result = self.reg(ra)?.wrapping_add(1);
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// DEC: Decrement
    pub(crate) fn op_dec(&mut self, ra: u8) -> Result<PcUpdate> {
        let result = self.reg(ra)?.wrapping_sub(1);
        self.set_reg(ra, result)?;
        Ok(PcUpdate::Advance)
    }

    /// CMP: Compare
    ///
    /// Sets FL to exactly one of EQUAL, GREATER or LESS. Registers are not
    /// modified.
    ///
    /// Format: cmp ra, rb
    pub(crate) fn op_cmp(&mut self, ra: u8, rb: u8) -> Result<PcUpdate> {
        self.fl = Flags::compare(self.reg(ra)?, self.reg(rb)?);
        Ok(PcUpdate::Advance)
    }
}
