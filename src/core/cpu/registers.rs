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

//! Register file and flags register

use bitflags::bitflags;

use crate::core::error::{EmulatorError, Result};

/// Number of registers (R0-R7)
pub const REGISTER_COUNT: usize = 8;

/// Initial stack pointer value
pub const STACK_START: u8 = 0xF4;

/// Register file of the LS8
///
/// Eight 8-bit registers. R0-R4 are general purpose; the top three have
/// reserved roles:
///
/// | Register | Role                    |
/// |----------|-------------------------|
/// | R5       | IM (interrupt mask)     |
/// | R6       | IS (interrupt status)   |
/// | R7       | SP (stack pointer)      |
///
/// Every register is exactly one byte wide. Arithmetic on any register,
/// SP included, wraps modulo 256.
///
/// # Example
///
/// ```
/// use ls8::core::cpu::RegisterFile;
///
/// let mut regs = RegisterFile::new();
/// assert_eq!(regs.sp(), 0xF4);
///
/// regs.set(3, 0x2A).unwrap();
/// assert_eq!(regs.get(3).unwrap(), 0x2A);
///
/// // There is no R8
/// assert!(regs.get(8).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Interrupt mask register index
    pub const IM: u8 = 5;
    /// Interrupt status register index
    pub const IS: u8 = 6;
    /// Stack pointer register index
    pub const SP: u8 = 7;

    /// Create a register file with power-on values
    ///
    /// All registers are zero except SP, which points at 0xF4.
    pub fn new() -> Self {
        let mut regs = [0u8; REGISTER_COUNT];
        regs[Self::SP as usize] = STACK_START;
        Self { regs }
    }

    /// Restore power-on values
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Read register `index`
    ///
    /// # Returns
    ///
    /// - `Ok(u8)` with the register value
    /// - `Err(EmulatorError::InvalidRegister)` if `index` is not 0-7
    #[inline(always)]
    pub fn get(&self, index: u8) -> Result<u8> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(EmulatorError::InvalidRegister { index })
    }

    /// Write register `index`
    ///
    /// # Returns
    ///
    /// - `Ok(())` on success
    /// - `Err(EmulatorError::InvalidRegister)` if `index` is not 0-7
    #[inline(always)]
    pub fn set(&mut self, index: u8, value: u8) -> Result<()> {
        let reg = self
            .regs
            .get_mut(index as usize)
            .ok_or(EmulatorError::InvalidRegister { index })?;
        *reg = value;
        Ok(())
    }

    /// Interrupt mask (R5)
    pub fn im(&self) -> u8 {
        self.regs[Self::IM as usize]
    }

    pub fn set_im(&mut self, value: u8) {
        self.regs[Self::IM as usize] = value;
    }

    /// Interrupt status (R6)
    pub fn is(&self) -> u8 {
        self.regs[Self::IS as usize]
    }

    pub fn set_is(&mut self, value: u8) {
        self.regs[Self::IS as usize] = value;
    }

    /// Stack pointer (R7)
    pub fn sp(&self) -> u8 {
        self.regs[Self::SP as usize]
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs[Self::SP as usize] = value;
    }

    /// All eight registers, R0 first
    pub fn as_array(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

bitflags! {
    /// FL register
    ///
    /// Laid out as `00000LGE`. CMP always leaves exactly one of the three
    /// bits set; the flags are never combined. Before the first CMP the
    /// register is empty.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Equal (E)
        const EQUAL = 0b0000_0001;
        /// Greater-than (G)
        const GREATER = 0b0000_0010;
        /// Less-than (L)
        const LESS = 0b0000_0100;
    }
}

impl Flags {
    /// Outcome of comparing `a` against `b`
    ///
    /// # Example
    ///
    /// ```
    /// use ls8::core::cpu::Flags;
    ///
    /// assert_eq!(Flags::compare(3, 3), Flags::EQUAL);
    /// assert_eq!(Flags::compare(9, 3), Flags::GREATER);
    /// assert_eq!(Flags::compare(1, 3), Flags::LESS);
    /// ```
    pub fn compare(a: u8, b: u8) -> Self {
        match a.cmp(&b) {
            std::cmp::Ordering::Equal => Flags::EQUAL,
            std::cmp::Ordering::Greater => Flags::GREATER,
            std::cmp::Ordering::Less => Flags::LESS,
        }
    }
}
