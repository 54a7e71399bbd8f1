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

//! Main memory for the LS8
//!
//! The LS8 has a single flat address space of 256 bytes. Programs are loaded
//! at address 0, the stack grows down from 0xF4 and the interrupt vector
//! table lives in the last eight cells.
//!
//! # Memory Map
//!
//! | Address Range | Region                 |
//! |---------------|------------------------|
//! | 0x00-0xF3     | Program and data       |
//! | 0xF4          | Initial stack pointer  |
//! | 0xF8-0xFF     | Interrupt vector table |
//!
//! # Example
//!
//! ```
//! use ls8::core::memory::Memory;
//!
//! let mut memory = Memory::new();
//! memory.write(0x10, 0x42).unwrap();
//! assert_eq!(memory.read(0x10).unwrap(), 0x42);
//!
//! // Addresses outside the 256-byte image are rejected
//! assert!(memory.read(0x100).is_err());
//! ```

use crate::core::error::{EmulatorError, Result};

#[cfg(test)]
mod tests;

/// Total size of the address space in bytes
pub const MEMORY_SIZE: usize = 256;

/// Flat 256-byte RAM
///
/// Every access is bounds checked. There is no mirroring and no growth:
/// an address outside 0x00-0xFF is an [`EmulatorError::AddressError`].
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Create a zero-filled memory image
    ///
    /// # Example
    ///
    /// ```
    /// use ls8::core::memory::Memory;
    ///
    /// let memory = Memory::new();
    /// assert!(memory.as_slice().iter().all(|&b| b == 0));
    /// ```
    pub fn new() -> Self {
        Self {
            cells: [0u8; MEMORY_SIZE],
        }
    }

    /// Clear every cell back to zero
    pub fn reset(&mut self) {
        self.cells = [0u8; MEMORY_SIZE];
    }

    /// Read one byte
    ///
    /// # Arguments
    ///
    /// * `address` - Address to read from (0x00-0xFF)
    ///
    /// # Returns
    ///
    /// - `Ok(u8)` containing the byte value
    /// - `Err(EmulatorError::AddressError)` if the address is out of range
    #[inline(always)]
    pub fn read(&self, address: usize) -> Result<u8> {
        self.cells
            .get(address)
            .copied()
            .ok_or(EmulatorError::AddressError { address })
    }

    /// Write one byte
    ///
    /// # Arguments
    ///
    /// * `address` - Address to write to (0x00-0xFF)
    /// * `value` - Byte to store
    ///
    /// # Returns
    ///
    /// - `Ok(())` on success
    /// - `Err(EmulatorError::AddressError)` if the address is out of range
    #[inline(always)]
    pub fn write(&mut self, address: usize, value: u8) -> Result<()> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(EmulatorError::AddressError { address })?;
        *cell = value;
        Ok(())
    }

    /// Copy a block of bytes into memory starting at `start`
    ///
    /// The whole block must fit; nothing is written if it does not.
    ///
    /// # Example
    ///
    /// ```
    /// use ls8::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.load(0, &[0x82, 0x00, 0x08]).unwrap();
    /// assert_eq!(memory.read(2).unwrap(), 0x08);
    ///
    /// assert!(memory.load(0xFF, &[1, 2]).is_err());
    /// ```
    pub fn load(&mut self, start: usize, bytes: &[u8]) -> Result<()> {
        let end = start + bytes.len();
        if end > MEMORY_SIZE {
            return Err(EmulatorError::AddressError { address: end - 1 });
        }

        self.cells[start..end].copy_from_slice(bytes);
        log::debug!(
            "Loaded {} bytes at 0x{:02X}-0x{:02X}",
            bytes.len(),
            start,
            end.saturating_sub(1)
        );
        Ok(())
    }

    /// View the whole memory image
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .finish_non_exhaustive()
    }
}
