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

//! LS8 Interrupt Controller
//!
//! Interrupt state lives in two CPU registers:
//!
//! - **IM** (R5): Interrupt mask, 1 = interrupt line enabled
//! - **IS** (R6): Interrupt status, 1 = interrupt pending
//!
//! The controller owns the interval timer that raises interrupt 0 and the
//! enable gate deciding whether pending interrupts are examined this cycle.
//! Servicing itself (register save, vector jump) is performed by the CPU.
//!
//! ## Interrupt Lines (Bit Positions)
//!
//! ```text
//! Bit | Source   | Description
//! ----|----------|---------------------------------
//! 0   | TIMER    | Fires once per timer interval
//! 1-7 | -        | Software interrupts (INT)
//! ```
//!
//! ## Vector Table
//!
//! Handler addresses are stored at `0xF8 + n` for interrupt `n`.
//! When several lines are pending, the lowest-numbered one wins.

use std::time::Duration;

use crate::core::timer::IntervalTimer;

/// Base address of the interrupt vector table
pub const VECTOR_TABLE_BASE: usize = 0xF8;

/// Number of interrupt lines
pub const INTERRUPT_LINES: u8 = 8;

/// Interrupt line bit flags as they appear in IM/IS
pub mod interrupts {
    /// Timer interrupt (bit 0)
    pub const TIMER: u8 = 1 << 0;
}

/// LS8 interrupt controller
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use ls8::core::interrupt::InterruptController;
///
/// let mut ic = InterruptController::new(Duration::from_secs(1));
/// assert!(!ic.is_enabled());
///
/// // One second of elapsed time fires the timer and opens the gate
/// assert!(ic.poll_timer(Duration::from_secs(1)));
/// assert!(ic.is_enabled());
///
/// // Lowest pending and unmasked line wins
/// assert_eq!(InterruptController::next_pending(0b0000_0110, 0b0000_1110), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct InterruptController {
    /// Whether pending interrupts are examined this cycle
    enabled: bool,

    /// Source of interrupt 0
    timer: IntervalTimer,
}

impl InterruptController {
    /// Create a controller whose timer fires every `timer_interval`
    ///
    /// Interrupt checking starts disabled; the first timer firing enables it.
    pub fn new(timer_interval: Duration) -> Self {
        Self {
            enabled: false,
            timer: IntervalTimer::new(timer_interval),
        }
    }

    /// Return to the power-on state
    pub fn reset(&mut self) {
        self.enabled = false;
        self.timer.reset();
    }

    /// Feed elapsed time to the interval timer
    ///
    /// # Returns
    ///
    /// `true` if the timer fired. The caller is responsible for setting the
    /// timer bit in IS; interrupt checking is enabled here.
    pub fn poll_timer(&mut self, elapsed: Duration) -> bool {
        if self.timer.tick(elapsed) {
            self.enabled = true;
            log::debug!("Timer interrupt requested");
            true
        } else {
            false
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Re-open the gate (IRET, INT)
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Close the gate (interrupt entry)
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut IntervalTimer {
        &mut self.timer
    }

    /// Pick the interrupt to service
    ///
    /// # Arguments
    ///
    /// * `mask` - IM register value
    /// * `status` - IS register value
    ///
    /// # Returns
    ///
    /// The lowest interrupt number whose bit is set in both registers, or
    /// `None` if nothing is pending.
    pub fn next_pending(mask: u8, status: u8) -> Option<u8> {
        let masked = mask & status;
        (0..INTERRUPT_LINES).find(|&n| masked & (1 << n) != 0)
    }

    /// Address of the vector table cell for interrupt `number`
    pub fn vector_address(number: u8) -> usize {
        VECTOR_TABLE_BASE + (number & (INTERRUPT_LINES - 1)) as usize
    }
}

impl Default for InterruptController {
    fn default() -> Self {
        Self::new(crate::core::timer::DEFAULT_TIMER_INTERVAL)
    }
}
