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

//! Interval timer and time sources
//!
//! The LS8 raises interrupt 0 once per second of wall-clock time. The CPU
//! polls a [`Clock`] at the start of every cycle and feeds the elapsed time
//! into an [`IntervalTimer`]; when the timer reports that an interval has
//! passed, the CPU sets bit 0 of the IS register.
//!
//! ## Time Sources
//!
//! - [`SystemClock`]: real time, backed by `std::time::Instant`
//! - [`ManualClock`]: time only moves when [`ManualClock::advance`] is called
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ls8::core::timer::{Clock, IntervalTimer, ManualClock};
//!
//! let mut clock = ManualClock::new();
//! let mut timer = IntervalTimer::new(Duration::from_secs(1));
//!
//! clock.advance(Duration::from_millis(600));
//! assert!(!timer.tick(clock.elapsed()));
//!
//! clock.advance(Duration::from_millis(600));
//! assert!(timer.tick(clock.elapsed()));
//! ```

use std::time::{Duration, Instant};

/// Default period of the LS8 timer interrupt
pub const DEFAULT_TIMER_INTERVAL: Duration = Duration::from_secs(1);

/// Source of elapsed time for the CPU loop
pub trait Clock {
    /// Time passed since the previous call (or since creation)
    fn elapsed(&mut self) -> Duration;
}

/// Wall-clock time source
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}

/// Deterministic time source for tests and benchmarks
///
/// Time is accumulated by [`advance`](ManualClock::advance) and handed out
/// (then cleared) by the next [`Clock::elapsed`] call.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    pending: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            pending: Duration::ZERO,
        }
    }

    /// Let `duration` of simulated time pass
    pub fn advance(&mut self, duration: Duration) {
        self.pending += duration;
    }
}

impl Clock for ManualClock {
    fn elapsed(&mut self) -> Duration {
        std::mem::take(&mut self.pending)
    }
}

/// Accumulating interval timer
///
/// Elapsed time is added to an accumulator. Each call to [`tick`](Self::tick)
/// consumes at most one interval, so a long stall fires once per cycle until
/// the backlog is drained.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    /// Period between firings
    interval: Duration,

    /// Time accumulated since the last firing
    accumulated: Duration,
}

impl IntervalTimer {
    /// Create a timer firing every `interval`
    ///
    /// A zero interval is clamped to one nanosecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_nanos(1)),
            accumulated: Duration::ZERO,
        }
    }

    /// Feed elapsed time into the timer
    ///
    /// # Returns
    ///
    /// `true` if a full interval has accumulated; that interval is consumed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.accumulated += elapsed;

        if self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            log::trace!(
                "Timer fired, {:?} carried into next interval",
                self.accumulated
            );
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the period; accumulated time is kept
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_nanos(1));
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Drop any accumulated time
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TIMER_INTERVAL)
    }
}
