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

//! System integration module
//!
//! Ties the CPU to its surroundings: the program loader, a time source for
//! the interrupt timer, the console sink and the optional execution tracer.

use std::io::Write;
use std::path::Path;

use super::config::Config;
use super::cpu::{CpuState, CpuTracer, HaltReason, CPU};
use super::error::Result;
use super::loader::Program;
use super::timer::{Clock, SystemClock};

/// LS8 machine
///
/// Owns the CPU together with the clock that drives its timer and the
/// console PRN/PRA write to.
///
/// # Example
/// ```no_run
/// use ls8::core::system::System;
///
/// let mut system = System::new();
/// system.load_program("programs/print8.ls8").unwrap();
/// system.run().unwrap();
/// ```
pub struct System {
    /// CPU instance
    cpu: CPU,
    /// Time source for the interval timer
    clock: Box<dyn Clock>,
    /// PRN/PRA output
    console: Box<dyn Write>,
    /// CPU tracer for debugging (optional)
    tracer: Option<CpuTracer>,
    /// Maximum cycles to trace (0 = unlimited)
    trace_limit: usize,
    /// Number of cycles traced so far
    trace_count: usize,
}

impl System {
    /// Create a system running on real time and writing to stdout
    pub fn new() -> Self {
        Self::with_io(Box::new(SystemClock::new()), Box::new(std::io::stdout()))
    }

    /// Create a system with a custom clock and console
    pub fn with_io(clock: Box<dyn Clock>, console: Box<dyn Write>) -> Self {
        Self {
            cpu: CPU::new(),
            clock,
            console,
            tracer: None,
            trace_limit: 0,
            trace_count: 0,
        }
    }

    /// Apply configuration settings
    ///
    /// Sets the timer interval and, if `debug.trace` is on, traces every
    /// cycle to stderr.
    pub fn configure(&mut self, config: &Config) {
        self.cpu
            .interrupts_mut()
            .timer_mut()
            .set_interval(config.timer_interval());
        if config.debug.trace && self.tracer.is_none() {
            self.enable_tracing_to(std::io::stderr(), 0);
        }
    }

    /// Load a program file into memory at address 0
    pub fn load_program<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let program = Program::from_file(path)?;
        self.cpu.load_program(program.bytes())
    }

    /// Load raw program bytes into memory at address 0
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.cpu.load_program(bytes)
    }

    /// Reset the CPU to its power-on state
    ///
    /// Memory is cleared, so the program must be loaded again.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.trace_count = 0;
    }

    /// Execute one cycle, tracing it first if tracing is enabled
    pub fn step(&mut self) -> Result<()> {
        if let Some(tracer) = &mut self.tracer {
            if self.cpu.is_running()
                && (self.trace_limit == 0 || self.trace_count < self.trace_limit)
            {
                tracer.trace(&self.cpu)?;
                self.trace_count += 1;
            }
        }

        self.cpu.step(self.clock.as_mut(), self.console.as_mut())
    }

    /// Execute `n` cycles (fewer if the CPU halts)
    pub fn step_n(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            if !self.cpu.is_running() {
                break;
            }
            self.step()?;
        }
        Ok(())
    }

    /// Run until the CPU halts
    pub fn run(&mut self) -> Result<HaltReason> {
        loop {
            if let Some(reason) = self.halt_reason() {
                self.flush()?;
                return Ok(reason);
            }
            if let Err(e) = self.step() {
                self.flush()?;
                return Err(e);
            }
        }
    }

    /// Run until the CPU halts or `max_cycles` more cycles have executed
    ///
    /// # Returns
    ///
    /// `Some(reason)` if the CPU halted, `None` if the budget ran out first
    pub fn run_for(&mut self, max_cycles: u64) -> Result<Option<HaltReason>> {
        let mut result = Ok(());
        for _ in 0..max_cycles {
            if !self.cpu.is_running() {
                break;
            }
            result = self.step();
            if result.is_err() {
                break;
            }
        }

        self.flush()?;
        result.map(|_| self.halt_reason())
    }

    /// Run with an optional cycle budget
    pub fn run_with_limit(&mut self, max_cycles: Option<u64>) -> Result<Option<HaltReason>> {
        match max_cycles {
            Some(n) => self.run_for(n),
            None => self.run().map(Some),
        }
    }

    fn halt_reason(&self) -> Option<HaltReason> {
        match self.cpu.state() {
            CpuState::Halted(reason) => Some(reason),
            CpuState::Running => None,
        }
    }

    /// Flush the console and trace output
    pub fn flush(&mut self) -> Result<()> {
        self.console.flush()?;
        if let Some(tracer) = &mut self.tracer {
            tracer.flush()?;
        }
        Ok(())
    }

    pub fn pc(&self) -> usize {
        self.cpu.pc()
    }

    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU {
        &mut self.cpu
    }

    /// Enable execution tracing to a file
    ///
    /// # Arguments
    ///
    /// * `path` - Trace file, created or truncated
    /// * `limit` - Maximum cycles to trace (0 = unlimited)
    pub fn enable_tracing<P: AsRef<Path>>(&mut self, path: P, limit: usize) -> Result<()> {
        let path = path.as_ref();
        self.tracer = Some(CpuTracer::new(path)?);
        self.trace_limit = limit;
        self.trace_count = 0;
        log::info!(
            "CPU tracing enabled: {} (limit: {})",
            path.display(),
            if limit == 0 {
                "unlimited".to_string()
            } else {
                limit.to_string()
            }
        );
        Ok(())
    }

    /// Enable execution tracing to any writer (e.g. stderr)
    pub fn enable_tracing_to<W: Write + 'static>(&mut self, output: W, limit: usize) {
        self.tracer = Some(CpuTracer::from_writer(output));
        self.trace_limit = limit;
        self.trace_count = 0;
    }

    /// Disable execution tracing
    ///
    /// Flushes and closes the trace output.
    pub fn disable_tracing(&mut self) {
        if let Some(mut tracer) = self.tracer.take() {
            if let Err(e) = tracer.flush() {
                log::warn!("Failed to flush trace output: {}", e);
            }
            log::info!(
                "CPU tracing disabled (traced {} cycles)",
                self.trace_count
            );
            self.trace_limit = 0;
            self.trace_count = 0;
        }
    }

    pub fn is_tracing(&self) -> bool {
        self.tracer.is_some()
    }

    /// Number of cycles traced so far
    pub fn trace_count(&self) -> usize {
        self.trace_count
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
