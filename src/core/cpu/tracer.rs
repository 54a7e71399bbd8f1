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

//! CPU execution tracer for debugging
//!
//! Writes one line per executed instruction, before it executes:
//!
//! ```text
//! TRACE: PC FL  | M[PC+1] M[PC+2] M[PC+3] M[PC+4] M[PC+5] | R0 R1 R2 R3 R4 R5 R6 R7
//! ```
//!
//! All values are two-digit uppercase hex. There are two spaces before the
//! first `|`. Cells past the end of memory are shown as `00`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::CPU;
use crate::core::error::Result;

/// CPU execution tracer
///
/// # Example
/// ```no_run
/// use ls8::core::cpu::{CPU, CpuTracer};
///
/// let cpu = CPU::new();
/// let mut tracer = CpuTracer::new("trace.log").unwrap();
///
/// tracer.trace(&cpu).unwrap();
/// ```
pub struct CpuTracer {
    /// Enable/disable tracing
    enabled: bool,
    /// Output sink
    output: Box<dyn Write>,
}

impl CpuTracer {
    /// Create a tracer writing to a file
    ///
    /// If the file exists, it will be overwritten.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let output = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(output)))
    }

    /// Create a tracer writing to any sink (e.g. stderr)
    pub fn from_writer<W: Write + 'static>(output: W) -> Self {
        Self {
            enabled: true,
            output: Box::new(output),
        }
    }

    /// Enable or disable tracing
    ///
    /// When disabled, trace() calls return immediately without writing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write the trace line for the instruction at the current PC
    pub fn trace(&mut self, cpu: &CPU) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let line = Self::format_line(cpu);
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Build a trace line without writing it
    ///
    /// # Example
    /// ```
    /// use ls8::core::cpu::{CPU, CpuTracer};
    ///
    /// let cpu = CPU::new();
    /// assert_eq!(
    ///     CpuTracer::format_line(&cpu),
    ///     "TRACE: 00 00  | 00 00 00 00 00 | 00 00 00 00 00 00 00 F4"
    /// );
    /// ```
    pub fn format_line(cpu: &CPU) -> String {
        let pc = cpu.pc();
        let memory = cpu.memory();

        let lookahead: Vec<String> = (1..=5)
            .map(|offset| format!("{:02X}", memory.read(pc + offset).unwrap_or(0)))
            .collect();
        let mut line = format!(
            "TRACE: {:02X} {:02X}  | {} |",
            pc,
            cpu.flags().bits(),
            lookahead.join(" ")
        );
        for value in cpu.registers().as_array() {
            line.push_str(&format!(" {:02X}", value));
        }
        line
    }

    /// Flush the output buffer
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }
}
