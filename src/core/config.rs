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

//! Emulator configuration
//!
//! Settings come from three layers, later layers winning:
//! 1. A TOML file (`--config PATH`, or `ls8.toml` in the working directory)
//! 2. Environment variables (`LS8_TRACE`, `LS8_TIMER_INTERVAL_MS`,
//!    `LS8_MAX_CYCLES`), typically set through a `.env` file
//! 3. Command line flags, applied by the binary
//!
//! # File Format
//!
//! ```toml
//! [cpu]
//! timer_interval_ms = 1000
//!
//! [debug]
//! trace = false
//! max_cycles = 0   # 0 = unlimited
//! ```
//!
//! Missing sections and keys take their default values.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EmulatorError, Result};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ls8.toml";

/// Environment variable enabling the execution trace
pub const ENV_TRACE: &str = "LS8_TRACE";
/// Environment variable overriding the timer interval in milliseconds
pub const ENV_TIMER_INTERVAL_MS: &str = "LS8_TIMER_INTERVAL_MS";
/// Environment variable overriding the cycle budget
pub const ENV_MAX_CYCLES: &str = "LS8_MAX_CYCLES";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub cpu: CpuConfig,
    pub debug: DebugConfig,
}

/// `[cpu]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CpuConfig {
    /// Interval of the timer interrupt (line 0) in milliseconds
    pub timer_interval_ms: u64,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            timer_interval_ms: 1000,
        }
    }
}

/// `[debug]` section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebugConfig {
    /// Print a trace line before every cycle
    pub trace: bool,
    /// Stop after this many cycles; 0 means no limit
    pub max_cycles: u64,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| EmulatorError::Config(e.to_string()))
    }

    /// Read configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            EmulatorError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&text)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit `path` must exist. Without one, `ls8.toml` is used if
    /// present and defaults otherwise. Environment overrides are applied
    /// on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        log::debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_TRACE) {
            self.debug.trace = parse_bool(ENV_TRACE, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMER_INTERVAL_MS) {
            self.cpu.timer_interval_ms = parse_number(ENV_TIMER_INTERVAL_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_CYCLES) {
            self.debug.max_cycles = parse_number(ENV_MAX_CYCLES, &value)?;
        }
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| EmulatorError::Config(e.to_string()))
    }

    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.cpu.timer_interval_ms)
    }

    /// Cycle budget, `None` when unlimited
    pub fn max_cycles(&self) -> Option<u64> {
        match self.debug.max_cycles {
            0 => None,
            n => Some(n),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(EmulatorError::Config(format!(
            "{}: expected a boolean, got '{}'",
            key, other
        ))),
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|e| {
        EmulatorError::Config(format!("{}: invalid number '{}': {}", key, value, e))
    })
}
