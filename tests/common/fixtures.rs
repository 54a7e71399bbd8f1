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

//! Test fixtures for common test scenarios

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use ls8::core::system::System;
use ls8::core::timer::Clock;

/// Path of a bundled demo program under `programs/`
#[allow(dead_code)]
pub fn program_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("programs")
        .join(name)
}

/// Write `source` to a temporary .ls8 file
#[allow(dead_code)]
pub fn write_program(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ls8")
        .tempfile()
        .expect("Failed to create program file");
    file.write_all(source.as_bytes())
        .expect("Failed to write program file");
    file.flush().expect("Failed to flush program file");
    file
}

/// Clock that reports the same elapsed time on every poll
#[allow(dead_code)]
pub struct SteadyClock(pub Duration);

impl Clock for SteadyClock {
    fn elapsed(&mut self) -> Duration {
        self.0
    }
}

/// Console sink that can be read after the system takes ownership
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct Console(Rc<RefCell<Vec<u8>>>);

#[allow(dead_code)]
impl Console {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// System on a clock that never advances
#[allow(dead_code)]
pub fn create_test_system() -> (System, Console) {
    create_system_with_clock(SteadyClock(Duration::ZERO))
}

#[allow(dead_code)]
pub fn create_system_with_clock<C: Clock + 'static>(clock: C) -> (System, Console) {
    let console = Console::default();
    let system = System::with_io(Box::new(clock), Box::new(console.clone()));
    (system, console)
}

/// Load a bundled demo program and run it to completion
#[allow(dead_code)]
pub fn run_demo(name: &str) -> (System, String) {
    let (mut system, console) = create_test_system();
    system
        .load_program(program_path(name))
        .expect("Failed to load program");
    system.run().expect("Program faulted");
    let output = console.contents();
    (system, output)
}
