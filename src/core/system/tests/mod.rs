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

//! System module tests
//!
//! - `basic`: construction, loading, configuration, tracing
//! - `execution`: running programs, cycle budgets, faults


use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::core::timer::ManualClock;

/// Console sink whose contents stay readable after the system takes it
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// System on a manual clock, returning the console buffer alongside it
fn test_system() -> (super::System, SharedBuffer) {
    let console = SharedBuffer::default();
    let system = super::System::with_io(Box::new(ManualClock::new()), Box::new(console.clone()));
    (system, console)
}
