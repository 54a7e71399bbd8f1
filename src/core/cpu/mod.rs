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

use std::io::Write;
use std::time::Duration;

use crate::core::error::{ArithmeticFault, EmulatorError, Result};
use crate::core::interrupt::InterruptController;
use crate::core::memory::Memory;
use crate::core::timer::{Clock, DEFAULT_TIMER_INTERVAL};

/// LS8 CPU emulation implementation
///
/// # Specifications
/// - Architecture: 8-bit, register based
/// - Memory: 256 bytes, owned by the CPU
/// - Registers: 8 x 8-bit (R5 = IM, R6 = IS, R7 = SP) + PC + FL
/// - Interrupts: 8 lines, vector table at 0xF8, timer on line 0
///
/// # Example
/// ```
/// use ls8::core::cpu::{CPU, CpuState, HaltReason};
/// use ls8::core::timer::ManualClock;
///
/// let mut cpu = CPU::new();
/// // LDI R0,8; PRN R0; HLT
/// cpu.load_program(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
///
/// let mut out = Vec::new();
/// let reason = cpu.run(&mut ManualClock::new(), &mut out).unwrap();
///
/// assert_eq!(reason, HaltReason::Instruction);
/// assert_eq!(cpu.state(), CpuState::Halted(HaltReason::Instruction));
/// assert_eq!(out, b"8\n");
/// ```
pub struct CPU {
    /// Main memory (256 bytes)
    memory: Memory,

    /// R0-R7
    regs: RegisterFile,

    /// Program counter
    pc: usize,

    /// Flags register (result of the last CMP)
    fl: Flags,

    /// Running or halted
    state: CpuState,

    /// Interrupt enable gate and timer
    interrupts: InterruptController,

    /// Number of instructions executed since reset
    cycles: u64,

    /// Opcode of the instruction being executed (for debugging)
    current_opcode: u8,
}

/// Execution state of the CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    Running,
    Halted(HaltReason),
}

/// Why the CPU stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// HLT instruction
    Instruction,
    /// DIV with a zero divisor
    DivideByZero,
    /// MOD with a zero divisor
    ModuloByZero,
}

impl From<ArithmeticFault> for HaltReason {
    fn from(fault: ArithmeticFault) -> Self {
        match fault {
            ArithmeticFault::DivideByZero => HaltReason::DivideByZero,
            ArithmeticFault::ModuloByZero => HaltReason::ModuloByZero,
        }
    }
}

// Module declarations
mod decode;
mod disassembler;
mod instructions;
mod registers;
#[cfg(test)]
mod tests;
mod tracer;

// Re-exports
pub use decode::{is_alu, operand_count, sets_pc, Opcode};
pub use disassembler::Disassembler;
use instructions::PcUpdate;
pub use registers::{Flags, RegisterFile, REGISTER_COUNT, STACK_START};
pub use tracer::CpuTracer;

impl CPU {
    /// Create a new CPU instance with initial state
    ///
    /// The CPU is initialized with the following state:
    /// - Memory: all zero
    /// - R0-R6: 0, SP (R7): 0xF4
    /// - PC: 0x00
    /// - FL: empty
    /// - State: running, interrupt checking disabled
    /// - Timer interval: 1 second
    ///
    /// # Example
    /// ```
    /// use ls8::core::cpu::CPU;
    ///
    /// let cpu = CPU::new();
    /// assert_eq!(cpu.pc(), 0);
    /// assert_eq!(cpu.registers().sp(), 0xF4);
    /// ```
    pub fn new() -> Self {
        Self::with_timer_interval(DEFAULT_TIMER_INTERVAL)
    }

    /// Create a CPU whose timer interrupt fires every `interval`
    pub fn with_timer_interval(interval: Duration) -> Self {
        Self {
            memory: Memory::new(),
            regs: RegisterFile::new(),
            pc: 0,
            fl: Flags::empty(),
            state: CpuState::Running,
            interrupts: InterruptController::new(interval),
            cycles: 0,
            current_opcode: 0,
        }
    }

    /// Reset CPU to initial state
    ///
    /// Clears registers, flags, memory and the interrupt controller. The
    /// timer interval is kept.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.regs.reset();
        self.pc = 0;
        self.fl = Flags::empty();
        self.state = CpuState::Running;
        self.interrupts.reset();
        self.cycles = 0;
        self.current_opcode = 0;
    }

    /// Copy a program image into memory at address 0
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        self.memory.load(0, program)
    }

    /// Read register `index` (0-7)
    #[inline(always)]
    pub fn reg(&self, index: u8) -> Result<u8> {
        self.regs.get(index)
    }

    /// Write register `index` (0-7)
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u8) -> Result<()> {
        self.regs.set(index, value)
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Get current PC value
    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn set_pc(&mut self, pc: usize) {
        self.pc = pc;
    }

    /// Current FL register
    pub fn flags(&self) -> Flags {
        self.fl
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.fl = flags;
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CpuState) {
        self.state = state;
    }

    pub fn is_running(&self) -> bool {
        self.state == CpuState::Running
    }

    /// Instructions executed since reset
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn interrupts(&self) -> &InterruptController {
        &self.interrupts
    }

    pub fn interrupts_mut(&mut self) -> &mut InterruptController {
        &mut self.interrupts
    }

    /// Execute one cycle
    ///
    /// This is the main CPU execution step. It performs:
    /// 1. Timer poll (may set IS bit 0 and enable interrupt checking)
    /// 2. Interrupt check, if enabled
    /// 3. Instruction fetch and decode
    /// 4. Instruction execution
    /// 5. PC advance, unless the instruction moved the PC itself
    ///
    /// A halted CPU does nothing.
    ///
    /// # Arguments
    ///
    /// * `clock` - Time source for the interval timer
    /// * `console` - Sink for PRN/PRA output and fault diagnostics
    ///
    /// # Returns
    ///
    /// - `Ok(())` after a completed cycle, including a division fault that
    ///   halted the CPU
    /// - `Err(EmulatorError::UnknownOpcode)` if PC points at an undefined
    ///   opcode; no state is changed by that cycle's instruction
    /// - `Err(EmulatorError::AddressError | InvalidRegister)` on bad operands
    ///
    /// # Example
    ///
    /// ```
    /// use ls8::core::cpu::CPU;
    /// use ls8::core::timer::ManualClock;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load_program(&[0x82, 0x02, 0x2A]).unwrap(); // LDI R2,42
    ///
    /// cpu.step(&mut ManualClock::new(), &mut std::io::sink()).unwrap();
    /// assert_eq!(cpu.reg(2).unwrap(), 42);
    /// assert_eq!(cpu.pc(), 3);
    /// ```
    pub fn step(&mut self, clock: &mut dyn Clock, console: &mut dyn Write) -> Result<()> {
        if !self.is_running() {
            log::trace!("step() on halted CPU ignored");
            return Ok(());
        }

        if self.interrupts.poll_timer(clock.elapsed()) {
            let status = self.regs.is() | crate::core::interrupt::interrupts::TIMER;
            self.regs.set_is(status);
        }

        if self.interrupts.is_enabled() {
            self.service_interrupts()?;
        }

        // Instruction fetch
        let pc = self.pc;
        let byte = self.memory.read(pc)?;
        let opcode = Opcode::decode(byte).ok_or_else(|| {
            log::warn!("Unknown opcode: 0x{:02X} at PC=0x{:02X}", byte, pc);
            EmulatorError::UnknownOpcode { opcode: byte, pc }
        })?;
        self.current_opcode = byte;

        let count = opcode.operand_count();
        let mut operands = [0u8; 2];
        for (i, operand) in operands.iter_mut().enumerate().take(count) {
            *operand = self.memory.read(pc + 1 + i)?;
        }

        log::trace!(
            "PC=0x{:02X} {} {:02X} {:02X}",
            pc,
            opcode.mnemonic(),
            operands[0],
            operands[1]
        );

        // Execute instruction
        match self.execute_instruction(opcode, operands[0], operands[1], console) {
            Ok(PcUpdate::Advance) => self.pc = pc + count + 1,
            Ok(PcUpdate::Redirected) => {}
            Err(EmulatorError::Arithmetic(fault)) => {
                log::warn!("{} at PC=0x{:02X}, halting", fault, pc);
                writeln!(console, "ZeroDivisionError: {}", fault)?;
                self.state = CpuState::Halted(fault.into());
            }
            Err(e) => return Err(e),
        }

        self.cycles += 1;
        Ok(())
    }

    /// Run until the CPU halts
    ///
    /// # Returns
    ///
    /// The reason the CPU stopped, or the first unrecoverable error
    pub fn run(&mut self, clock: &mut dyn Clock, console: &mut dyn Write) -> Result<HaltReason> {
        loop {
            if let CpuState::Halted(reason) = self.state {
                return Ok(reason);
            }
            self.step(clock, console)?;
        }
    }

    /// Run for at most `max_cycles` instructions
    ///
    /// # Returns
    ///
    /// `Some(reason)` if the CPU halted within the budget, `None` if it was
    /// still running when the budget ran out
    pub fn run_for(
        &mut self,
        clock: &mut dyn Clock,
        console: &mut dyn Write,
        max_cycles: u64,
    ) -> Result<Option<HaltReason>> {
        for _ in 0..max_cycles {
            if !self.is_running() {
                break;
            }
            self.step(clock, console)?;
        }

        Ok(match self.state {
            CpuState::Halted(reason) => Some(reason),
            CpuState::Running => None,
        })
    }

    /// Deliver at most one pending interrupt
    ///
    /// The lowest-numbered line set in both IM and IS is serviced:
    /// 1. Interrupt checking is disabled
    /// 2. The line's IS bit is cleared
    /// 3. PC, FL, then R0-R6 are pushed
    /// 4. PC is loaded from the vector table
    fn service_interrupts(&mut self) -> Result<()> {
        let Some(number) = InterruptController::next_pending(self.regs.im(), self.regs.is())
        else {
            return Ok(());
        };

        self.interrupts.disable();
        self.regs.set_is(self.regs.is() & !(1 << number));

        let return_address = self.pc_byte(self.pc)?;
        self.push_value(return_address)?;
        self.push_value(self.fl.bits())?;
        for r in 0..=RegisterFile::IS {
            self.push_value(self.regs.get(r)?)?;
        }

        let vector = InterruptController::vector_address(number);
        let handler = self.memory.read(vector)?;
        log::debug!(
            "Interrupt {}: PC=0x{:02X} -> handler 0x{:02X}",
            number,
            self.pc,
            handler
        );
        self.pc = handler as usize;
        Ok(())
    }

    /// Narrow an address to the byte stored on the stack
    fn pc_byte(&self, address: usize) -> Result<u8> {
        u8::try_from(address).map_err(|_| EmulatorError::AddressError { address })
    }

    /// Dump all CPU registers for debugging
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ls8::core::cpu::CPU;
    ///
    /// let cpu = CPU::new();
    /// cpu.dump_registers(); // Print all register values
    /// ```
    pub fn dump_registers(&self) {
        println!("CPU Registers:");
        println!(
            "PC: 0x{:02X}  FL: 0x{:02X}  Opcode: 0x{:02X}",
            self.pc,
            self.fl.bits(),
            self.current_opcode
        );
        for (i, value) in self.regs.as_array().iter().enumerate() {
            print!("R{}: 0x{:02X}  ", i, value);
        }
        println!();
        println!(
            "IM: 0x{:02X}  IS: 0x{:02X}  SP: 0x{:02X}  Interrupts: {}",
            self.regs.im(),
            self.regs.is(),
            self.regs.sp(),
            if self.interrupts.is_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
