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

use std::time::Duration;

use super::*;
use crate::core::interrupt::VECTOR_TABLE_BASE;

const HANDLER: u8 = 0x40;

/// CPU parked at 0x10 with a NOP, IRET handler installed for line 0
fn cpu_with_timer_handler() -> CPU {
    let mut cpu = CPU::new();
    let memory = cpu.memory_mut();
    memory.write(0x10, NOP).unwrap();
    memory.write(VECTOR_TABLE_BASE, HANDLER).unwrap();
    memory.write(HANDLER as usize, NOP).unwrap();
    memory.write(HANDLER as usize + 1, IRET).unwrap();
    cpu.set_pc(0x10);
    cpu
}

#[test]
fn test_no_interrupt_before_interval() {
    let mut cpu = cpu_with_timer_handler();
    cpu.registers_mut().set_im(interrupt_mask(0));
    let mut clock = ManualClock::new();
    clock.advance(Duration::from_millis(999));

    cpu.step(&mut clock, &mut std::io::sink()).unwrap();

    assert_eq!(cpu.pc(), 0x11);
    assert_eq!(cpu.registers().is(), 0);
    assert!(!cpu.interrupts().is_enabled());
}

#[test]
fn test_timer_interrupt_entry() {
    let mut cpu = cpu_with_timer_handler();
    cpu.registers_mut().set_im(interrupt_mask(0));
    cpu.set_reg(0, 0x11).unwrap();
    cpu.set_reg(4, 0x44).unwrap();
    cpu.set_flags(Flags::GREATER);
    let mut clock = ManualClock::new();
    clock.advance(Duration::from_secs(1));

    cpu.step(&mut clock, &mut std::io::sink()).unwrap();

    // Handler's first instruction already ran
    assert_eq!(cpu.pc(), HANDLER as usize + 1);
    assert_eq!(cpu.registers().sp(), 0xEB);
    assert!(!cpu.interrupts().is_enabled());
    assert_eq!(cpu.registers().is(), 0);

    let memory = cpu.memory();
    assert_eq!(memory.read(0xF3).unwrap(), 0x10); // PC
    assert_eq!(memory.read(0xF2).unwrap(), Flags::GREATER.bits()); // FL
    assert_eq!(memory.read(0xF1).unwrap(), 0x11); // R0
    assert_eq!(memory.read(0xED).unwrap(), 0x44); // R4
    assert_eq!(memory.read(0xEC).unwrap(), 0x01); // R5 (IM)
    assert_eq!(memory.read(0xEB).unwrap(), 0x00); // R6 (IS, already cleared)
}

#[test]
fn test_iret_restores_state() {
    let mut cpu = cpu_with_timer_handler();
    cpu.registers_mut().set_im(interrupt_mask(0));
    cpu.set_reg(0, 0x11).unwrap();
    cpu.set_reg(3, 0x33).unwrap();
    cpu.set_flags(Flags::LESS);
    let before = cpu.registers().clone();
    let mut clock = ManualClock::new();
    clock.advance(Duration::from_secs(1));

    cpu.step(&mut clock, &mut std::io::sink()).unwrap(); // entry + NOP
    cpu.set_reg(0, 0xFF).unwrap();
    cpu.set_flags(Flags::EQUAL);
    cpu.step(&mut clock, &mut std::io::sink()).unwrap(); // IRET

    assert_eq!(cpu.pc(), 0x10);
    assert_eq!(cpu.flags(), Flags::LESS);
    assert_eq!(*cpu.registers(), before);
    assert_eq!(cpu.registers().sp(), STACK_START);
    assert!(cpu.interrupts().is_enabled());

    // Nothing left pending: the interrupted NOP now runs
    cpu.step(&mut clock, &mut std::io::sink()).unwrap();
    assert_eq!(cpu.pc(), 0x11);
}

#[test]
fn test_masked_interrupt_stays_pending() {
    let mut cpu = cpu_with_timer_handler();
    let mut clock = ManualClock::new();
    clock.advance(Duration::from_secs(1));

    cpu.step(&mut clock, &mut std::io::sink()).unwrap();

    assert_eq!(cpu.pc(), 0x11);
    assert_eq!(cpu.registers().is(), interrupt_mask(0));
    assert_eq!(cpu.registers().sp(), STACK_START);
    assert!(cpu.interrupts().is_enabled());
}

#[test]
fn test_lowest_line_wins() {
    let mut cpu = CPU::new();
    cpu.memory_mut().write(VECTOR_TABLE_BASE + 1, 0x50).unwrap();
    cpu.memory_mut().write(VECTOR_TABLE_BASE + 2, 0x60).unwrap();
    cpu.registers_mut().set_im(0xFF);
    cpu.registers_mut().set_is(interrupt_mask(1) | interrupt_mask(2));
    cpu.interrupts_mut().enable();

    step(&mut cpu).unwrap();

    assert_eq!(cpu.pc(), 0x51);
    assert_eq!(cpu.registers().is(), interrupt_mask(2));
}

#[test]
fn test_one_interrupt_per_cycle() {
    let mut cpu = CPU::new();
    cpu.memory_mut().write(VECTOR_TABLE_BASE + 1, 0x50).unwrap();
    cpu.memory_mut().write(VECTOR_TABLE_BASE + 2, 0x60).unwrap();
    cpu.registers_mut().set_im(0xFF);
    cpu.registers_mut().set_is(interrupt_mask(1) | interrupt_mask(2));
    cpu.interrupts_mut().enable();

    step(&mut cpu).unwrap();
    step(&mut cpu).unwrap();

    // Line 2 waits for IRET to reopen the gate
    assert_eq!(cpu.pc(), 0x52);
    assert_eq!(cpu.registers().sp(), 0xEB);
}

#[test]
fn test_int_instruction() {
    // LDI R0,2; INT R0; NOP
    let mut cpu = cpu_with_program(&[LDI, 0, 2, INT, 0, NOP]);
    cpu.memory_mut().write(VECTOR_TABLE_BASE + 2, 0x30).unwrap();
    cpu.registers_mut().set_im(interrupt_mask(2));

    step(&mut cpu).unwrap();
    step(&mut cpu).unwrap();

    assert_eq!(cpu.pc(), 5);
    assert_eq!(cpu.registers().is(), interrupt_mask(2));
    assert!(cpu.interrupts().is_enabled());

    step(&mut cpu).unwrap();

    assert_eq!(cpu.pc(), 0x31);
    assert_eq!(cpu.memory().read(0xF3).unwrap(), 5);
}

#[test]
fn test_int_uses_low_three_bits() {
    let mut cpu = cpu_with_program(&[INT, 0]);
    cpu.set_reg(0, 0x0B).unwrap();

    step(&mut cpu).unwrap();

    assert_eq!(cpu.registers().is(), interrupt_mask(3));
}

#[test]
fn test_timer_interrupt_program() {
    // Handler at 0x20 prints 'A' and returns, main loop spins on JMP
    //
    // 00: LDI R0,0x20
    // 03: LDI R1,0xF8
    // 06: ST R1,R0      ; vector 0 = 0x20
    // 09: LDI R5,1      ; IM = timer only
    // 0C: LDI R2,0x0F
    // 0F: JMP R2
    // 20: LDI R0,65
    // 23: PRA R0
    // 25: IRET
    let mut program = vec![
        LDI, 0, 0x20, //
        LDI, 1, 0xF8, //
        ST, 1, 0, //
        LDI, 5, 1, //
        LDI, 2, 0x0F, //
        JMP, 2,
    ];
    program.resize(0x20, NOP);
    program.extend_from_slice(&[LDI, 0, 65, PRA, 0, IRET]);
    let mut cpu = cpu_with_program(&program);
    let mut clock = ManualClock::new();
    let mut out = Vec::new();

    for _ in 0..10 {
        cpu.step(&mut clock, &mut out).unwrap();
    }
    assert!(out.is_empty());

    clock.advance(Duration::from_secs(1));
    for _ in 0..4 {
        cpu.step(&mut clock, &mut out).unwrap();
    }

    assert_eq!(out, b"A");
    assert_eq!(cpu.pc(), 0x0F);
    assert_eq!(cpu.reg(0).unwrap(), 0x20);
    assert_eq!(cpu.registers().sp(), STACK_START);
}

fn interrupt_mask(line: u8) -> u8 {
    1 << line
}
