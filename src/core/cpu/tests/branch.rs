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

use super::*;

/// CPU at PC 0x10 with the jump target 0x40 in R2 and FL preset
fn cpu_for_jump(flags: Flags) -> CPU {
    let mut cpu = CPU::new();
    cpu.set_reg(2, 0x40).unwrap();
    cpu.set_pc(0x10);
    cpu.set_flags(flags);
    cpu
}

/// Whether `op` jumps from 0x10 to 0x40 under `flags`
fn takes_jump(op: fn(&mut CPU, u8) -> Result<PcUpdate>, flags: Flags) -> bool {
    let mut cpu = cpu_for_jump(flags);
    match op(&mut cpu, 2).unwrap() {
        PcUpdate::Redirected => {
            assert_eq!(cpu.pc(), 0x40);
            true
        }
        PcUpdate::Advance => {
            assert_eq!(cpu.pc(), 0x10);
            false
        }
    }
}

#[test]
fn test_jmp() {
    let mut cpu = cpu_for_jump(Flags::empty());
    assert_eq!(cpu.op_jmp(2).unwrap(), PcUpdate::Redirected);
    assert_eq!(cpu.pc(), 0x40);
}

#[test]
fn test_jeq() {
    assert!(takes_jump(CPU::op_jeq, Flags::EQUAL));
    assert!(!takes_jump(CPU::op_jeq, Flags::GREATER));
    assert!(!takes_jump(CPU::op_jeq, Flags::LESS));
}

#[test]
fn test_jne() {
    assert!(!takes_jump(CPU::op_jne, Flags::EQUAL));
    assert!(takes_jump(CPU::op_jne, Flags::GREATER));
    assert!(takes_jump(CPU::op_jne, Flags::LESS));
}

#[test]
fn test_jgt() {
    assert!(!takes_jump(CPU::op_jgt, Flags::EQUAL));
    assert!(takes_jump(CPU::op_jgt, Flags::GREATER));
    assert!(!takes_jump(CPU::op_jgt, Flags::LESS));
}

#[test]
fn test_jlt() {
    assert!(!takes_jump(CPU::op_jlt, Flags::EQUAL));
    assert!(!takes_jump(CPU::op_jlt, Flags::GREATER));
    assert!(takes_jump(CPU::op_jlt, Flags::LESS));
}

#[test]
fn test_jge() {
    assert!(takes_jump(CPU::op_jge, Flags::EQUAL));
    assert!(takes_jump(CPU::op_jge, Flags::GREATER));
    assert!(!takes_jump(CPU::op_jge, Flags::LESS));
}

#[test]
fn test_jle() {
    assert!(takes_jump(CPU::op_jle, Flags::EQUAL));
    assert!(!takes_jump(CPU::op_jle, Flags::GREATER));
    assert!(takes_jump(CPU::op_jle, Flags::LESS));
}

#[test]
fn test_complement_jumps_before_any_compare() {
    // FL is empty until the first CMP
    assert!(takes_jump(CPU::op_jne, Flags::empty()));
    assert!(takes_jump(CPU::op_jge, Flags::empty()));
    assert!(takes_jump(CPU::op_jle, Flags::empty()));
    assert!(!takes_jump(CPU::op_jeq, Flags::empty()));
    assert!(!takes_jump(CPU::op_jgt, Flags::empty()));
    assert!(!takes_jump(CPU::op_jlt, Flags::empty()));
}

#[test]
fn test_untaken_jump_advances_two_bytes() {
    // LDI R2,9; CMP R0,R1 (equal); JNE R2; HLT
    let mut cpu = cpu_with_program(&[LDI, 2, 9, CMP, 0, 1, 0x56, 2, HLT]);

    for _ in 0..3 {
        step(&mut cpu).unwrap();
    }

    assert_eq!(cpu.pc(), 8);
}

#[test]
fn test_call_pushes_return_address() {
    let mut cpu = CPU::new();
    cpu.set_reg(1, 0x30).unwrap();
    cpu.set_pc(0x0A);

    assert_eq!(cpu.op_call(1).unwrap(), PcUpdate::Redirected);

    assert_eq!(cpu.pc(), 0x30);
    assert_eq!(cpu.registers().sp(), STACK_START - 1);
    assert_eq!(cpu.memory().read((STACK_START - 1) as usize).unwrap(), 0x0C);
}

#[test]
fn test_ret_pops_return_address() {
    let mut cpu = CPU::new();
    cpu.push_value(0x0C).unwrap();

    assert_eq!(cpu.op_ret().unwrap(), PcUpdate::Redirected);

    assert_eq!(cpu.pc(), 0x0C);
    assert_eq!(cpu.registers().sp(), STACK_START);
}

#[test]
fn test_ret_clears_return_address_cell() {
    // 00: LDI R1,0x08
    // 03: CALL R1
    // 05: HLT
    // 06: NOP NOP
    // 08: RET
    let program = [
        LDI, 1, 0x08, //
        CALL, 1, //
        HLT, //
        NOP, NOP, //
        RET,
    ];
    let mut cpu = cpu_with_program(&program);

    step(&mut cpu).unwrap(); // LDI
    step(&mut cpu).unwrap(); // CALL
    assert_eq!(cpu.memory().read((STACK_START - 1) as usize).unwrap(), 0x05);

    step(&mut cpu).unwrap(); // RET
    assert_eq!(cpu.pc(), 0x05);
    assert_eq!(cpu.registers().sp(), STACK_START);
    assert_eq!(cpu.memory().read((STACK_START - 1) as usize).unwrap(), 0x00);
}

#[test]
fn test_pop_leaves_stack_cell() {
    let mut cpu = CPU::new();
    cpu.set_reg(0, 0x42).unwrap();
    cpu.op_push(0).unwrap();

    cpu.op_pop(1).unwrap();

    assert_eq!(cpu.reg(1).unwrap(), 0x42);
    assert_eq!(cpu.memory().read((STACK_START - 1) as usize).unwrap(), 0x42);
}

#[test]
fn test_call_and_return() {
    // 00: LDI R1,0x0B
    // 03: CALL R1
    // 05: PRN R0
    // 07: HLT
    // 08: NOP NOP NOP
    // 0B: LDI R0,99   ; subroutine
    // 0E: RET
    let program = [
        LDI, 1, 0x0B, //
        CALL, 1, //
        PRN, 0, //
        HLT, //
        NOP, NOP, NOP, //
        LDI, 0, 99, //
        RET,
    ];
    let mut cpu = cpu_with_program(&program);

    step(&mut cpu).unwrap(); // LDI
    step(&mut cpu).unwrap(); // CALL
    assert_eq!(cpu.pc(), 0x0B);
    assert_eq!(cpu.registers().sp(), STACK_START - 1);

    step(&mut cpu).unwrap(); // LDI
    step(&mut cpu).unwrap(); // RET
    assert_eq!(cpu.pc(), 0x05);
    assert_eq!(cpu.registers().sp(), STACK_START);

    let mut out = Vec::new();
    cpu.run(&mut ManualClock::new(), &mut out).unwrap();
    assert_eq!(out, b"99\n");
}

#[test]
fn test_nested_calls() {
    // 00: LDI R1,0x0B
    // 03: LDI R2,0x10
    // 06: CALL R1
    // 08: PRN R0
    // 0A: HLT
    // 0B: CALL R2      ; outer
    // 0D: INC R0
    // 0F: RET
    // 10: LDI R0,40    ; inner
    // 13: RET
    let program = [
        LDI, 1, 0x0B, //
        LDI, 2, 0x10, //
        CALL, 1, //
        PRN, 0, //
        HLT, //
        CALL, 2, //
        0x65, 0, //
        RET, //
        LDI, 0, 40, //
        RET,
    ];

    let (cpu, out) = run_program(&program);

    assert_eq!(out, "41\n");
    assert_eq!(cpu.registers().sp(), STACK_START);
}
