//! Tests for the JMP instruction.
//!
//! Tests cover:
//! - Absolute jump
//! - Indirect jump through a pointer
//! - NMOS page-wrap bug when the pointer ends in 0xFF

use mos6502_core::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0x00, 0x90]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write_word(0x0200, 0x1234);
    cpu.memory_mut().load(0x8000, &[0x6C, 0x00, 0x02]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x10FF, 0x34);
    cpu.memory_mut().write(0x1000, 0x12);
    cpu.memory_mut().write(0x1100, 0x56);
    // JMP ($10FF)
    cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, 0x10]);

    cpu.step().unwrap();

    // High byte comes from $1000, not $1100
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_does_not_change_registers_or_flags() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x11);
    cpu.set_status(0b1100_0011);
    cpu.memory_mut().load(0x8000, &[0x4C, 0x00, 0x90]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.status(), 0b1100_0011);
    assert_eq!(cpu.sp(), 0xFF);
}
