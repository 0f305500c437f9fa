//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - Basic addition with and without carry in
//! - Carry out on unsigned overflow
//! - Signed overflow in both directions
//! - Z and N from the result
//! - Decimal flag does not change the arithmetic

use mos6502_core::{FlatMemory, MemoryBus, StatusFlags, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Basic Addition ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);
    cpu.memory_mut().load(0x8000, &[0x69, 0x20]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x30);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_adc_with_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);
    cpu.set_flag(StatusFlags::CARRY, true);
    cpu.memory_mut().load(0x8000, &[0x69, 0x20]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x31);
    assert!(!cpu.flag_c());
}

// ========== Carry and Overflow ==========

#[test]
fn test_adc_signed_overflow_positive() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x50);
    cpu.memory_mut().load(0x8000, &[0x69, 0x50]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_signed_overflow_negative() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x90);
    cpu.memory_mut().load(0x8000, &[0x69, 0x90]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x20);
    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_carry_out_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_adc_carry_in_causes_carry_out() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag(StatusFlags::CARRY, true);
    cpu.memory_mut().load(0x8000, &[0x69, 0x00]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x7F);
    cpu.memory_mut().load(0x8000, &[0x69, 0x80]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xFF);
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_c());
}

// ========== Decimal Flag ==========

#[test]
fn test_adc_ignores_decimal_flag() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x09);
    cpu.set_flag(StatusFlags::DECIMAL_MODE, true);
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);

    cpu.step().unwrap();

    // Binary result, not BCD 0x10
    assert_eq!(cpu.a(), 0x0A);
    assert!(cpu.flag_d());
}

// ========== Addressing Modes ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.memory_mut().write(0x0042, 0x02);
    cpu.memory_mut().load(0x8000, &[0x65, 0x42]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x03);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_adc_indirect_y() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.set_y(0x01);
    cpu.memory_mut().write_word(0x0010, 0x2000);
    cpu.memory_mut().write(0x2001, 0x04);
    cpu.memory_mut().load(0x8000, &[0x71, 0x10]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x05);
}
