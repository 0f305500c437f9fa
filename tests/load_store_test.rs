//! Tests for the load and store instructions.
//!
//! Tests cover:
//! - LDA/LDX/LDY across addressing modes, with Z and N updates
//! - STA/STX/STY writes, with no flag changes
//! - Indexed and indirect effective addresses

use mos6502_core::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== LDA ==========

#[test]
fn test_lda_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x42]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_zero_sets_z() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);
    cpu.memory_mut().load(0x8000, &[0xA9, 0x00]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_negative_sets_n() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x80]);

    cpu.step().unwrap();

    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x0010, 0x99);
    cpu.memory_mut().write(0x0110, 0x11);
    // LDA $F0,X -> $0010
    cpu.memory_mut().load(0x8000, &[0xB5, 0xF0]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_lda_absolute_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x05);
    cpu.memory_mut().write(0x1239, 0x37);
    cpu.memory_mut().load(0x8000, &[0xB9, 0x34, 0x12]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_indirect_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x04);
    // Pointer at $24/$25 -> $3050
    cpu.memory_mut().write(0x0024, 0x50);
    cpu.memory_mut().write(0x0025, 0x30);
    cpu.memory_mut().write(0x3050, 0xAB);
    cpu.memory_mut().load(0x8000, &[0xA1, 0x20]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAB);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indirect_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x10);
    // Pointer at $86/$87 -> $4028, plus Y -> $4038
    cpu.memory_mut().write(0x0086, 0x28);
    cpu.memory_mut().write(0x0087, 0x40);
    cpu.memory_mut().write(0x4038, 0x5A);
    cpu.memory_mut().load(0x8000, &[0xB1, 0x86]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
}

#[test]
fn test_lda_indirect_y_pointer_wraps_in_zero_page() {
    let mut cpu = setup_cpu();
    // Pointer low at $FF, high at $00
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x20);
    cpu.memory_mut().write(0x0100, 0xEE);
    cpu.memory_mut().write(0x2000, 0x77);
    cpu.memory_mut().load(0x8000, &[0xB1, 0xFF]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
}

// ========== LDX / LDY ==========

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x02);
    cpu.memory_mut().write(0x0042, 0x80);
    cpu.memory_mut().load(0x8000, &[0xB6, 0x40]);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.a(), 0x00);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x0301, 0x00);
    cpu.set_y(0x55);
    cpu.memory_mut().load(0x8000, &[0xBC, 0x00, 0x03]);

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

// ========== STA / STX / STY ==========

#[test]
fn test_sta_absolute() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.memory_mut().load(0x8000, &[0x8D, 0x00, 0x02]);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0200), 0x80);
    // Stores never touch flags
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_sta_absolute_x_wraps_address_space() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x3C);
    cpu.set_x(0x02);
    cpu.memory_mut().load(0x8000, &[0x9D, 0xFF, 0xFF]);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0001), 0x3C);
}

#[test]
fn test_stx_zero_page() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x21);
    cpu.memory_mut().load(0x8000, &[0x86, 0x10]);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), 0x21);
}

#[test]
fn test_sty_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x44);
    cpu.set_x(0x05);
    cpu.memory_mut().load(0x8000, &[0x94, 0x10]);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0015), 0x44);
}

#[test]
fn test_store_zero_leaves_z_alone() {
    let mut cpu = setup_cpu();
    cpu.set_status(0b1000_0000); // N set, Z clear
    cpu.memory_mut().load(0x8000, &[0x85, 0x10]);

    cpu.step().unwrap();

    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}
