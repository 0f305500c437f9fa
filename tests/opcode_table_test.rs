//! Tests for the standard opcode table.
//!
//! Tests cover:
//! - Every entry is keyed by its own opcode
//! - Instruction sizes follow the addressing mode
//! - Undocumented opcodes and RTI are absent
//! - Custom descriptors always carry a length that matches their mode

use mos6502_core::{AddressingMode, FlatMemory, Mnemonic, OpcodeDescriptor, OpcodeTable, CPU};

#[test]
fn test_standard_table_size() {
    assert_eq!(OpcodeTable::standard().len(), 150);
}

#[test]
fn test_entries_keyed_by_opcode() {
    let table = OpcodeTable::standard();
    for desc in table.iter() {
        assert_eq!(table.get(desc.opcode()), Some(desc));
    }
}

#[test]
fn test_size_matches_mode() {
    for desc in OpcodeTable::standard().iter() {
        assert_eq!(
            desc.size_bytes(),
            desc.addressing_mode().instruction_length(),
            "{} 0x{:02X}",
            desc.mnemonic(),
            desc.opcode()
        );
        assert!((1..=3).contains(&desc.size_bytes()));
        assert!(desc.base_cycles() >= 2);
    }
}

#[test]
fn test_known_entries() {
    let table = OpcodeTable::standard();

    let lda = table.get(0xA9).unwrap();
    assert_eq!(lda.mnemonic(), Mnemonic::Lda);
    assert_eq!(lda.addressing_mode(), AddressingMode::Immediate);
    assert_eq!(lda.size_bytes(), 2);
    assert_eq!(lda.base_cycles(), 2);

    let jmp = table.get(0x6C).unwrap();
    assert_eq!(jmp.mnemonic(), Mnemonic::Jmp);
    assert_eq!(jmp.addressing_mode(), AddressingMode::Indirect);
    assert_eq!(jmp.size_bytes(), 3);

    let brk = table.get(0x00).unwrap();
    assert_eq!(brk.mnemonic(), Mnemonic::Brk);
    assert!(brk.mnemonic().halts());
    assert_eq!(brk.size_bytes(), 1);
}

#[test]
fn test_absent_entries() {
    let table = OpcodeTable::standard();
    for opcode in [0x02, 0x40, 0x80, 0xFF] {
        assert!(table.get(opcode).is_none(), "0x{:02X}", opcode);
    }
}

#[test]
fn test_only_brk_halts() {
    let halting: Vec<_> = OpcodeTable::standard()
        .iter()
        .filter(|d| d.mnemonic().halts())
        .map(|d| d.opcode())
        .collect();
    assert_eq!(halting, vec![0x00]);
}

#[test]
fn test_custom_table() {
    let mut table = OpcodeTable::empty();
    assert!(table.is_empty());

    let previous = table.insert(OpcodeDescriptor::new(
        0xEA,
        Mnemonic::Nop,
        2,
        AddressingMode::Implied,
    ));
    assert!(previous.is_none());
    assert_eq!(table.len(), 1);

    let removed = table.remove(0xEA).unwrap();
    assert_eq!(removed.mnemonic(), Mnemonic::Nop);
    assert!(table.is_empty());
}

// ========== Custom Descriptors ==========

#[test]
fn test_custom_descriptor_length_follows_mode() {
    let cases = [
        (AddressingMode::Implied, 1),
        (AddressingMode::Accumulator, 1),
        (AddressingMode::Immediate, 2),
        (AddressingMode::Relative, 2),
        (AddressingMode::IndirectY, 2),
        (AddressingMode::AbsoluteX, 3),
        (AddressingMode::Indirect, 3),
    ];
    for (mode, length) in cases {
        let desc = OpcodeDescriptor::new(0x02, Mnemonic::Nop, 2, mode);
        assert_eq!(desc.size_bytes(), length, "{:?}", mode);
        assert_eq!(desc.addressing_mode(), mode);
    }
}

#[test]
fn test_custom_nop_always_advances_pc() {
    // Remap NOP onto an undocumented byte
    let table = OpcodeTable::empty()
        .with(OpcodeDescriptor::new(0x1A, Mnemonic::Nop, 2, AddressingMode::Implied))
        .with(OpcodeDescriptor::new(0x00, Mnemonic::Brk, 7, AddressingMode::Implied));
    let mut cpu = CPU::with_opcode_table(FlatMemory::new(), table);
    cpu.load(&[0x1A, 0x1A, 0x1A, 0x00]);
    cpu.reset();

    let consumed = cpu.run_for_cycles(100).unwrap();

    assert!(cpu.is_halted());
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(consumed, 13);
}

#[test]
fn test_custom_halt_class_entry_stops_run() {
    // BRK mapped to a second byte still halts
    let table = OpcodeTable::standard().with(OpcodeDescriptor::new(
        0xDB,
        Mnemonic::Brk,
        7,
        AddressingMode::Implied,
    ));
    let mut cpu = CPU::with_opcode_table(FlatMemory::new(), table);
    cpu.load(&[0xE8, 0xDB, 0xE8]);
    cpu.reset();

    cpu.run().unwrap();

    assert!(cpu.is_halted());
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.x(), 0x01);
}
