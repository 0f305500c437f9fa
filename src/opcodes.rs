//! # Opcode Table
//!
//! Maps opcode bytes to [`OpcodeDescriptor`]s. The standard table carries the documented
//! NMOS encodings of every instruction this core executes; bytes without an entry decode
//! to `UnimplementedOpcode`, so coverage can grow one entry at a time.
//!
//! Each descriptor includes:
//! - Mnemonic (closed enum, one handler per variant)
//! - Addressing mode
//! - Base cycle cost (metadata only, excluding page-crossing penalties)
//! - Instruction size in bytes
//!
//! Tables are plain values. The engine owns one, so tests can hand it a custom or
//! partial table without touching any global state.

use crate::addressing::AddressingMode;
use std::fmt;

/// Instruction mnemonics the engine knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Load/store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Register transfers
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    // Increment/decrement
    Inc,
    Dec,
    Inx,
    Iny,
    Dex,
    Dey,
    // Arithmetic and logic
    Adc,
    Sbc,
    And,
    Ora,
    Eor,
    Cmp,
    Cpx,
    Cpy,
    Bit,
    // Shifts and rotates
    Asl,
    Lsr,
    Rol,
    Ror,
    // Stack
    Pha,
    Pla,
    Php,
    Plp,
    // Branches
    Bpl,
    Bmi,
    Bvc,
    Bvs,
    Bcc,
    Bcs,
    Bne,
    Beq,
    // Control flow
    Jmp,
    Jsr,
    Rts,
    Brk,
    Nop,
    // Flags
    Clc,
    Sec,
    Cli,
    Sei,
    Cld,
    Sed,
    Clv,
}

impl Mnemonic {
    /// Upper-case assembler name, e.g. `"LDA"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Txa => "TXA",
            Mnemonic::Tya => "TYA",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txs => "TXS",
            Mnemonic::Inc => "INC",
            Mnemonic::Dec => "DEC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Adc => "ADC",
            Mnemonic::Sbc => "SBC",
            Mnemonic::And => "AND",
            Mnemonic::Ora => "ORA",
            Mnemonic::Eor => "EOR",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Bit => "BIT",
            Mnemonic::Asl => "ASL",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Pha => "PHA",
            Mnemonic::Pla => "PLA",
            Mnemonic::Php => "PHP",
            Mnemonic::Plp => "PLP",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Bne => "BNE",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Rts => "RTS",
            Mnemonic::Brk => "BRK",
            Mnemonic::Nop => "NOP",
            Mnemonic::Clc => "CLC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Cli => "CLI",
            Mnemonic::Sei => "SEI",
            Mnemonic::Cld => "CLD",
            Mnemonic::Sed => "SED",
            Mnemonic::Clv => "CLV",
        }
    }

    /// True for instructions that stop `run()`.
    pub const fn halts(self) -> bool {
        matches!(self, Mnemonic::Brk)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one opcode.
///
/// # Examples
///
/// ```
/// use mos6502_core::{AddressingMode, Mnemonic, OpcodeTable};
///
/// let table = OpcodeTable::standard();
/// let lda_imm = table.get(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic(), Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode(), AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles(), 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeDescriptor {
    /// The opcode byte this descriptor is keyed by.
    opcode: u8,

    /// Instruction mnemonic.
    mnemonic: Mnemonic,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    size_bytes: u8,

    /// Base cycle cost (before page crossing penalties).
    base_cycles: u8,

    /// Addressing mode for this instruction.
    addressing_mode: AddressingMode,
}

impl OpcodeDescriptor {
    /// Builds a descriptor whose size is derived from the addressing mode.
    pub const fn new(
        opcode: u8,
        mnemonic: Mnemonic,
        base_cycles: u8,
        addressing_mode: AddressingMode,
    ) -> Self {
        Self {
            opcode,
            mnemonic,
            size_bytes: addressing_mode.instruction_length(),
            base_cycles,
            addressing_mode,
        }
    }

    /// The opcode byte this descriptor is keyed by.
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    pub const fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    /// Instruction length in bytes, always `addressing_mode().instruction_length()`.
    pub const fn size_bytes(&self) -> u8 {
        self.size_bytes
    }

    pub const fn base_cycles(&self) -> u8 {
        self.base_cycles
    }

    pub const fn addressing_mode(&self) -> AddressingMode {
        self.addressing_mode
    }
}

/// Opcode byte to descriptor mapping with 256 optional slots.
///
/// # Examples
///
/// ```
/// use mos6502_core::{AddressingMode, Mnemonic, OpcodeDescriptor, OpcodeTable};
///
/// // A partial table with only BRK and NOP
/// let table = OpcodeTable::empty()
///     .with(OpcodeDescriptor::new(0x00, Mnemonic::Brk, 7, AddressingMode::Implied))
///     .with(OpcodeDescriptor::new(0xEA, Mnemonic::Nop, 2, AddressingMode::Implied));
///
/// assert_eq!(table.len(), 2);
/// assert!(table.get(0xA9).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeTable {
    slots: [Option<OpcodeDescriptor>; 256],
}

impl OpcodeTable {
    /// A table with no entries; every byte decodes as unimplemented.
    pub const fn empty() -> Self {
        Self { slots: [None; 256] }
    }

    /// The table of documented encodings this core implements.
    pub const fn standard() -> Self {
        let mut slots = [None; 256];
        let mut i = 0;
        while i < STANDARD_OPCODES.len() {
            let desc = STANDARD_OPCODES[i];
            slots[desc.opcode as usize] = Some(desc);
            i += 1;
        }
        Self { slots }
    }

    /// Adds or replaces the entry for `desc.opcode`.
    pub fn insert(&mut self, desc: OpcodeDescriptor) -> Option<OpcodeDescriptor> {
        self.slots[desc.opcode as usize].replace(desc)
    }

    /// Builder-style [`OpcodeTable::insert`].
    pub fn with(mut self, desc: OpcodeDescriptor) -> Self {
        self.insert(desc);
        self
    }

    /// Removes the entry for `opcode`, returning it if present.
    pub fn remove(&mut self, opcode: u8) -> Option<OpcodeDescriptor> {
        self.slots[opcode as usize].take()
    }

    /// Looks up the descriptor for an opcode byte.
    pub fn get(&self, opcode: u8) -> Option<&OpcodeDescriptor> {
        self.slots[opcode as usize].as_ref()
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when no opcode is populated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over populated entries in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &OpcodeDescriptor> {
        self.slots.iter().flatten()
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::standard()
    }
}

use AddressingMode::*;
use Mnemonic::*;

const fn op(opcode: u8, mnemonic: Mnemonic, base_cycles: u8, mode: AddressingMode) -> OpcodeDescriptor {
    OpcodeDescriptor::new(opcode, mnemonic, base_cycles, mode)
}

/// Documented NMOS encodings, grouped by instruction.
const STANDARD_OPCODES: &[OpcodeDescriptor] = &[
    // LDA
    op(0xA9, Lda, 2, Immediate),
    op(0xA5, Lda, 3, ZeroPage),
    op(0xB5, Lda, 4, ZeroPageX),
    op(0xAD, Lda, 4, Absolute),
    op(0xBD, Lda, 4, AbsoluteX),
    op(0xB9, Lda, 4, AbsoluteY),
    op(0xA1, Lda, 6, IndirectX),
    op(0xB1, Lda, 5, IndirectY),
    // LDX
    op(0xA2, Ldx, 2, Immediate),
    op(0xA6, Ldx, 3, ZeroPage),
    op(0xB6, Ldx, 4, ZeroPageY),
    op(0xAE, Ldx, 4, Absolute),
    op(0xBE, Ldx, 4, AbsoluteY),
    // LDY
    op(0xA0, Ldy, 2, Immediate),
    op(0xA4, Ldy, 3, ZeroPage),
    op(0xB4, Ldy, 4, ZeroPageX),
    op(0xAC, Ldy, 4, Absolute),
    op(0xBC, Ldy, 4, AbsoluteX),
    // STA
    op(0x85, Sta, 3, ZeroPage),
    op(0x95, Sta, 4, ZeroPageX),
    op(0x8D, Sta, 4, Absolute),
    op(0x9D, Sta, 5, AbsoluteX),
    op(0x99, Sta, 5, AbsoluteY),
    op(0x81, Sta, 6, IndirectX),
    op(0x91, Sta, 6, IndirectY),
    // STX
    op(0x86, Stx, 3, ZeroPage),
    op(0x96, Stx, 4, ZeroPageY),
    op(0x8E, Stx, 4, Absolute),
    // STY
    op(0x84, Sty, 3, ZeroPage),
    op(0x94, Sty, 4, ZeroPageX),
    op(0x8C, Sty, 4, Absolute),
    // Transfers
    op(0xAA, Tax, 2, Implied),
    op(0xA8, Tay, 2, Implied),
    op(0x8A, Txa, 2, Implied),
    op(0x98, Tya, 2, Implied),
    op(0xBA, Tsx, 2, Implied),
    op(0x9A, Txs, 2, Implied),
    // INC / DEC
    op(0xE6, Inc, 5, ZeroPage),
    op(0xF6, Inc, 6, ZeroPageX),
    op(0xEE, Inc, 6, Absolute),
    op(0xFE, Inc, 7, AbsoluteX),
    op(0xC6, Dec, 5, ZeroPage),
    op(0xD6, Dec, 6, ZeroPageX),
    op(0xCE, Dec, 6, Absolute),
    op(0xDE, Dec, 7, AbsoluteX),
    op(0xE8, Inx, 2, Implied),
    op(0xC8, Iny, 2, Implied),
    op(0xCA, Dex, 2, Implied),
    op(0x88, Dey, 2, Implied),
    // ADC
    op(0x69, Adc, 2, Immediate),
    op(0x65, Adc, 3, ZeroPage),
    op(0x75, Adc, 4, ZeroPageX),
    op(0x6D, Adc, 4, Absolute),
    op(0x7D, Adc, 4, AbsoluteX),
    op(0x79, Adc, 4, AbsoluteY),
    op(0x61, Adc, 6, IndirectX),
    op(0x71, Adc, 5, IndirectY),
    // SBC
    op(0xE9, Sbc, 2, Immediate),
    op(0xE5, Sbc, 3, ZeroPage),
    op(0xF5, Sbc, 4, ZeroPageX),
    op(0xED, Sbc, 4, Absolute),
    op(0xFD, Sbc, 4, AbsoluteX),
    op(0xF9, Sbc, 4, AbsoluteY),
    op(0xE1, Sbc, 6, IndirectX),
    op(0xF1, Sbc, 5, IndirectY),
    // AND
    op(0x29, And, 2, Immediate),
    op(0x25, And, 3, ZeroPage),
    op(0x35, And, 4, ZeroPageX),
    op(0x2D, And, 4, Absolute),
    op(0x3D, And, 4, AbsoluteX),
    op(0x39, And, 4, AbsoluteY),
    op(0x21, And, 6, IndirectX),
    op(0x31, And, 5, IndirectY),
    // ORA
    op(0x09, Ora, 2, Immediate),
    op(0x05, Ora, 3, ZeroPage),
    op(0x15, Ora, 4, ZeroPageX),
    op(0x0D, Ora, 4, Absolute),
    op(0x1D, Ora, 4, AbsoluteX),
    op(0x19, Ora, 4, AbsoluteY),
    op(0x01, Ora, 6, IndirectX),
    op(0x11, Ora, 5, IndirectY),
    // EOR
    op(0x49, Eor, 2, Immediate),
    op(0x45, Eor, 3, ZeroPage),
    op(0x55, Eor, 4, ZeroPageX),
    op(0x4D, Eor, 4, Absolute),
    op(0x5D, Eor, 4, AbsoluteX),
    op(0x59, Eor, 4, AbsoluteY),
    op(0x41, Eor, 6, IndirectX),
    op(0x51, Eor, 5, IndirectY),
    // CMP
    op(0xC9, Cmp, 2, Immediate),
    op(0xC5, Cmp, 3, ZeroPage),
    op(0xD5, Cmp, 4, ZeroPageX),
    op(0xCD, Cmp, 4, Absolute),
    op(0xDD, Cmp, 4, AbsoluteX),
    op(0xD9, Cmp, 4, AbsoluteY),
    op(0xC1, Cmp, 6, IndirectX),
    op(0xD1, Cmp, 5, IndirectY),
    // CPX / CPY
    op(0xE0, Cpx, 2, Immediate),
    op(0xE4, Cpx, 3, ZeroPage),
    op(0xEC, Cpx, 4, Absolute),
    op(0xC0, Cpy, 2, Immediate),
    op(0xC4, Cpy, 3, ZeroPage),
    op(0xCC, Cpy, 4, Absolute),
    // BIT
    op(0x24, Bit, 3, ZeroPage),
    op(0x2C, Bit, 4, Absolute),
    // ASL
    op(0x0A, Asl, 2, Accumulator),
    op(0x06, Asl, 5, ZeroPage),
    op(0x16, Asl, 6, ZeroPageX),
    op(0x0E, Asl, 6, Absolute),
    op(0x1E, Asl, 7, AbsoluteX),
    // LSR
    op(0x4A, Lsr, 2, Accumulator),
    op(0x46, Lsr, 5, ZeroPage),
    op(0x56, Lsr, 6, ZeroPageX),
    op(0x4E, Lsr, 6, Absolute),
    op(0x5E, Lsr, 7, AbsoluteX),
    // ROL
    op(0x2A, Rol, 2, Accumulator),
    op(0x26, Rol, 5, ZeroPage),
    op(0x36, Rol, 6, ZeroPageX),
    op(0x2E, Rol, 6, Absolute),
    op(0x3E, Rol, 7, AbsoluteX),
    // ROR
    op(0x6A, Ror, 2, Accumulator),
    op(0x66, Ror, 5, ZeroPage),
    op(0x76, Ror, 6, ZeroPageX),
    op(0x6E, Ror, 6, Absolute),
    op(0x7E, Ror, 7, AbsoluteX),
    // Stack
    op(0x48, Pha, 3, Implied),
    op(0x68, Pla, 4, Implied),
    op(0x08, Php, 3, Implied),
    op(0x28, Plp, 4, Implied),
    // Branches
    op(0x10, Bpl, 2, Relative),
    op(0x30, Bmi, 2, Relative),
    op(0x50, Bvc, 2, Relative),
    op(0x70, Bvs, 2, Relative),
    op(0x90, Bcc, 2, Relative),
    op(0xB0, Bcs, 2, Relative),
    op(0xD0, Bne, 2, Relative),
    op(0xF0, Beq, 2, Relative),
    // Control flow
    op(0x4C, Jmp, 3, Absolute),
    op(0x6C, Jmp, 5, Indirect),
    op(0x20, Jsr, 6, Absolute),
    op(0x60, Rts, 6, Implied),
    op(0x00, Brk, 7, Implied),
    op(0xEA, Nop, 2, Implied),
    // Flags
    op(0x18, Clc, 2, Implied),
    op(0x38, Sec, 2, Implied),
    op(0x58, Cli, 2, Implied),
    op(0x78, Sei, 2, Implied),
    op(0xD8, Cld, 2, Implied),
    op(0xF8, Sed, 2, Implied),
    op(0xB8, Clv, 2, Implied),
];
