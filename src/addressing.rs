//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver that turns
//! a mode plus the current machine state into an effective address.
//!
//! Two wrap domains are in play and are kept apart on purpose:
//! - zero-page arithmetic (ZeroPageX/Y, the pointer fetches of IndirectX/Y) wraps mod 256
//! - absolute arithmetic (AbsoluteX/Y, IndirectY's final add, Relative) wraps mod 65536

use crate::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wraps within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wraps within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Accumulator | AddressingMode::Implied => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
            _ => 1,
        }
    }

    /// Instruction length in bytes, opcode included.
    pub const fn instruction_length(self) -> u8 {
        self.operand_bytes() + 1
    }

    /// True for modes that name no memory location (Accumulator, Implied).
    pub const fn is_register_only(self) -> bool {
        matches!(self, AddressingMode::Accumulator | AddressingMode::Implied)
    }
}

/// Resolves the effective address for `mode`.
///
/// `operand` is the address of the first operand byte, i.e. the byte immediately after
/// the opcode. Returns `None` for Accumulator and Implied, which have no memory operand.
///
/// - Immediate resolves to `operand` itself.
/// - Relative resolves to the branch target, measured from the address following the
///   whole two-byte instruction.
/// - Indirect reproduces the NMOS page-wrap: a pointer at `$xxFF` takes its high byte
///   from `$xx00`, not from the next page.
///
/// # Examples
///
/// ```
/// use mos6502_core::{resolve, AddressingMode, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x8001, 0xFF); // zero page operand
///
/// // $FF,X with X = 2 stays in the zero page
/// assert_eq!(resolve(&mem, AddressingMode::ZeroPageX, 0x8001, 2, 0), Some(0x0001));
/// assert_eq!(resolve(&mem, AddressingMode::Implied, 0x8001, 0, 0), None);
/// ```
pub fn resolve<M: MemoryBus + ?Sized>(
    memory: &M,
    mode: AddressingMode,
    operand: u16,
    x: u8,
    y: u8,
) -> Option<u16> {
    let addr = match mode {
        AddressingMode::Accumulator | AddressingMode::Implied => return None,

        AddressingMode::Immediate => operand,

        AddressingMode::ZeroPage => memory.read(operand) as u16,

        AddressingMode::ZeroPageX => memory.read(operand).wrapping_add(x) as u16,

        AddressingMode::ZeroPageY => memory.read(operand).wrapping_add(y) as u16,

        AddressingMode::Absolute => memory.read_word(operand),

        AddressingMode::AbsoluteX => memory.read_word(operand).wrapping_add(x as u16),

        AddressingMode::AbsoluteY => memory.read_word(operand).wrapping_add(y as u16),

        AddressingMode::IndirectX => {
            let ptr = memory.read(operand).wrapping_add(x);
            read_zero_page_word(memory, ptr)
        }

        AddressingMode::IndirectY => {
            let ptr = memory.read(operand);
            read_zero_page_word(memory, ptr).wrapping_add(y as u16)
        }

        AddressingMode::Indirect => {
            let ptr = memory.read_word(operand);
            let lo = memory.read(ptr) as u16;
            // High byte comes from the same page when the pointer sits at $xxFF
            let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
            let hi = memory.read(hi_addr) as u16;
            (hi << 8) | lo
        }

        AddressingMode::Relative => {
            let offset = memory.read(operand) as i8;
            operand.wrapping_add(1).wrapping_add_signed(offset as i16)
        }
    };

    Some(addr)
}

/// Reads a pointer out of the zero page; the high byte fetch wraps from $FF to $00.
fn read_zero_page_word<M: MemoryBus + ?Sized>(memory: &M, ptr: u8) -> u16 {
    let lo = memory.read(ptr as u16) as u16;
    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}
