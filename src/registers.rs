//! # Register File and Status Flags
//!
//! The 6502 programmer-visible state: accumulator (A), index registers (X, Y), stack
//! pointer (SP), the 16-bit program counter (PC) and the packed status register P.
//!
//! ## Status Register Layout (NV-BDIZC)
//!
//! | Bit | Flag |
//! |-----|------|
//! | 7 | Negative |
//! | 6 | Overflow |
//! | 5 | Unused (forced to 1 in pushed copies) |
//! | 4 | Break (only meaningful in pushed copies) |
//! | 3 | Decimal mode |
//! | 2 | Interrupt disable |
//! | 1 | Zero |
//! | 0 | Carry |

use bitflags::bitflags;

bitflags! {
    /// Packed processor status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatusFlags: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL_MODE = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// 6502 register file.
///
/// `pc` always points at the next opcode to fetch between instructions.
///
/// # Examples
///
/// ```
/// use mos6502_core::{Registers, StatusFlags};
///
/// let mut regs = Registers::default();
/// regs.update_zero_negative(0x80);
///
/// assert!(regs.is_flag_set(StatusFlags::NEGATIVE));
/// assert!(!regs.is_flag_set(StatusFlags::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Status register
    pub status: StatusFlags,
}

impl Registers {
    /// ORs `flag` into the status register.
    pub fn set_flag(&mut self, flag: StatusFlags) {
        self.status.insert(flag);
    }

    /// Clears `flag` in the status register.
    pub fn clear_flag(&mut self, flag: StatusFlags) {
        self.status.remove(flag);
    }

    /// Returns true if every bit of `flag` is set.
    pub fn is_flag_set(&self, flag: StatusFlags) -> bool {
        self.status.contains(flag)
    }

    /// Sets or clears `flag` according to `value`.
    pub fn assign_flag(&mut self, flag: StatusFlags, value: bool) {
        self.status.set(flag, value);
    }

    /// Sets Zero iff `value == 0`.
    pub fn update_zero(&mut self, value: u8) {
        self.assign_flag(StatusFlags::ZERO, value == 0);
    }

    /// Sets Negative iff bit 7 of `value` is set.
    pub fn update_negative(&mut self, value: u8) {
        self.assign_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// Zero and Negative from the same result, as every load, transfer,
    /// increment/decrement, logical and shift instruction does.
    pub fn update_zero_negative(&mut self, value: u8) {
        self.update_zero(value);
        self.update_negative(value);
    }
}
