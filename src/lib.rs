//! # 6502 Execution Core
//!
//! The instruction-execution core of an NMOS 6502-class CPU: it fetches bytes from a
//! flat 64KB memory image, decodes them through an opcode table, resolves operand
//! addresses, mutates the register file and advances the program counter.
//!
//! Cartridge loaders, video/audio, mappers and interrupt lines live outside this crate.
//! From the core's point of view they are "whatever writes bytes into memory before
//! `reset()` is called".
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502_core::{ExecutionState, FlatMemory, CPU};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // LDA #$05; TAX; BRK
//! cpu.load(&[0xA9, 0x05, 0xAA, 0x00]);
//! cpu.reset();
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.a(), 0x05);
//! assert_eq!(cpu.x(), 0x05);
//! assert_eq!(cpu.state(), ExecutionState::Halted);
//! ```
//!
//! ## Modules
//!
//! - `memory` - MemoryBus trait and the flat 64KB store
//! - `registers` - Register file and status flag bitset
//! - `opcodes` - Opcode descriptors and the opcode table
//! - `addressing` - Addressing modes and effective address resolution
//! - `stack` - Push/pop over the fixed stack page
//! - `cpu` - Fetch-decode-execute engine

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod stack;

#[cfg(feature = "wasm")]
pub mod wasm;

// Instruction handlers (not part of public API)
mod instructions;

pub use addressing::{resolve, AddressingMode};
pub use cpu::{ExecutionState, CPU};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeDescriptor, OpcodeTable};
pub use registers::{Registers, StatusFlags};
pub use stack::{STACK_BASE, STACK_RESET};

/// Address programs are copied to by [`CPU::load`].
pub const LOAD_ADDRESS: u16 = 0x8000;

/// Location of the little-endian reset vector read by [`CPU::reset`].
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Errors that stop execution.
///
/// Both kinds are fatal to the current `run()`: the engine moves to
/// [`ExecutionState::Faulted`] and keeps returning the same error until reset.
/// Address arithmetic never fails, it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The opcode table has no entry for the fetched byte.
    ///
    /// Carries the opcode byte and the address it was fetched from.
    #[error("opcode 0x{0:02X} at ${1:04X} is not implemented")]
    UnimplementedOpcode(u8, u16),

    /// A handler was dispatched with an addressing mode it cannot service,
    /// e.g. a store with Immediate or Accumulator addressing.
    #[error("{1} does not support {0:?} addressing")]
    InvalidAddressingMode(AddressingMode, Mnemonic),
}
