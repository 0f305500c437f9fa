//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Accumulator mode targets A; every other mode reads, modifies and writes back the
//! byte at the effective address. The bit shifted out becomes the new carry.

use super::Flow;
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, StatusFlags, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    modify(cpu, mode, Mnemonic::Asl, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    modify(cpu, mode, Mnemonic::Lsr, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry fills bit 0; the old bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    modify(cpu, mode, Mnemonic::Rol, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry fills bit 7; the old bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    modify(cpu, mode, Mnemonic::Ror, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}

/// Applies `op` to A or to memory. `op` gets the operand and the current carry and
/// returns the result and the outgoing bit.
fn modify<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    mnemonic: Mnemonic,
    op: impl FnOnce(u8, bool) -> (u8, bool),
) -> Result<Flow, ExecutionError> {
    let carry_in = cpu.regs.is_flag_set(StatusFlags::CARRY);

    let result = if mode == AddressingMode::Accumulator {
        let (result, carry_out) = op(cpu.regs.a, carry_in);
        cpu.regs.a = result;
        cpu.regs.assign_flag(StatusFlags::CARRY, carry_out);
        result
    } else {
        let addr = cpu.memory_address(mode, mnemonic)?;
        let (result, carry_out) = op(cpu.memory.read(addr), carry_in);
        cpu.memory.write(addr, result);
        cpu.regs.assign_flag(StatusFlags::CARRY, carry_out);
        result
    };

    cpu.regs.update_zero_negative(result);

    Ok(Flow::Next)
}
