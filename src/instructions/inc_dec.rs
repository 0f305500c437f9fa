//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC: Increment Memory
//! - DEC: Decrement Memory
//! - INX, INY: Increment X / Y Register
//! - DEX, DEY: Decrement X / Y Register
//!
//! All wrap at 8 bits and update Z and N from the new value of their own target.

use super::{require_implied, Flow};
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, CPU};

/// Executes the INC (Increment Memory) instruction.
///
/// Adds one to the value held at a specified memory location,
/// setting the zero and negative flags as appropriate.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.memory_address(mode, Mnemonic::Inc)?;
    let result = cpu.memory.read(addr).wrapping_add(1);

    cpu.memory.write(addr, result);
    cpu.regs.update_zero_negative(result);

    Ok(Flow::Next)
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Subtracts one from the value held at a specified memory location,
/// setting the zero and negative flags as appropriate.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.memory_address(mode, Mnemonic::Dec)?;
    let result = cpu.memory.read(addr).wrapping_sub(1);

    cpu.memory.write(addr, result);
    cpu.regs.update_zero_negative(result);

    Ok(Flow::Next)
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Inx)?;

    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.update_zero_negative(cpu.regs.x);

    Ok(Flow::Next)
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Iny)?;

    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.update_zero_negative(cpu.regs.y);

    Ok(Flow::Next)
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Dex)?;

    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.update_zero_negative(cpu.regs.x);

    Ok(Flow::Next)
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Dey)?;

    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.update_zero_negative(cpu.regs.y);

    Ok(Flow::Next)
}
