//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register

use super::Flow;
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Lda)?;

    cpu.regs.a = value;
    cpu.regs.update_zero_negative(value);

    Ok(Flow::Next)
}

/// Executes the LDX (Load X Register) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if X = 0
/// - Negative (N): Set if bit 7 of X is set
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Ldx)?;

    cpu.regs.x = value;
    cpu.regs.update_zero_negative(value);

    Ok(Flow::Next)
}

/// Executes the LDY (Load Y Register) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if Y = 0
/// - Negative (N): Set if bit 7 of Y is set
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Ldy)?;

    cpu.regs.y = value;
    cpu.regs.update_zero_negative(value);

    Ok(Flow::Next)
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the contents of the accumulator into memory at the address specified
/// by the addressing mode. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.memory_address(mode, Mnemonic::Sta)?;
    cpu.memory.write(addr, cpu.regs.a);
    Ok(Flow::Next)
}

/// Executes the STX (Store X Register) instruction. No flags affected.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.memory_address(mode, Mnemonic::Stx)?;
    cpu.memory.write(addr, cpu.regs.x);
    Ok(Flow::Next)
}

/// Executes the STY (Store Y Register) instruction. No flags affected.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let addr = cpu.memory_address(mode, Mnemonic::Sty)?;
    cpu.memory.write(addr, cpu.regs.y);
    Ok(Flow::Next)
}
