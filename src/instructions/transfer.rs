//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer except TXS updates Z and N from the destination register.

use super::{require_implied, Flow};
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Tax)?;

    cpu.regs.x = cpu.regs.a;
    cpu.regs.update_zero_negative(cpu.regs.x);

    Ok(Flow::Next)
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Tay)?;

    cpu.regs.y = cpu.regs.a;
    cpu.regs.update_zero_negative(cpu.regs.y);

    Ok(Flow::Next)
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Txa)?;

    cpu.regs.a = cpu.regs.x;
    cpu.regs.update_zero_negative(cpu.regs.a);

    Ok(Flow::Next)
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Tya)?;

    cpu.regs.a = cpu.regs.y;
    cpu.regs.update_zero_negative(cpu.regs.a);

    Ok(Flow::Next)
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
///
/// Copies the current contents of the stack pointer into the X register
/// and sets the zero and negative flags as appropriate.
pub(crate) fn execute_tsx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Tsx)?;

    cpu.regs.x = cpu.regs.sp;
    cpu.regs.update_zero_negative(cpu.regs.x);

    Ok(Flow::Next)
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The stack pointer is not flag-observed: no flags are affected.
pub(crate) fn execute_txs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Txs)?;

    cpu.regs.sp = cpu.regs.x;

    Ok(Flow::Next)
}
