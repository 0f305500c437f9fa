//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PLA: Pull Accumulator from Stack
//! - PHP: Push Processor Status on Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The pushed copy of the status register always has Break and Unused set; the live
//! register is not modified by PHP. PLP commits the pulled byte to the live register
//! with those two bits cleared.

use super::{require_implied, Flow};
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, StatusFlags, CPU};

/// Executes the PHA (Push Accumulator) instruction. Flags affected: None.
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Pha)?;

    cpu.stack_push(cpu.regs.a);

    Ok(Flow::Next)
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Updates Z and N from the pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Pla)?;

    let value = cpu.stack_pop();
    cpu.regs.a = value;
    cpu.regs.update_zero_negative(value);

    Ok(Flow::Next)
}

/// Executes the PHP (Push Processor Status) instruction.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Php)?;

    let pushed = cpu.regs.status | StatusFlags::BREAK | StatusFlags::UNUSED;
    cpu.stack_push(pushed.bits());

    Ok(Flow::Next)
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Plp)?;

    let mut pulled = StatusFlags::from_bits_retain(cpu.stack_pop());
    pulled.remove(StatusFlags::BREAK | StatusFlags::UNUSED);
    cpu.regs.status = pulled;

    Ok(Flow::Next)
}
