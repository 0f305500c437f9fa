//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! Only the named flag changes.

use super::{require_implied, Flow};
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, StatusFlags, CPU};

/// Executes one of the seven flag instructions.
pub(crate) fn execute_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mnemonic: Mnemonic,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let (flag, value) = match mnemonic {
        Mnemonic::Clc => (StatusFlags::CARRY, false),
        Mnemonic::Sec => (StatusFlags::CARRY, true),
        Mnemonic::Cli => (StatusFlags::INTERRUPT_DISABLE, false),
        Mnemonic::Sei => (StatusFlags::INTERRUPT_DISABLE, true),
        Mnemonic::Cld => (StatusFlags::DECIMAL_MODE, false),
        Mnemonic::Sed => (StatusFlags::DECIMAL_MODE, true),
        Mnemonic::Clv => (StatusFlags::OVERFLOW, false),
        _ => return Err(ExecutionError::InvalidAddressingMode(mode, mnemonic)),
    };

    require_implied(mode, mnemonic)?;

    cpu.regs.assign_flag(flag, value);

    Ok(Flow::Next)
}
