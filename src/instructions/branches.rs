//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BPL / BMI: Branch on Negative clear / set
//! - BVC / BVS: Branch on Overflow clear / set
//! - BCC / BCS: Branch on Carry clear / set
//! - BNE / BEQ: Branch on Zero clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset measured
//! from the address after the two-byte instruction. A branch not taken falls through
//! to the engine's normal advance. No flags are affected.

use super::Flow;
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, StatusFlags, CPU};

/// Executes any of the eight conditional branches.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mnemonic: Mnemonic,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let (flag, wanted) = match mnemonic {
        Mnemonic::Bpl => (StatusFlags::NEGATIVE, false),
        Mnemonic::Bmi => (StatusFlags::NEGATIVE, true),
        Mnemonic::Bvc => (StatusFlags::OVERFLOW, false),
        Mnemonic::Bvs => (StatusFlags::OVERFLOW, true),
        Mnemonic::Bcc => (StatusFlags::CARRY, false),
        Mnemonic::Bcs => (StatusFlags::CARRY, true),
        Mnemonic::Bne => (StatusFlags::ZERO, false),
        Mnemonic::Beq => (StatusFlags::ZERO, true),
        _ => return Err(ExecutionError::InvalidAddressingMode(mode, mnemonic)),
    };

    if mode != AddressingMode::Relative {
        return Err(ExecutionError::InvalidAddressingMode(mode, mnemonic));
    }

    if cpu.regs.is_flag_set(flag) != wanted {
        return Ok(Flow::Next);
    }

    match cpu.effective_address(mode) {
        Some(target) => Ok(Flow::Jump(target)),
        None => Err(ExecutionError::InvalidAddressingMode(mode, mnemonic)),
    }
}
