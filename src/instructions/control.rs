//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Break (halts the machine)
//! - NOP: No Operation
//!
//! BRK stops the machine here. Pushing PC/status and vectoring through $FFFE is
//! interrupt behaviour, which this core does not model.

use super::{require_implied, Flow};
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// Note: The Indirect addressing mode has a hardware bug in the original 6502:
/// If the low byte of the indirect address is 0xFF, the high byte is read from
/// the same page (wraps within page) instead of crossing to the next page.
/// For example, JMP ($10FF) reads from $10FF and $1000 (not $1100).
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    match mode {
        AddressingMode::Absolute | AddressingMode::Indirect => cpu
            .effective_address(mode)
            .map(Flow::Jump)
            .ok_or(ExecutionError::InvalidAddressingMode(mode, Mnemonic::Jmp)),
        _ => Err(ExecutionError::InvalidAddressingMode(mode, Mnemonic::Jmp)),
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (PC + 2), high byte
/// first, then jumps to the absolute target. RTS adds the missing 1 back.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    if mode != AddressingMode::Absolute {
        return Err(ExecutionError::InvalidAddressingMode(mode, Mnemonic::Jsr));
    }
    let target = cpu
        .effective_address(mode)
        .ok_or(ExecutionError::InvalidAddressingMode(mode, Mnemonic::Jsr))?;

    let return_address = cpu.regs.pc.wrapping_add(2);
    cpu.stack_push_word(return_address);

    Ok(Flow::Jump(target))
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the return address pushed by JSR and continues at the byte after it.
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Rts)?;

    let return_address = cpu.stack_pop_word();

    Ok(Flow::Jump(return_address.wrapping_add(1)))
}

/// Executes the BRK instruction.
///
/// BRK has no effect of its own. It is a halt-class mnemonic, so the engine stops
/// the machine with PC left on the BRK opcode once this returns.
pub(crate) fn execute_brk<M: MemoryBus>(
    _cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Brk)?;
    Ok(Flow::Next)
}

/// Executes the NOP instruction.
pub(crate) fn execute_nop<M: MemoryBus>(
    _cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    require_implied(mode, Mnemonic::Nop)?;
    Ok(Flow::Next)
}
