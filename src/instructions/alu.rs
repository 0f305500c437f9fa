//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND: Logical AND
//! - ORA: Logical Inclusive OR
//! - EOR: Exclusive OR
//! - CMP, CPX, CPY: Compare Register with Memory
//! - BIT: Bit Test
//!
//! Arithmetic is always binary. The Decimal flag can be set and cleared but does not
//! switch ADC/SBC into BCD.

use super::Flow;
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, StatusFlags, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Overflow (V): Set if both operands share a sign and the result's sign differs
/// - Zero (Z), Negative (N): From the 8-bit result
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Adc)?;
    add_with_carry(cpu, value);
    Ok(Flow::Next)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. Carry ends up set when no borrow occurred.
///
/// On the 6502 this is exactly ADC of the operand's one's complement, so both share
/// the same carry and overflow logic.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Sbc)?;
    add_with_carry(cpu, !value);
    Ok(Flow::Next)
}

fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.is_flag_set(StatusFlags::CARRY) as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    // V = (A^result) & (M^result) & 0x80
    let overflow = (a ^ result) & (value ^ result) & 0x80 != 0;

    cpu.regs.assign_flag(StatusFlags::CARRY, result16 > 0xFF);
    cpu.regs.assign_flag(StatusFlags::OVERFLOW, overflow);
    cpu.regs.update_zero_negative(result);
    cpu.regs.a = result;
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::And)?;

    cpu.regs.a &= value;
    cpu.regs.update_zero_negative(cpu.regs.a);

    Ok(Flow::Next)
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Ora)?;

    cpu.regs.a |= value;
    cpu.regs.update_zero_negative(cpu.regs.a);

    Ok(Flow::Next)
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Eor)?;

    cpu.regs.a ^= value;
    cpu.regs.update_zero_negative(cpu.regs.a);

    Ok(Flow::Next)
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Cmp)?;
    let register = cpu.regs.a;
    compare(cpu, register, value);
    Ok(Flow::Next)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Cpx)?;
    let register = cpu.regs.x;
    compare(cpu, register, value);
    Ok(Flow::Next)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Cpy)?;
    let register = cpu.regs.y;
    compare(cpu, register, value);
    Ok(Flow::Next)
}

/// C = register >= value; Z and N from `register - value`. The register is unchanged.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);

    cpu.regs.assign_flag(StatusFlags::CARRY, register >= value);
    cpu.regs.update_zero_negative(result);
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M = 0
/// - Overflow (V): Bit 6 of M
/// - Negative (N): Bit 7 of M
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<Flow, ExecutionError> {
    let value = cpu.operand_value(mode, Mnemonic::Bit)?;

    cpu.regs.update_zero(cpu.regs.a & value);
    cpu.regs.assign_flag(StatusFlags::OVERFLOW, value & 0x40 != 0);
    cpu.regs.update_negative(value);

    Ok(Flow::Next)
}
