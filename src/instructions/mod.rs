//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all supported instructions, organized by
//! category. Each instruction is a standalone function that takes a mutable reference
//! to the CPU and the addressing mode from its descriptor, and returns a [`Flow`]
//! telling the engine what to do with PC.
//!
//! Handlers validate their addressing mode before touching any state, so a rejected
//! instruction leaves the machine exactly as it found it.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{resolve, AddressingMode, ExecutionError, MemoryBus, Mnemonic, OpcodeDescriptor, CPU};

/// What the engine does with PC after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Advance PC by the instruction length.
    Next,
    /// The handler redirected control flow; PC becomes this address as-is.
    Jump(u16),
    /// Stop the machine. The engine substitutes this for halt-class mnemonics.
    Halt,
}

/// Runs the handler bound to `desc.mnemonic()`.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    desc: &OpcodeDescriptor,
) -> Result<Flow, ExecutionError> {
    let mode = desc.addressing_mode();

    match desc.mnemonic() {
        Mnemonic::Lda => load_store::execute_lda(cpu, mode),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, mode),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, mode),
        Mnemonic::Sta => load_store::execute_sta(cpu, mode),
        Mnemonic::Stx => load_store::execute_stx(cpu, mode),
        Mnemonic::Sty => load_store::execute_sty(cpu, mode),

        Mnemonic::Tax => transfer::execute_tax(cpu, mode),
        Mnemonic::Tay => transfer::execute_tay(cpu, mode),
        Mnemonic::Txa => transfer::execute_txa(cpu, mode),
        Mnemonic::Tya => transfer::execute_tya(cpu, mode),
        Mnemonic::Tsx => transfer::execute_tsx(cpu, mode),
        Mnemonic::Txs => transfer::execute_txs(cpu, mode),

        Mnemonic::Inc => inc_dec::execute_inc(cpu, mode),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, mode),
        Mnemonic::Inx => inc_dec::execute_inx(cpu, mode),
        Mnemonic::Iny => inc_dec::execute_iny(cpu, mode),
        Mnemonic::Dex => inc_dec::execute_dex(cpu, mode),
        Mnemonic::Dey => inc_dec::execute_dey(cpu, mode),

        Mnemonic::Adc => alu::execute_adc(cpu, mode),
        Mnemonic::Sbc => alu::execute_sbc(cpu, mode),
        Mnemonic::And => alu::execute_and(cpu, mode),
        Mnemonic::Ora => alu::execute_ora(cpu, mode),
        Mnemonic::Eor => alu::execute_eor(cpu, mode),
        Mnemonic::Cmp => alu::execute_cmp(cpu, mode),
        Mnemonic::Cpx => alu::execute_cpx(cpu, mode),
        Mnemonic::Cpy => alu::execute_cpy(cpu, mode),
        Mnemonic::Bit => alu::execute_bit(cpu, mode),

        Mnemonic::Asl => shifts::execute_asl(cpu, mode),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, mode),
        Mnemonic::Rol => shifts::execute_rol(cpu, mode),
        Mnemonic::Ror => shifts::execute_ror(cpu, mode),

        Mnemonic::Pha => stack::execute_pha(cpu, mode),
        Mnemonic::Pla => stack::execute_pla(cpu, mode),
        Mnemonic::Php => stack::execute_php(cpu, mode),
        Mnemonic::Plp => stack::execute_plp(cpu, mode),

        Mnemonic::Bpl
        | Mnemonic::Bmi
        | Mnemonic::Bvc
        | Mnemonic::Bvs
        | Mnemonic::Bcc
        | Mnemonic::Bcs
        | Mnemonic::Bne
        | Mnemonic::Beq => branches::execute_branch(cpu, desc.mnemonic(), mode),

        Mnemonic::Jmp => control::execute_jmp(cpu, mode),
        Mnemonic::Jsr => control::execute_jsr(cpu, mode),
        Mnemonic::Rts => control::execute_rts(cpu, mode),
        Mnemonic::Brk => control::execute_brk(cpu, mode),
        Mnemonic::Nop => control::execute_nop(cpu, mode),

        Mnemonic::Clc
        | Mnemonic::Sec
        | Mnemonic::Cli
        | Mnemonic::Sei
        | Mnemonic::Cld
        | Mnemonic::Sed
        | Mnemonic::Clv => flags::execute_flag(cpu, desc.mnemonic(), mode),
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Address of the data operand for a reading instruction.
    ///
    /// Accepts Immediate and the memory modes. Accumulator, Implied, Relative and
    /// Indirect are not data operands.
    pub(crate) fn operand_address(
        &self,
        mode: AddressingMode,
        mnemonic: Mnemonic,
    ) -> Result<u16, ExecutionError> {
        match mode {
            AddressingMode::Accumulator
            | AddressingMode::Implied
            | AddressingMode::Relative
            | AddressingMode::Indirect => {
                Err(ExecutionError::InvalidAddressingMode(mode, mnemonic))
            }
            _ => resolve(
                &self.memory,
                mode,
                self.regs.pc.wrapping_add(1),
                self.regs.x,
                self.regs.y,
            )
            .ok_or(ExecutionError::InvalidAddressingMode(mode, mnemonic)),
        }
    }

    /// Address of a memory location an instruction writes to.
    ///
    /// Like [`CPU::operand_address`] but also rejects Immediate, which names no
    /// writable location.
    pub(crate) fn memory_address(
        &self,
        mode: AddressingMode,
        mnemonic: Mnemonic,
    ) -> Result<u16, ExecutionError> {
        if mode == AddressingMode::Immediate {
            return Err(ExecutionError::InvalidAddressingMode(mode, mnemonic));
        }
        self.operand_address(mode, mnemonic)
    }

    /// Reads the data operand for a reading instruction.
    pub(crate) fn operand_value(
        &self,
        mode: AddressingMode,
        mnemonic: Mnemonic,
    ) -> Result<u8, ExecutionError> {
        let addr = self.operand_address(mode, mnemonic)?;
        Ok(self.memory.read(addr))
    }
}

/// Rejects every mode but Implied, for single-byte register and stack instructions.
pub(crate) fn require_implied(
    mode: AddressingMode,
    mnemonic: Mnemonic,
) -> Result<(), ExecutionError> {
    if mode == AddressingMode::Implied {
        Ok(())
    } else {
        Err(ExecutionError::InvalidAddressingMode(mode, mnemonic))
    }
}
