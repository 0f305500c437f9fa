//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the processor state and the
//! fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: A, X, Y, SP, the 16-bit PC and the status byte (see [`Registers`])
//! - **Opcode table**: owned, read-only decode table
//! - **Execution state**: Reset, Fetching, Dispatching, Halted or Faulted
//! - **Cycle counter**: sum of executed instructions' base cycles (descriptive only)
//!
//! ## Execution Model
//!
//! - `step()`: fetch, dispatch and advance one instruction
//! - `run()`: step until a halt instruction or a fault
//! - `run_for_cycles()`: step until a cycle budget is spent, or halt/fault
//!
//! A handler either redirects control flow (jumps, taken branches, JSR/RTS) or lets
//! the engine advance PC by the descriptor's length. Never both.

use crate::instructions::{self, Flow};
use crate::{
    resolve, AddressingMode, ExecutionError, MemoryBus, OpcodeTable, Registers, StatusFlags,
    LOAD_ADDRESS, RESET_VECTOR, STACK_RESET,
};

/// Engine state machine.
///
/// `Reset` is the state right after `reset()`. `Fetching` means ready for the next
/// fetch. `Dispatching` only exists while a handler runs. `Halted` and `Faulted` are
/// terminal until the next `reset()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionState {
    Reset,
    Fetching,
    Dispatching,
    Halted,
    Faulted,
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use mos6502_core::{ExecutionState, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), 0x00);
/// assert_eq!(cpu.state(), ExecutionState::Reset);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Register file
    pub(crate) regs: Registers,

    /// Total base cycles of executed instructions
    pub(crate) cycles: u64,

    /// Where the engine is in its state machine
    pub(crate) state: ExecutionState,

    /// Error that moved the engine to Faulted
    pub(crate) fault: Option<ExecutionError>,

    /// Decode table
    pub(crate) opcodes: OpcodeTable,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU using the standard opcode table and resets it.
    ///
    /// PC is taken from the reset vector at 0xFFFC/0xFFFD, so the vector should already
    /// be in `memory` (or call [`CPU::load`] and [`CPU::reset`] afterwards).
    pub fn new(memory: M) -> Self {
        Self::with_opcode_table(memory, OpcodeTable::standard())
    }

    /// Creates a CPU that decodes through `opcodes` instead of the standard table.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502_core::{ExecutionError, FlatMemory, OpcodeTable, CPU};
    ///
    /// let mut cpu = CPU::with_opcode_table(FlatMemory::new(), OpcodeTable::empty());
    /// cpu.load(&[0xEA]);
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.step(), Err(ExecutionError::UnimplementedOpcode(0xEA, 0x8000)));
    /// ```
    pub fn with_opcode_table(memory: M, opcodes: OpcodeTable) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            cycles: 0,
            state: ExecutionState::Reset,
            fault: None,
            opcodes,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Reinitializes the register file from the reset vector.
    ///
    /// - PC is loaded from 0xFFFC/0xFFFD (little-endian)
    /// - SP is set to 0xFF
    /// - A, X, Y and the status register are zeroed
    /// - The cycle counter and any fault are cleared
    ///
    /// Memory is left untouched.
    pub fn reset(&mut self) {
        let pc = self.memory.read_word(RESET_VECTOR);

        self.regs = Registers {
            a: 0,
            x: 0,
            y: 0,
            sp: STACK_RESET,
            pc,
            status: StatusFlags::empty(),
        };
        self.cycles = 0;
        self.fault = None;
        self.state = ExecutionState::Reset;

        log::debug!("reset: PC=${:04X}", pc);
    }

    /// Copies `program` to [`LOAD_ADDRESS`] and points the reset vector at it.
    ///
    /// Registers are not touched; call [`CPU::reset`] to start from the program.
    pub fn load(&mut self, program: &[u8]) {
        self.load_at(LOAD_ADDRESS, program);
    }

    /// Copies `program` to `start` and points the reset vector at it.
    ///
    /// The vector is written last, so an image long enough to reach 0xFFFC loses
    /// those two bytes to the vector.
    pub fn load_at(&mut self, start: u16, program: &[u8]) {
        self.memory.load(start, program);
        self.memory.write_word(RESET_VECTOR, start);

        log::debug!("loaded {} bytes at ${:04X}", program.len(), start);
    }

    /// Loads `program`, resets and runs until halt.
    pub fn load_and_run(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        self.load(program);
        self.reset();
        self.run()
    }

    /// Executes one instruction.
    ///
    /// 1. Fetch the opcode at PC and look it up in the opcode table
    /// 2. Dispatch to the handler for its mnemonic
    /// 3. Advance PC by the instruction length, unless the handler redirected it
    ///
    /// A halted CPU ignores the call. A faulted CPU returns its fault again.
    ///
    /// # Errors
    ///
    /// - `UnimplementedOpcode(opcode, address)` if the table has no entry
    /// - `InvalidAddressingMode(mode, mnemonic)` if the handler cannot service the mode
    ///
    /// Either way nothing about the machine changes except its state, which becomes
    /// `Faulted`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502_core::{FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load(&[0xA9, 0x42]); // LDA #$42
    /// cpu.reset();
    ///
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(cpu.pc(), 0x8002);
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        if self.state == ExecutionState::Halted {
            return Ok(());
        }

        // Fetch
        self.state = ExecutionState::Fetching;
        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);

        let desc = match self.opcodes.get(opcode) {
            Some(desc) => *desc,
            None => {
                log::warn!("unimplemented opcode 0x{:02X} at ${:04X}", opcode, pc);
                return Err(self.fail(ExecutionError::UnimplementedOpcode(opcode, pc)));
            }
        };

        // Dispatch
        self.state = ExecutionState::Dispatching;
        log::trace!(
            "${:04X}: {:02X} {} {:?}",
            pc,
            opcode,
            desc.mnemonic(),
            desc.addressing_mode()
        );

        let flow = match instructions::execute(self, &desc) {
            Ok(_) if desc.mnemonic().halts() => Flow::Halt,
            Ok(flow) => flow,
            Err(err) => {
                log::error!("${:04X}: {}", pc, err);
                return Err(self.fail(err));
            }
        };

        // Advance
        match flow {
            Flow::Next => {
                self.regs.pc = pc.wrapping_add(desc.size_bytes() as u16);
                self.state = ExecutionState::Fetching;
            }
            Flow::Jump(target) => {
                self.regs.pc = target;
                self.state = ExecutionState::Fetching;
            }
            Flow::Halt => {
                self.state = ExecutionState::Halted;
                log::debug!("halted by {} at ${:04X}", desc.mnemonic(), pc);
            }
        }

        self.cycles += desc.base_cycles() as u64;

        Ok(())
    }

    /// Steps until a halt instruction stops the machine.
    ///
    /// Returns the first error encountered; the machine is then `Faulted`.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        while self.state != ExecutionState::Halted {
            self.step()?;
        }
        Ok(())
    }

    /// Runs until `cycle_budget` base cycles have been consumed or the machine halts.
    ///
    /// Returns the cycles actually consumed, which may overshoot the budget by part of
    /// one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502_core::{FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load(&[0xEA, 0xEA, 0xEA, 0xEA, 0x00]); // NOP x4; BRK
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.run_for_cycles(5), Ok(6));
    /// assert_eq!(cpu.pc(), 0x8003);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles && self.state != ExecutionState::Halted {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    fn fail(&mut self, err: ExecutionError) -> ExecutionError {
        self.state = ExecutionState::Faulted;
        self.fault = Some(err);
        err
    }

    /// Effective address of `mode` for the instruction at the current PC.
    ///
    /// `None` for Accumulator and Implied. Useful to debuggers that want to show
    /// what the next instruction will touch.
    pub fn effective_address(&self, mode: AddressingMode) -> Option<u16> {
        resolve(
            &self.memory,
            mode,
            self.regs.pc.wrapping_add(1),
            self.regs.x,
            self.regs.y,
        )
    }

    // ========== State Inspection ==========

    /// Current execution state.
    pub fn state(&self) -> ExecutionState {
        self.state
    }

    /// True once a halt instruction has executed.
    pub fn is_halted(&self) -> bool {
        self.state == ExecutionState::Halted
    }

    /// The error that faulted the machine, if any.
    pub fn fault(&self) -> Option<ExecutionError> {
        self.fault
    }

    /// Returns the total base cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The decode table this CPU uses.
    pub fn opcode_table(&self) -> &OpcodeTable {
        &self.opcodes
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus, for test setup and pokes.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Returns the register file.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Returns the register file for direct modification.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.regs.status.bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> StatusFlags {
        self.regs.status
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Replaces the whole status register.
    pub fn set_status(&mut self, value: u8) {
        self.regs.status = StatusFlags::from_bits_retain(value);
    }

    /// Sets or clears one flag.
    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.regs.assign_flag(flag, value);
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.is_flag_set(StatusFlags::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.is_flag_set(StatusFlags::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.is_flag_set(StatusFlags::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.is_flag_set(StatusFlags::DECIMAL_MODE)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.is_flag_set(StatusFlags::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.is_flag_set(StatusFlags::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.is_flag_set(StatusFlags::CARRY)
    }
}
