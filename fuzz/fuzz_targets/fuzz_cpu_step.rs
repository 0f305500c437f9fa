//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory contents, executes one instruction,
//! and checks the engine's step contract: a step either succeeds, halts, or faults
//! without touching registers or memory.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502_core::{ExecutionState, FlatMemory, MemoryBus, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC status byte
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for testing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    // At 0x4000 for testing absolute addressing
    memory.load(0x4000, &input.memory.main_memory);
    memory.write_word(0xFFFC, 0x8000);

    let mut cpu = CPU::new(memory);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let before = *cpu.registers();
    let before_memory = cpu.memory().clone();

    match cpu.step() {
        Ok(()) => {
            assert!(matches!(
                cpu.state(),
                ExecutionState::Fetching | ExecutionState::Halted
            ));
            assert!(cpu.cycles() > 0);
        }
        Err(err) => {
            // A failed step must not have happened at all
            assert_eq!(cpu.state(), ExecutionState::Faulted);
            assert_eq!(cpu.fault(), Some(err));
            assert_eq!(*cpu.registers(), before);
            assert_eq!(cpu.cycles(), 0);
            for addr in 0..=0xFFFFu16 {
                assert_eq!(cpu.memory().read(addr), before_memory.read(addr));
            }
        }
    }
});
