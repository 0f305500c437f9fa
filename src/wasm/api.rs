//! WASM API for the 6502 execution core.
//!
//! Provides JavaScript-callable interfaces for loading a program, driving
//! reset/step/run, and inspecting registers, flags and memory.

use crate::{ExecutionError, ExecutionState, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

fn to_js_error(err: ExecutionError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Browser-facing emulator over flat 64KB memory.
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<FlatMemory>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator {
    /// Create a new emulator with zeroed memory.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            cpu: CPU::new(FlatMemory::new()),
            program_start: crate::LOAD_ADDRESS,
            program_end: crate::LOAD_ADDRESS,
        }
    }

    /// Copy a program to `start_addr`, point the reset vector at it and reset.
    ///
    /// `program_end` saturates at 0xFFFF for images that run off the top of memory.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.load_at(start_addr, program);
        self.cpu.reset();
        self.program_start = start_addr;
        let len = u16::try_from(program.len()).unwrap_or(u16::MAX);
        self.program_end = start_addr.saturating_add(len);
    }

    /// Reset registers from the reset vector. Memory is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.cpu.step().map_err(to_js_error)
    }

    /// Run until the program halts
    pub fn run(&mut self) -> Result<(), JsValue> {
        self.cpu.run().map_err(to_js_error)
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsValue> {
        self.cpu
            .run_for_cycles(cycles as u64)
            .map(|c| c as u32)
            .map_err(to_js_error)
    }

    /// Engine state as a lower-case name: "reset", "fetching", "halted", ...
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.cpu.state() {
            ExecutionState::Reset => "reset",
            ExecutionState::Fetching => "fetching",
            ExecutionState::Dispatching => "dispatching",
            ExecutionState::Halted => "halted",
            ExecutionState::Faulted => "faulted",
        }
        .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Cycle count as f64, JavaScript has no u64.
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        self.cpu.memory().page(page).to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
