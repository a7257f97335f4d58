//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for CPU control, memory access and
//! register inspection.

use crate::{Cpu, Memory, MemoryBus};
use wasm_bindgen::prelude::*;

/// A CPU paired with its own 64KB memory.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: Cpu,
    memory: Memory,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Creates an emulator that has already been reset.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Emulator6502 {
        let mut emulator = Emulator6502 {
            cpu: Cpu::new(),
            memory: Memory::new(),
        };
        emulator.reset();
        emulator
    }

    /// Resets the CPU to 0xFFFC and clears memory.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.memory);
    }

    /// Resets the CPU to `vector` and clears memory.
    pub fn reset_to(&mut self, vector: u16) {
        self.cpu.reset_to(vector, &mut self.memory);
    }

    /// Runs for `cycles` and returns the cycles actually used.
    ///
    /// Throws a JavaScript `Error` on an unimplemented opcode.
    pub fn execute(&mut self, cycles: i32) -> Result<i32, JsValue> {
        self.cpu
            .execute(cycles, &mut self.memory)
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    /// Copies `bytes` into memory starting at `start`.
    pub fn load_program(&mut self, bytes: &[u8], start: u16) {
        self.memory.load(start, bytes);
    }

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Returns `length` bytes starting at `start`, wrapping past 0xFFFF.
    pub fn memory_range(&self, start: u16, length: u16) -> Vec<u8> {
        (0..length)
            .map(|offset| self.memory.read(start.wrapping_add(offset)))
            .collect()
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

    /// Packed NV-BDIZC status byte.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn total_cycles(&self) -> f64 {
        self.cpu.total_cycles() as f64
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
