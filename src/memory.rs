//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, and `Memory`, the flat 64KB array every
//! host and test uses.
//!
//! ## Design Principles
//!
//! The bus follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Addresses are 16 bits wide, so every address is in range
//! - Word accesses are little-endian and wrap from 0xFFFF to 0x0000

use std::ops::{Index, IndexMut};

/// Number of addressable cells (64KB).
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// The CPU receives the bus by reference on every call and never keeps it, so
/// the host stays free to inspect and patch memory between `execute` calls.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use cpu6502::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Clears the whole address space to zero. Called by `Cpu::reset`.
    fn initialize(&mut self);

    /// Writes `value` little-endian at `addr` and `addr + 1`, charging the two
    /// bus cycles to `cycles`.
    ///
    /// The high-byte address wraps from 0xFFFF to 0x0000.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{Memory, MemoryBus};
    ///
    /// let mut mem = Memory::new();
    /// let mut cycles = 6;
    /// mem.write_word(0xBEEF, 0x0100, &mut cycles);
    ///
    /// assert_eq!(mem.read(0x0100), 0xEF);
    /// assert_eq!(mem.read(0x0101), 0xBE);
    /// assert_eq!(cycles, 4);
    /// ```
    fn write_word(&mut self, value: u16, addr: u16, cycles: &mut i32) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
        *cycles -= 2;
    }
}

/// Flat 64KB memory.
///
/// All 65536 addresses map to a single zero-initialized array. Hosts load
/// programs either through [`MemoryBus::write`], by indexing
/// (`mem[0xFFFC] = 0xA9`), or with [`Memory::load`].
///
/// # Examples
///
/// ```
/// use cpu6502::{Memory, MemoryBus};
///
/// let mut memory = Memory::new();
/// memory[0xFFFC] = 0xA9;
/// memory.load(0x8000, &[0xA0, 0x10]);
///
/// assert_eq!(memory.read(0xFFFC), 0xA9);
/// assert_eq!(memory[0x8001], 0x10);
/// ```
#[derive(Clone)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Creates a new memory with every cell set to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[usize::from(addr)] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("non_zero_cells", &used)
            .finish()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        self.data[usize::from(addr)]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[usize::from(addr)] = value;
    }

    fn initialize(&mut self) {
        self.data.fill(0);
    }
}

impl Index<u16> for Memory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.data[usize::from(addr)]
    }
}

impl IndexMut<u16> for Memory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[usize::from(addr)]
    }
}
