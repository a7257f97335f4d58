//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the 6502 processor state,
//! the bus access primitives every instruction is built from, and the
//! fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction byte
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C as independent booleans
//!
//! Only Z and N are ever computed here; the other five flags are storage the
//! host may set and inspect, and no instruction touches them.
//!
//! ## Execution Model
//!
//! The CPU does not own its memory. `reset`/`reset_to` clear the memory they
//! are given and seed the program counter; `execute` then runs whole
//! instructions until the cycle budget is used up.

use crate::{instructions, lookup, ExecutionError, MemoryBus};

/// Address the program counter starts at after [`Cpu::reset`].
///
/// Execution begins at the vector location itself, so test programs place
/// their first opcode at 0xFFFC.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const INITIAL_STACK_POINTER: u8 = 0x00;

/// Processor status flags.
///
/// # Examples
///
/// ```
/// use cpu6502::StatusFlags;
///
/// let flags = StatusFlags::from_bits(0b1000_0011);
/// assert!(flags.negative);
/// assert!(flags.zero);
/// assert!(flags.carry);
/// assert_eq!(flags.bits(), 0b1000_0011);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatusFlags {
    /// Carry flag (C)
    pub carry: bool,
    /// Zero flag (Z), set when the last loaded value was zero
    pub zero: bool,
    /// Interrupt disable flag (I)
    pub interrupt_disable: bool,
    /// Decimal mode flag (D)
    pub decimal: bool,
    /// Break flag (B)
    pub break_command: bool,
    /// Overflow flag (V)
    pub overflow: bool,
    /// Negative flag (N), bit 7 of the last loaded value
    pub negative: bool,
}

impl StatusFlags {
    const CARRY: u8 = 0b0000_0001;
    const ZERO: u8 = 0b0000_0010;
    const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    const DECIMAL: u8 = 0b0000_1000;
    const BREAK: u8 = 0b0001_0000;
    const OVERFLOW: u8 = 0b0100_0000;
    const NEGATIVE: u8 = 0b1000_0000;

    /// Packs the flags NV-BDIZC. Bit 5 is not modelled and reads as 0.
    pub fn bits(&self) -> u8 {
        [
            (self.carry, Self::CARRY),
            (self.zero, Self::ZERO),
            (self.interrupt_disable, Self::INTERRUPT_DISABLE),
            (self.decimal, Self::DECIMAL),
            (self.break_command, Self::BREAK),
            (self.overflow, Self::OVERFLOW),
            (self.negative, Self::NEGATIVE),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .fold(0, |acc, (_, bit)| acc | bit)
    }

    /// Unpacks an NV-BDIZC byte. Bit 5 is ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            carry: bits & Self::CARRY != 0,
            zero: bits & Self::ZERO != 0,
            interrupt_disable: bits & Self::INTERRUPT_DISABLE != 0,
            decimal: bits & Self::DECIMAL != 0,
            break_command: bits & Self::BREAK != 0,
            overflow: bits & Self::OVERFLOW != 0,
            negative: bits & Self::NEGATIVE != 0,
        }
    }
}

/// 6502 CPU state.
///
/// A freshly constructed CPU is all zeros; call [`Cpu::reset`] or
/// [`Cpu::reset_to`] before executing.
///
/// # Examples
///
/// ```
/// use cpu6502::{op, Cpu, Memory};
///
/// let mut memory = Memory::new();
/// let mut cpu = Cpu::new();
/// cpu.reset_to(0x8000, &mut memory);
///
/// memory.load(0x8000, &[op::LDX_IMMEDIATE, 0x00]);
/// assert_eq!(cpu.execute(2, &mut memory), Ok(2));
/// assert_eq!(cpu.x(), 0x00);
/// assert!(cpu.flags().zero);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cpu {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    pub(crate) flags: StatusFlags,

    /// Cycles consumed by every `execute` call since the last reset
    pub(crate) total_cycles: u64,
}

impl Cpu {
    /// Creates a zeroed CPU.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the CPU and clears `memory`.
    ///
    /// Afterwards every register and flag is zero, the stack pointer holds
    /// [`INITIAL_STACK_POINTER`] and the program counter holds
    /// [`RESET_VECTOR`].
    pub fn reset<M: MemoryBus>(&mut self, memory: &mut M) {
        self.reset_to(RESET_VECTOR, memory);
    }

    /// Same as [`Cpu::reset`], but execution starts at `vector`.
    pub fn reset_to<M: MemoryBus>(&mut self, vector: u16, memory: &mut M) {
        log::debug!("reset: pc=0x{vector:04X}");
        *self = Self {
            pc: vector,
            sp: INITIAL_STACK_POINTER,
            ..Self::default()
        };
        memory.initialize();
    }

    /// Runs whole instructions while budget remains and returns the cycles
    /// actually used.
    ///
    /// The budget is only checked between instructions: an instruction that
    /// starts always completes, so the result can exceed `cycles_requested`
    /// by less than the cost of one instruction. A budget of zero or less
    /// executes nothing and returns 0.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::UnimplementedOpcode`] as soon as an opcode
    /// with no decode entry is fetched. The program counter is left on that
    /// opcode; instructions completed earlier in the call keep their effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{op, Cpu, ExecutionError, Memory};
    ///
    /// let mut memory = Memory::new();
    /// let mut cpu = Cpu::new();
    /// cpu.reset(&mut memory);
    /// memory[0xFFFC] = op::LDA_IMMEDIATE;
    /// memory[0xFFFD] = 0x01;
    /// memory[0xFFFE] = 0xEA;
    ///
    /// // One cycle requested, the two-cycle load still completes
    /// assert_eq!(cpu.execute(1, &mut memory), Ok(2));
    ///
    /// assert_eq!(
    ///     cpu.execute(2, &mut memory),
    ///     Err(ExecutionError::UnimplementedOpcode { opcode: 0xEA, address: 0xFFFE })
    /// );
    /// ```
    pub fn execute<M: MemoryBus>(
        &mut self,
        cycles_requested: i32,
        memory: &mut M,
    ) -> Result<i32, ExecutionError> {
        let mut cycles = cycles_requested;

        while cycles > 0 {
            let address = self.pc;
            let before = cycles;
            let opcode = self.fetch_byte(&mut cycles, memory);

            let Some(metadata) = lookup(opcode) else {
                log::warn!("unhandled opcode 0x{opcode:02X} at 0x{address:04X}");
                self.pc = address;
                self.charge(cycles_requested - before);
                return Err(ExecutionError::UnimplementedOpcode { opcode, address });
            };

            log::trace!(
                "0x{address:04X}: {} {:?} (0x{opcode:02X})",
                metadata.mnemonic,
                metadata.addressing_mode
            );
            instructions::execute(self, metadata, &mut cycles, memory);
        }

        let used = cycles_requested - cycles;
        self.charge(used);
        Ok(used)
    }

    fn charge(&mut self, used: i32) {
        self.total_cycles += u64::from(used.unsigned_abs());
    }

    // ========== Bus Access Primitives ==========

    /// Reads the byte at the program counter and steps past it. 1 cycle.
    pub fn fetch_byte<M: MemoryBus>(&mut self, cycles: &mut i32, memory: &M) -> u8 {
        let data = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        *cycles -= 1;
        data
    }

    /// Reads a little-endian word at the program counter and steps past it.
    /// 2 cycles.
    pub fn fetch_word<M: MemoryBus>(&mut self, cycles: &mut i32, memory: &M) -> u16 {
        let lo = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        let hi = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        *cycles -= 2;
        u16::from_le_bytes([lo, hi])
    }

    /// Reads the byte at `addr`. 1 cycle.
    pub fn read_byte<M: MemoryBus>(&self, addr: u16, cycles: &mut i32, memory: &M) -> u8 {
        *cycles -= 1;
        memory.read(addr)
    }

    /// Reads a little-endian word at `addr`, `addr + 1`. 2 cycles.
    pub fn read_word<M: MemoryBus>(&self, addr: u16, cycles: &mut i32, memory: &M) -> u16 {
        let lo = self.read_byte(addr, cycles, memory);
        let hi = self.read_byte(addr.wrapping_add(1), cycles, memory);
        u16::from_le_bytes([lo, hi])
    }

    /// Writes `value` to `addr`. 1 cycle.
    pub fn write_byte<M: MemoryBus>(&self, value: u8, addr: u16, cycles: &mut i32, memory: &mut M) {
        memory.write(addr, value);
        *cycles -= 1;
    }

    /// Sets Z and N from a freshly loaded register value. No other flag moves.
    pub(crate) fn set_load_flags(&mut self, value: u8) {
        self.flags.zero = value == 0;
        self.flags.negative = value & 0x80 != 0;
    }

    /// Full address of the current stack slot.
    pub fn stack_address(&self) -> u16 {
        STACK_PAGE | u16::from(self.sp)
    }

    // ========== Register Accessors ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Returns the status flags.
    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    /// Mutable access to the status flags.
    pub fn flags_mut(&mut self) -> &mut StatusFlags {
        &mut self.flags
    }

    /// Returns the status register as a packed NV-BDIZC byte.
    pub fn status(&self) -> u8 {
        self.flags.bits()
    }

    /// Loads every flag from a packed NV-BDIZC byte.
    pub fn set_status(&mut self, bits: u8) {
        self.flags = StatusFlags::from_bits(bits);
    }

    /// Returns the cycles consumed by `execute` since the last reset.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }
}
