//! # Addressing Modes
//!
//! This module defines the addressing modes used by the load, store and
//! subroutine instructions, and the effective-address resolution for each.
//!
//! Resolvers pull their operand bytes through the CPU fetch primitives, so the
//! operand fetch cycles are charged as they happen. On top of that:
//!
//! | Mode | Extra cycles |
//! |------|--------------|
//! | `ZeroPageX` / `ZeroPageY` | 1 for the index addition |
//! | `AbsoluteX` / `AbsoluteY` | reads: 1 on page cross; writes: always 1 |
//! | `IndirectX` | 1 for the index addition + 2 for the pointer read |
//! | `IndirectY` | 2 for the pointer read; reads: 1 on page cross; writes: always 1 |

use crate::{Cpu, MemoryBus};

/// 6502 addressing mode enumeration (the subset this core decodes).
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Example: RTS
    Implicit,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: JSR $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
        }
    }
}

/// Whether the instruction reads or writes its effective address.
///
/// Indexed reads skip the fix-up cycle when the index addition stays inside
/// the page; indexed writes always spend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Read,
    Write,
}

/// True when `base` and `effective` sit on different 256-byte pages.
#[inline]
pub(crate) fn crosses_page(base: u16, effective: u16) -> bool {
    (base & 0xFF00) != (effective & 0xFF00)
}

impl Cpu {
    /// Resolves the effective address for `mode`, consuming operand bytes and
    /// charging the mode's cycles to `cycles`.
    ///
    /// `Immediate` resolves to the operand's own location: the program counter
    /// steps over it without a charge, the cycle is paid when the operand is
    /// read. `Implicit` resolves to the program counter and consumes nothing.
    pub fn effective_address<M: MemoryBus>(
        &mut self,
        mode: AddressingMode,
        access: Access,
        cycles: &mut i32,
        memory: &M,
    ) -> u16 {
        match mode {
            AddressingMode::Implicit => self.pc,
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                addr
            }
            AddressingMode::ZeroPage => self.addr_zero_page(cycles, memory),
            AddressingMode::ZeroPageX => self.addr_zero_page_indexed(self.x, cycles, memory),
            AddressingMode::ZeroPageY => self.addr_zero_page_indexed(self.y, cycles, memory),
            AddressingMode::Absolute => self.addr_absolute(cycles, memory),
            AddressingMode::AbsoluteX => {
                let base = self.addr_absolute(cycles, memory);
                self.index_with_penalty(base, self.x, access, cycles)
            }
            AddressingMode::AbsoluteY => {
                let base = self.addr_absolute(cycles, memory);
                self.index_with_penalty(base, self.y, access, cycles)
            }
            AddressingMode::IndirectX => {
                let pointer = self.addr_zero_page_indexed(self.x, cycles, memory);
                self.read_word(pointer, cycles, memory)
            }
            AddressingMode::IndirectY => {
                let pointer = self.addr_zero_page(cycles, memory);
                let base = self.read_word(pointer, cycles, memory);
                self.index_with_penalty(base, self.y, access, cycles)
            }
        }
    }

    fn addr_zero_page<M: MemoryBus>(&mut self, cycles: &mut i32, memory: &M) -> u16 {
        u16::from(self.fetch_byte(cycles, memory))
    }

    fn addr_zero_page_indexed<M: MemoryBus>(
        &mut self,
        index: u8,
        cycles: &mut i32,
        memory: &M,
    ) -> u16 {
        let zp = self.fetch_byte(cycles, memory).wrapping_add(index);
        *cycles -= 1;
        u16::from(zp)
    }

    fn addr_absolute<M: MemoryBus>(&mut self, cycles: &mut i32, memory: &M) -> u16 {
        self.fetch_word(cycles, memory)
    }

    fn index_with_penalty(&self, base: u16, index: u8, access: Access, cycles: &mut i32) -> u16 {
        let effective = base.wrapping_add(u16::from(index));
        match access {
            Access::Write => *cycles -= 1,
            Access::Read if crosses_page(base, effective) => {
                log::trace!("page cross 0x{base:04X} -> 0x{effective:04X}");
                *cycles -= 1;
            }
            Access::Read => {}
        }
        effective
    }
}
