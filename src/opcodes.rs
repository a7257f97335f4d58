//! # Opcode Constants and Decode Table
//!
//! Each instruction is identified by a single opcode byte; its operand bytes
//! follow in the real 6502 encoding (one byte for immediate and zero-page
//! forms, two little-endian bytes for absolute forms).
//!
//! [`OPCODE_TABLE`] is the single source of truth for decoding: 256 entries
//! indexed by opcode byte, `None` for every byte this core does not execute.
//! Each entry names the operation, the addressing mode, the base cycle cost
//! and the instruction size.

use crate::addressing::AddressingMode;
use AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Immediate, Implicit, IndirectX, IndirectY, ZeroPage,
    ZeroPageX, ZeroPageY,
};
use Operation::{Load, Store};
use Register::{A, X, Y};

/// Opcode byte values understood by the core.
pub mod op {
    // LDA
    pub const LDA_IMMEDIATE: u8 = 0xA9;
    pub const LDA_ZEROPAGE: u8 = 0xA5;
    pub const LDA_ZEROPAGE_X: u8 = 0xB5;
    pub const LDA_ABSOLUTE: u8 = 0xAD;
    pub const LDA_ABSOLUTE_X: u8 = 0xBD;
    pub const LDA_ABSOLUTE_Y: u8 = 0xB9;
    pub const LDA_INDIRECT_X: u8 = 0xA1;
    pub const LDA_INDIRECT_Y: u8 = 0xB1;

    // LDX
    pub const LDX_IMMEDIATE: u8 = 0xA2;
    pub const LDX_ZEROPAGE: u8 = 0xA6;
    pub const LDX_ZEROPAGE_Y: u8 = 0xB6;
    pub const LDX_ABSOLUTE: u8 = 0xAE;
    pub const LDX_ABSOLUTE_Y: u8 = 0xBE;

    // LDY
    pub const LDY_IMMEDIATE: u8 = 0xA0;
    pub const LDY_ZEROPAGE: u8 = 0xA4;
    pub const LDY_ZEROPAGE_X: u8 = 0xB4;
    pub const LDY_ABSOLUTE: u8 = 0xAC;
    pub const LDY_ABSOLUTE_X: u8 = 0xBC;

    // STA
    pub const STA_ZEROPAGE: u8 = 0x85;
    pub const STA_ZEROPAGE_X: u8 = 0x95;
    pub const STA_ABSOLUTE: u8 = 0x8D;
    pub const STA_ABSOLUTE_X: u8 = 0x9D;
    pub const STA_ABSOLUTE_Y: u8 = 0x99;
    pub const STA_INDIRECT_X: u8 = 0x81;
    pub const STA_INDIRECT_Y: u8 = 0x91;

    // STX
    pub const STX_ZEROPAGE: u8 = 0x86;
    pub const STX_ABSOLUTE: u8 = 0x8E;

    // STY
    pub const STY_ZEROPAGE: u8 = 0x84;
    pub const STY_ZEROPAGE_X: u8 = 0x94;
    pub const STY_ABSOLUTE: u8 = 0x8C;

    // Subroutines
    pub const JSR: u8 = 0x20;
    pub const RTS: u8 = 0x60;
}

/// Instruction mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    Jsr,
    Rts,
}

impl Mnemonic {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Rts => "RTS",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU register targeted by a load or store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    X,
    Y,
}

/// What an instruction does once its address is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read memory into a register and update Z/N.
    Load(Register),
    /// Write a register to memory. No flags change.
    Store(Register),
    /// Jump to subroutine.
    Jsr,
    /// Return from subroutine.
    Rts,
}

/// Metadata for a single decodable opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{lookup, AddressingMode, Mnemonic};
///
/// let lda = lookup(0xA9).unwrap();
/// assert_eq!(lda.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda.base_cycles, 2);
/// assert_eq!(lda.size_bytes, 2);
///
/// assert!(lookup(0xEA).is_none()); // NOP is not part of this core
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Operation performed on the resolved address.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Cycle cost when no page is crossed.
    ///
    /// Indexed reads add one cycle on a page cross. Indexed writes already
    /// include their fix-up cycle here.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

const fn entry(
    opcode: u8,
    mnemonic: Mnemonic,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> (u8, OpcodeMetadata) {
    (
        opcode,
        OpcodeMetadata {
            mnemonic,
            operation,
            addressing_mode,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        },
    )
}

const INSTRUCTIONS: &[(u8, OpcodeMetadata)] = &[
    entry(op::LDA_IMMEDIATE, Mnemonic::Lda, Load(A), Immediate, 2),
    entry(op::LDA_ZEROPAGE, Mnemonic::Lda, Load(A), ZeroPage, 3),
    entry(op::LDA_ZEROPAGE_X, Mnemonic::Lda, Load(A), ZeroPageX, 4),
    entry(op::LDA_ABSOLUTE, Mnemonic::Lda, Load(A), Absolute, 4),
    entry(op::LDA_ABSOLUTE_X, Mnemonic::Lda, Load(A), AbsoluteX, 4),
    entry(op::LDA_ABSOLUTE_Y, Mnemonic::Lda, Load(A), AbsoluteY, 4),
    entry(op::LDA_INDIRECT_X, Mnemonic::Lda, Load(A), IndirectX, 6),
    entry(op::LDA_INDIRECT_Y, Mnemonic::Lda, Load(A), IndirectY, 5),
    entry(op::LDX_IMMEDIATE, Mnemonic::Ldx, Load(X), Immediate, 2),
    entry(op::LDX_ZEROPAGE, Mnemonic::Ldx, Load(X), ZeroPage, 3),
    entry(op::LDX_ZEROPAGE_Y, Mnemonic::Ldx, Load(X), ZeroPageY, 4),
    entry(op::LDX_ABSOLUTE, Mnemonic::Ldx, Load(X), Absolute, 4),
    entry(op::LDX_ABSOLUTE_Y, Mnemonic::Ldx, Load(X), AbsoluteY, 4),
    entry(op::LDY_IMMEDIATE, Mnemonic::Ldy, Load(Y), Immediate, 2),
    entry(op::LDY_ZEROPAGE, Mnemonic::Ldy, Load(Y), ZeroPage, 3),
    entry(op::LDY_ZEROPAGE_X, Mnemonic::Ldy, Load(Y), ZeroPageX, 4),
    entry(op::LDY_ABSOLUTE, Mnemonic::Ldy, Load(Y), Absolute, 4),
    entry(op::LDY_ABSOLUTE_X, Mnemonic::Ldy, Load(Y), AbsoluteX, 4),
    entry(op::STA_ZEROPAGE, Mnemonic::Sta, Store(A), ZeroPage, 3),
    entry(op::STA_ZEROPAGE_X, Mnemonic::Sta, Store(A), ZeroPageX, 4),
    entry(op::STA_ABSOLUTE, Mnemonic::Sta, Store(A), Absolute, 4),
    entry(op::STA_ABSOLUTE_X, Mnemonic::Sta, Store(A), AbsoluteX, 5),
    entry(op::STA_ABSOLUTE_Y, Mnemonic::Sta, Store(A), AbsoluteY, 5),
    entry(op::STA_INDIRECT_X, Mnemonic::Sta, Store(A), IndirectX, 6),
    entry(op::STA_INDIRECT_Y, Mnemonic::Sta, Store(A), IndirectY, 6),
    entry(op::STX_ZEROPAGE, Mnemonic::Stx, Store(X), ZeroPage, 3),
    entry(op::STX_ABSOLUTE, Mnemonic::Stx, Store(X), Absolute, 4),
    entry(op::STY_ZEROPAGE, Mnemonic::Sty, Store(Y), ZeroPage, 3),
    entry(op::STY_ZEROPAGE_X, Mnemonic::Sty, Store(Y), ZeroPageX, 4),
    entry(op::STY_ABSOLUTE, Mnemonic::Sty, Store(Y), Absolute, 4),
    entry(op::JSR, Mnemonic::Jsr, Operation::Jsr, Absolute, 6),
    entry(op::RTS, Mnemonic::Rts, Operation::Rts, Implicit, 6),
];

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < INSTRUCTIONS.len() {
        let (opcode, metadata) = INSTRUCTIONS[i];
        table[opcode as usize] = Some(metadata);
        i += 1;
    }
    table
}

/// 256-entry decode table indexed by opcode byte.
///
/// ```
/// use cpu6502::{op, Operation, OPCODE_TABLE};
///
/// let jsr = OPCODE_TABLE[op::JSR as usize].unwrap();
/// assert_eq!(jsr.operation, Operation::Jsr);
/// assert_eq!(jsr.base_cycles, 6);
/// assert_eq!(OPCODE_TABLE.iter().flatten().count(), 32);
/// ```
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Looks up the decode entry for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[usize::from(opcode)].as_ref()
}
