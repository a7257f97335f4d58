//! # 6502 Load/Store Core
//!
//! A cycle-counting emulation of the MOS 6502 load, store and subroutine
//! instructions running against a flat 64KB memory.
//!
//! The CPU does not own its memory. The host creates a [`Memory`], resets the
//! CPU against it, pokes program bytes in, and drives the core with
//! [`Cpu::execute`], handing in a cycle budget and getting back the number of
//! cycles actually consumed.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{op, Cpu, Memory};
//!
//! let mut memory = Memory::new();
//! let mut cpu = Cpu::new();
//! cpu.reset(&mut memory);
//!
//! // Execution starts at the reset vector location itself (0xFFFC)
//! memory[0xFFFC] = op::LDA_IMMEDIATE;
//! memory[0xFFFD] = 0x84;
//!
//! let cycles_used = cpu.execute(2, &mut memory).unwrap();
//! assert_eq!(cycles_used, 2);
//! assert_eq!(cpu.a(), 0x84);
//! assert!(cpu.flags().negative);
//! ```
//!
//! ## Cycle accounting
//!
//! Every memory touch costs one cycle: opcode and operand fetches, data reads
//! and writes. Index additions cost one more cycle where the hardware needs an
//! extra bus cycle for them. The budget handed to [`Cpu::execute`] is only
//! checked between instructions, so an instruction that starts with budget
//! left always runs to completion and the call may report more cycles than
//! were requested.
//!
//! ## Modules
//!
//! - `cpu` - register state, fetch primitives and the execute loop
//! - `memory` - the `MemoryBus` trait and the flat `Memory`
//! - `opcodes` - opcode constants and the decode table
//! - `addressing` - addressing modes and effective-address resolution
//! - `wasm` - JavaScript bindings (feature `wasm`)

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

pub use addressing::{Access, AddressingMode};
pub use cpu::{Cpu, StatusFlags, INITIAL_STACK_POINTER, RESET_VECTOR, STACK_PAGE};
pub use memory::{Memory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{lookup, op, Mnemonic, OpcodeMetadata, Operation, Register, OPCODE_TABLE};

#[cfg(feature = "wasm")]
pub use wasm::Emulator6502;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte does not decode to any supported instruction.
    ///
    /// Execution stops with the program counter pointing at `address`.
    #[error("opcode 0x{opcode:02X} at 0x{address:04X} is not implemented")]
    UnimplementedOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        address: u16,
    },
}
