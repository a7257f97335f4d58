//! # 6502 Instruction Implementations
//!
//! Each instruction family is a set of standalone functions taking the CPU,
//! the decoded opcode metadata, the running cycle counter and the memory bus.
//!
//! ## Categories
//!
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **control**: Subroutine call and return (JSR, RTS)

pub mod control;
pub mod load_store;

use crate::{Cpu, MemoryBus, OpcodeMetadata, Operation};

/// Runs one decoded instruction. The opcode byte has already been fetched.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    cycles: &mut i32,
    memory: &mut M,
) {
    match metadata.operation {
        Operation::Load(register) => {
            load_store::execute_load(cpu, register, metadata.addressing_mode, cycles, memory)
        }
        Operation::Store(register) => {
            load_store::execute_store(cpu, register, metadata.addressing_mode, cycles, memory)
        }
        Operation::Jsr => control::execute_jsr(cpu, cycles, memory),
        Operation::Rts => control::execute_rts(cpu, cycles, memory),
    }
}
