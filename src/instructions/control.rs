//! # Subroutine Instructions
//!
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//!
//! The return address lives in the word at the current stack slot
//! (`0x0100 | sp`). Neither instruction moves the stack pointer, so a JSR
//! inside a subroutine overwrites the outer return address: nested calls do
//! not return correctly.

use crate::{Cpu, MemoryBus};

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// 1. Fetches the 16-bit target (2 cycles)
/// 2. Writes PC - 1, the address of the last JSR byte, to the stack slot (2 cycles)
/// 3. Jumps to the target (1 cycle)
///
/// Cycle timing: 6 cycles including the opcode fetch.
///
/// Flags affected: None
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut Cpu, cycles: &mut i32, memory: &mut M) {
    let target = cpu.fetch_word(cycles, memory);
    let return_address = cpu.pc.wrapping_sub(1);

    memory.write_word(return_address, cpu.stack_address(), cycles);
    cpu.pc = target;
    *cycles -= 1;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// 1. Reads the return address from the stack slot (2 cycles, plus 1 for the
///    stack access the hardware spends)
/// 2. Sets PC to the return address + 1 (2 cycles)
///
/// Cycle timing: 6 cycles including the opcode fetch.
///
/// Flags affected: None
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut Cpu, cycles: &mut i32, memory: &M) {
    let return_address = pop_word(cpu, cycles, memory);
    cpu.pc = return_address.wrapping_add(1);
    *cycles -= 2;
}

fn pop_word<M: MemoryBus>(cpu: &Cpu, cycles: &mut i32, memory: &M) -> u16 {
    let value = cpu.read_word(cpu.stack_address(), cycles, memory);
    *cycles -= 1;
    value
}
