//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA / LDX / LDY: Load a register from memory
//! - STA / STX / STY: Store a register to memory

use crate::{Access, AddressingMode, Cpu, MemoryBus, Register};

/// Executes LDA, LDX or LDY.
///
/// Reads the byte at the effective address into `register`.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the loaded value is 0
/// - Negative (N): Set if bit 7 of the loaded value is set
/// - Other flags: Not affected
pub(crate) fn execute_load<M: MemoryBus>(
    cpu: &mut Cpu,
    register: Register,
    mode: AddressingMode,
    cycles: &mut i32,
    memory: &M,
) {
    let addr = cpu.effective_address(mode, Access::Read, cycles, memory);
    let value = cpu.read_byte(addr, cycles, memory);

    match register {
        Register::A => cpu.a = value,
        Register::X => cpu.x = value,
        Register::Y => cpu.y = value,
    }
    cpu.set_load_flags(value);
}

/// Executes STA, STX or STY.
///
/// Writes `register` to the effective address. Indexed forms always pay the
/// address fix-up cycle, page cross or not.
///
/// # Flag Behavior
///
/// - No flags affected
pub(crate) fn execute_store<M: MemoryBus>(
    cpu: &mut Cpu,
    register: Register,
    mode: AddressingMode,
    cycles: &mut i32,
    memory: &mut M,
) {
    let addr = cpu.effective_address(mode, Access::Write, cycles, memory);
    let value = match register {
        Register::A => cpu.a,
        Register::X => cpu.x,
        Register::Y => cpu.y,
    };
    cpu.write_byte(value, addr, cycles, memory);
}
