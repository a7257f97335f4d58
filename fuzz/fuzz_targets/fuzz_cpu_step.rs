//! Fuzz target for CPU execution.
//!
//! This target creates arbitrary CPU states and memory contents, then runs
//! the core for a small cycle budget to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{Cpu, ExecutionError, Memory};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    /// Accumulator register
    a: u8,
    /// X index register
    x: u8,
    /// Y index register
    y: u8,
    /// Stack pointer
    sp: u8,
    /// Packed NV-BDIZC status byte
    status: u8,
    /// Where execution starts
    pc: u16,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (a few instructions + operands)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    /// Cycle budget handed to `execute`
    budget: i8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();
    cpu.reset_to(input.cpu_state.pc, &mut memory);

    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    // Program last so it wins any overlap with the regions above
    memory.load(input.cpu_state.pc, &input.memory.program);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let sp_before = cpu.sp();
    let budget = i32::from(input.budget);

    match cpu.execute(budget, &mut memory) {
        Ok(used) => {
            if budget <= 0 {
                assert_eq!(used, 0);
            } else {
                // Longest instruction is 6 cycles, so overshoot is bounded
                assert!(used >= budget && used < budget + 7);
            }
        }
        Err(ExecutionError::UnimplementedOpcode { address, .. }) => {
            assert_eq!(cpu.pc(), address);
        }
    }

    // Nothing in the core moves the stack pointer
    assert_eq!(cpu.sp(), sp_before);
    assert!(cpu.total_cycles() <= u64::from(budget.max(0) as u32) + 6);
});
