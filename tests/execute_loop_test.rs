//! Execution loop tests
//!
//! Verifies the fetch-decode-execute cycle, the advisory cycle budget and
//! error handling for unimplemented opcodes.

use cpu6502::{op, Cpu, ExecutionError, Memory, MemoryBus};

/// Helper function to reset a CPU against fresh memory (PC = 0xFFFC)
fn setup_cpu() -> (Cpu, Memory) {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_zero_cycles_does_nothing() {
    let (mut cpu, mut memory) = setup_cpu();
    memory[0xFFFC] = op::LDA_IMMEDIATE;
    memory[0xFFFD] = 0x84;

    assert_eq!(cpu.execute(0, &mut memory), Ok(0));
    assert_eq!(cpu.pc(), 0xFFFC);
    assert_eq!(cpu.a(), 0x00);
}

#[test]
fn test_executes_more_cycles_than_requested_when_instruction_needs_them() {
    let (mut cpu, mut memory) = setup_cpu();
    memory[0xFFFC] = op::LDA_IMMEDIATE;
    memory[0xFFFD] = 0x84;

    let cycles = cpu.execute(1, &mut memory).unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.a(), 0x84);
}

#[test]
fn test_overshoot_is_at_most_one_instruction() {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();
    cpu.reset_to(0x0200, &mut memory);
    // LDA $4400,X with a page cross (5) then LDX #$01 (2)
    memory.load(0x0200, &[op::LDA_ABSOLUTE_X, 0x02, 0x44, op::LDX_IMMEDIATE, 0x01]);
    cpu.set_x(0xFF);

    let cycles = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(cycles, 5);
    assert_eq!(cpu.pc(), 0x0203);
    assert_eq!(cpu.x(), 0xFF);
}

#[test]
fn test_runs_several_instructions() {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();
    cpu.reset_to(0x0200, &mut memory);
    memory.load(
        0x0200,
        &[
            op::LDA_IMMEDIATE, 0x42,
            op::STA_ZEROPAGE, 0x10,
            op::LDY_ZEROPAGE, 0x10,
            op::STY_ABSOLUTE, 0x00, 0x30,
        ],
    );

    let cycles = cpu.execute(2 + 3 + 3 + 4, &mut memory).unwrap();

    assert_eq!(cycles, 12);
    assert_eq!(cpu.y(), 0x42);
    assert_eq!(memory.read(0x3000), 0x42);
    assert_eq!(cpu.total_cycles(), 12);
}

#[test]
fn test_unimplemented_opcode_is_an_error() {
    let (mut cpu, mut memory) = setup_cpu();
    memory[0xFFFC] = 0xE9; // SBC immediate

    match cpu.execute(2, &mut memory) {
        Err(ExecutionError::UnimplementedOpcode { opcode: 0xE9, address: 0xFFFC }) => {}
        other => panic!("Expected UnimplementedOpcode(0xE9), got {:?}", other),
    }
    assert_eq!(cpu.pc(), 0xFFFC);
}

#[test]
fn test_error_after_completed_instructions_keeps_their_effects() {
    let (mut cpu, mut memory) = setup_cpu();
    memory[0xFFFC] = op::LDX_IMMEDIATE;
    memory[0xFFFD] = 0x07;
    memory[0xFFFE] = 0xEA; // NOP is not decoded

    let result = cpu.execute(10, &mut memory);

    assert_eq!(
        result,
        Err(ExecutionError::UnimplementedOpcode { opcode: 0xEA, address: 0xFFFE })
    );
    assert_eq!(cpu.x(), 0x07);
    assert_eq!(cpu.pc(), 0xFFFE);
    assert_eq!(cpu.total_cycles(), 2);
}

#[test]
fn test_error_message() {
    let err = ExecutionError::UnimplementedOpcode { opcode: 0x02, address: 0x1234 };
    assert_eq!(err.to_string(), "opcode 0x02 at 0x1234 is not implemented");
}
