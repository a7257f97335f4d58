//! Opcode table validation tests
//!
//! Verifies that the decode table agrees with what the CPU actually does.

use cpu6502::{lookup, op, AddressingMode, Cpu, Memory, Mnemonic, Operation, Register, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(OPCODE_TABLE.len(), 256);
    assert_eq!(OPCODE_TABLE.iter().flatten().count(), 32);
}

#[test]
fn test_base_cycles_match_execution_without_page_cross() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        let Some(metadata) = metadata else { continue };

        let mut memory = Memory::new();
        let mut cpu = Cpu::new();
        cpu.reset_to(0x8000, &mut memory);
        memory[0x8000] = opcode as u8;

        let cycles = cpu.execute(1, &mut memory).unwrap();

        assert_eq!(
            cycles,
            i32::from(metadata.base_cycles),
            "opcode 0x{:02X} ({} {:?})",
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode
        );
    }
}

#[test]
fn test_size_bytes_match_pc_advance_for_loads_and_stores() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        let Some(metadata) = metadata else { continue };
        if !matches!(metadata.operation, Operation::Load(_) | Operation::Store(_)) {
            continue;
        }

        let mut memory = Memory::new();
        let mut cpu = Cpu::new();
        cpu.reset_to(0x8000, &mut memory);
        memory[0x8000] = opcode as u8;

        cpu.execute(1, &mut memory).unwrap();

        assert_eq!(
            cpu.pc(),
            0x8000 + u16::from(metadata.size_bytes),
            "opcode 0x{:02X}",
            opcode
        );
    }
}

#[test]
fn test_known_entries() {
    let lda = lookup(op::LDA_INDIRECT_Y).unwrap();
    assert_eq!(lda.mnemonic, Mnemonic::Lda);
    assert_eq!(lda.operation, Operation::Load(Register::A));
    assert_eq!(lda.addressing_mode, AddressingMode::IndirectY);
    assert_eq!(lda.base_cycles, 5);

    let stx = lookup(op::STX_ABSOLUTE).unwrap();
    assert_eq!(stx.operation, Operation::Store(Register::X));
    assert_eq!(stx.size_bytes, 3);

    let rts = lookup(op::RTS).unwrap();
    assert_eq!(rts.addressing_mode, AddressingMode::Implicit);
    assert_eq!(rts.size_bytes, 1);
}

#[test]
fn test_undecoded_opcodes() {
    // NOP, BRK, STX zp,Y and the unofficial LAX are outside this core
    for opcode in [0xEA, 0x00, 0x96, 0xA7] {
        assert!(lookup(opcode).is_none(), "opcode 0x{:02X}", opcode);
    }
}
