//! Property-based tests for addressing mode calculations.
//!
//! These tests verify that effective addresses and cycle costs follow the
//! zero-page wraparound and page-crossing rules for every base/index pair.

use cpu6502::{op, Cpu, Memory};
use proptest::prelude::*;

/// Helper function to reset a CPU with execution starting at 0x0200
fn setup_cpu() -> (Cpu, Memory) {
    let mut memory = Memory::new();
    let mut cpu = Cpu::new();
    cpu.reset_to(0x0200, &mut memory);
    (cpu, memory)
}

proptest! {
    /// Property: Zero page,X addressing wraps within zero page (stays in 0x00-0xFF)
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(
        base in 0u8..=255u8,
        x in 0u8..=255u8,
        value in 0u8..=255u8,
    ) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_x(x);
        let effective = u16::from(base.wrapping_add(x));
        memory[effective] = value;
        memory.load(0x0200, &[op::LDA_ZEROPAGE_X, base]);

        let cycles = cpu.execute(4, &mut memory).unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cycles, 4);
    }

    /// Property: Zero page,X stores land inside zero page
    #[test]
    fn prop_zero_page_x_store_wraps(base in 0u8..=255u8, x in 0u8..=255u8, value in 0u8..=255u8) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_x(x);
        cpu.set_a(value);
        memory.load(0x0200, &[op::STA_ZEROPAGE_X, base]);

        let cycles = cpu.execute(4, &mut memory).unwrap();

        prop_assert_eq!(memory[u16::from(base.wrapping_add(x))], value);
        prop_assert_eq!(cycles, 4);
    }

    /// Property: Absolute,X reads pay one extra cycle exactly when the low byte carries
    #[test]
    fn prop_absolute_x_page_cross_penalty(base in 0x1000u16..=0xEFFFu16, x in 0u8..=255u8) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_x(x);
        let [lo, hi] = base.to_le_bytes();
        memory.load(0x0200, &[op::LDA_ABSOLUTE_X, lo, hi]);
        let effective = base + u16::from(x);
        memory[effective] = 0x5A;

        let cycles = cpu.execute(1, &mut memory).unwrap();

        let crossed = u16::from(lo) + u16::from(x) > 0xFF;
        prop_assert_eq!(cycles, if crossed { 5 } else { 4 });
        prop_assert_eq!(cpu.a(), 0x5A);
    }

    /// Property: Absolute,Y stores always cost 5 cycles
    #[test]
    fn prop_absolute_y_store_is_always_five_cycles(base in 0x1000u16..=0xEFFFu16, y in 0u8..=255u8) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_y(y);
        cpu.set_a(0xA5);
        let [lo, hi] = base.to_le_bytes();
        memory.load(0x0200, &[op::STA_ABSOLUTE_Y, lo, hi]);

        let cycles = cpu.execute(1, &mut memory).unwrap();

        prop_assert_eq!(cycles, 5);
        prop_assert_eq!(memory[base + u16::from(y)], 0xA5);
    }

    /// Property: (zp),Y reads pay one extra cycle exactly when the low byte carries
    #[test]
    fn prop_indirect_y_page_cross_penalty(
        zp in 0x10u8..=0xF0u8,
        pointer in 0x1000u16..=0xEFFFu16,
        y in 0u8..=255u8,
    ) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_y(y);
        let [lo, hi] = pointer.to_le_bytes();
        memory[u16::from(zp)] = lo;
        memory[u16::from(zp) + 1] = hi;
        memory[pointer + u16::from(y)] = 0x3C;
        memory.load(0x0200, &[op::LDA_INDIRECT_Y, zp]);

        let cycles = cpu.execute(1, &mut memory).unwrap();

        let crossed = u16::from(lo) + u16::from(y) > 0xFF;
        prop_assert_eq!(cycles, if crossed { 6 } else { 5 });
        prop_assert_eq!(cpu.a(), 0x3C);
    }

    /// Property: (zp,X) always costs 6 cycles and indexes the pointer within zero page
    #[test]
    fn prop_indirect_x_pointer_in_zero_page(zp in 0u8..=255u8, x in 0u8..=255u8) {
        let (mut cpu, mut memory) = setup_cpu();
        cpu.set_x(x);
        let pointer = zp.wrapping_add(x);
        // Keep the pointer bytes clear of the target and the program
        prop_assume!(pointer != 0xFF);
        memory[u16::from(pointer)] = 0x00;
        memory[u16::from(pointer) + 1] = 0x30;
        memory[0x3000] = 0x81;
        memory.load(0x0200, &[op::LDA_INDIRECT_X, zp]);

        let cycles = cpu.execute(1, &mut memory).unwrap();

        prop_assert_eq!(cycles, 6);
        prop_assert_eq!(cpu.a(), 0x81);
        prop_assert!(cpu.flags().negative);
    }
}
