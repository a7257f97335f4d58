//! Inline program example
//!
//! Demonstrates the host workflow: reset the CPU against a flat memory, poke
//! a hand-assembled program in at the reset vector and run it with a cycle
//! budget.
//!
//! The program is:
//!
//! ```text
//! FFFC  JSR $4242
//! 4242  LDA #$84
//! 4244  RTS
//! FFFF  LDX $42
//! ```

use cpu6502::{op, Cpu, ExecutionError, Memory, RESET_VECTOR};

fn print_state(cpu: &Cpu) {
    println!("  PC: 0x{:04X}", cpu.pc());
    println!("  SP: 0x{:02X} (Stack: 0x{:04X})", cpu.sp(), cpu.stack_address());
    println!("  A:  0x{:02X}", cpu.a());
    println!("  X:  0x{:02X}", cpu.x());
    println!("  Y:  0x{:02X}", cpu.y());
    println!(
        "  Status: 0x{:02X} (NV-BDIZC: {:08b})",
        cpu.status(),
        cpu.status()
    );
    println!("  Cycles: {}\n", cpu.total_cycles());
}

fn main() {
    println!("6502 Load/Store Core - Inline Program Example");
    println!("=============================================\n");

    let mut memory = Memory::new();
    let mut cpu = Cpu::new();

    // Reset clears memory, so the program goes in afterwards
    cpu.reset(&mut memory);

    memory.load(RESET_VECTOR, &[op::JSR, 0x42, 0x42, op::LDX_ZEROPAGE]);
    memory.load(0x4242, &[op::LDA_IMMEDIATE, 0x84, op::RTS]);
    // LDX's operand wraps around to 0x0000
    memory[0x0000] = 0x42;
    memory[0x0042] = 0x07;

    println!("CPU Initial State:");
    println!("-----------------");
    print_state(&cpu);

    // JSR (6) + LDA (2) + RTS (6) + LDX zero page (3)
    let budget = 17;
    println!("Executing with a budget of {budget} cycles...\n");

    match cpu.execute(budget, &mut memory) {
        Ok(used) => println!("Used {used} cycles"),
        Err(ExecutionError::UnimplementedOpcode { opcode, address }) => {
            println!("Stopped on opcode 0x{opcode:02X} at 0x{address:04X}");
        }
    }

    println!("\nCPU Final State:");
    println!("---------------");
    print_state(&cpu);

    // Running on falls into zeroed memory, which does not decode
    println!("Executing one more instruction...");
    if let Err(err) = cpu.execute(1, &mut memory) {
        println!("  {err}");
    }
}
