/*!
Fetch/decode/execute loop (§4.4).

`step` fetches the opcode at the current PC, dispatches to the family
module that implements it, and returns the number of cycles consumed. Each
family function is responsible for updating PC itself (either by advancing
past its own operand bytes, or by setting PC directly for a taken jump).
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod stack_io;

use crate::cpu::regs::RegPair;

use super::state::Cpu8080;

/// Execute the single instruction at the current PC, returning its cycle
/// cost. `cycles_completed` is always incremented by at least 4 (the
/// cheapest instruction on the chip).
pub fn step(cpu: &mut Cpu8080) -> u32 {
    let opcode = cpu.read(cpu.pc());
    let cycles = execute(cpu, opcode);
    cpu.cycles_completed += cycles as u64;
    cycles
}

fn execute(cpu: &mut Cpu8080, opcode: u8) -> u32 {
    if (0x40..=0x7F).contains(&opcode) {
        return if opcode == 0x76 {
            misc::hlt(cpu)
        } else {
            load_store::mov(cpu, opcode)
        };
    }
    if (0x80..=0xBF).contains(&opcode) {
        return arithmetic::alu_reg(cpu, opcode);
    }
    // NOP and its duplicates, including the 8085-only RIM (0x20) / SIM
    // (0x30) slots, which this CPU treats as coincidental no-ops.
    if opcode & 0xC7 == 0x00 {
        return misc::nop(cpu);
    }

    match opcode {
        0x01 | 0x11 | 0x21 | 0x31 => load_store::lxi(cpu, opcode),
        0x02 => load_store::stax(cpu, RegPair::Bc),
        0x12 => load_store::stax(cpu, RegPair::De),
        0x03 | 0x13 | 0x23 | 0x33 => arithmetic::inx(cpu, opcode),
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => arithmetic::inr(cpu, opcode),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => arithmetic::dcr(cpu, opcode),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => load_store::mvi(cpu, opcode),
        0x07 => logical::rlc(cpu),
        0x09 | 0x19 | 0x29 | 0x39 => arithmetic::dad(cpu, opcode),
        0x0A => load_store::ldax(cpu, RegPair::Bc),
        0x1A => load_store::ldax(cpu, RegPair::De),
        0x0B | 0x1B | 0x2B | 0x3B => arithmetic::dcx(cpu, opcode),
        0x0F => logical::rrc(cpu),
        0x17 => logical::ral(cpu),
        0x1F => logical::rar(cpu),
        0x22 => load_store::shld(cpu),
        0x27 => arithmetic::daa(cpu),
        0x2A => load_store::lhld(cpu),
        0x2F => logical::cma(cpu),
        0x32 => load_store::sta(cpu),
        0x37 => logical::stc(cpu),
        0x3A => load_store::lda(cpu),
        0x3F => logical::cmc(cpu),

        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => control_flow::rcc(cpu, opcode),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => stack_io::pop(cpu, opcode),
        0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => branches::jcc(cpu, opcode),
        0xC3 | 0xCB => branches::jmp(cpu),
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => control_flow::ccc(cpu, opcode),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => stack_io::push(cpu, opcode),
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => arithmetic::alu_imm(cpu, opcode),
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => control_flow::rst(cpu, opcode),
        0xC9 | 0xD9 => control_flow::ret(cpu),
        0xCD | 0xDD | 0xED | 0xFD => control_flow::call(cpu),
        0xD3 => stack_io::output(cpu),
        0xDB => stack_io::input(cpu),
        0xE3 => stack_io::xthl(cpu),
        0xE9 => branches::pchl(cpu),
        0xEB => load_store::xchg(cpu),
        0xF3 => misc::di(cpu),
        0xF9 => stack_io::sphl(cpu),
        0xFB => misc::ei(cpu),

        _ => unreachable!("opcode {opcode:#04x} is covered by an earlier arm"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;

    fn cpu_with(program: &[u8]) -> Cpu8080 {
        let mut cpu = Cpu8080::initialize(Box::new(NullSink), program).unwrap();
        cpu.set_sp(0x2400);
        cpu
    }

    #[test]
    fn step_executes_a_simple_immediate_load() {
        let mut cpu = cpu_with(&[0x3E, 0x42]); // MVI A, 0x42
        let cycles = step(&mut cpu);
        assert_eq!(cpu.regs().a, 0x42);
        assert_eq!(cpu.pc(), 2);
        assert_eq!(cycles, 7);
        assert_eq!(cpu.cycles_completed(), 7);
    }

    #[test]
    fn step_accumulates_cycles_across_instructions() {
        let mut cpu = cpu_with(&[0x00, 0x00, 0x00]); // NOP x3
        step(&mut cpu);
        step(&mut cpu);
        step(&mut cpu);
        assert_eq!(cpu.cycles_completed(), 12);
        assert_eq!(cpu.pc(), 3);
    }

    #[test]
    fn step_dispatches_a_conditional_jump() {
        let mut cpu = cpu_with(&[0xCA, 0x00, 0x10]); // JZ 0x1000
        cpu.flags.z = true;
        let cycles = step(&mut cpu);
        assert_eq!(cpu.pc(), 0x1000);
        assert_eq!(cycles, 10);
    }

    #[test]
    fn step_every_opcode_advances_cycles_by_at_least_four() {
        for opcode in 0u16..=255 {
            let mut cpu = cpu_with(&[opcode as u8, 0x00, 0x00]);
            cpu.set_pc(0);
            let cycles = step(&mut cpu);
            assert!(cycles >= 4, "opcode {opcode:#04x} reported {cycles} cycles");
        }
    }
}
