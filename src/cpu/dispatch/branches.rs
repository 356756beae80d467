//! JMP and the eight conditional Jcc, plus PCHL.

use crate::cpu::regs::RegPair;
use crate::cpu::state::Cpu8080;
use crate::cpu::table::test_condition;

/// JMP a16 (0xC3), and its duplicate at 0xCB.
pub(crate) fn jmp(cpu: &mut Cpu8080) -> u32 {
    let addr = cpu.imm16();
    cpu.jmp(addr);
    10
}

/// Jcc a16 (11CCC010): branch cost is always 10, taken or not — only
/// CALL/RET vary by outcome.
pub(crate) fn jcc(cpu: &mut Cpu8080, opcode: u8) -> u32 {
    let cc = (opcode >> 3) & 0x7;
    let addr = cpu.imm16();
    if test_condition(cpu, cc) {
        cpu.jmp(addr);
    } else {
        cpu.advance_pc(3);
    }
    10
}

/// PCHL: PC <- HL.
pub(crate) fn pchl(cpu: &mut Cpu8080) -> u32 {
    let hl = cpu.pair(RegPair::Hl);
    cpu.jmp(hl);
    5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;

    fn cpu_with(program: &[u8]) -> Cpu8080 {
        Cpu8080::initialize(Box::new(NullSink), program).unwrap()
    }

    #[test]
    fn jmp_sets_pc_directly() {
        let mut cpu = cpu_with(&[0xC3, 0x00, 0x10]);
        jmp(&mut cpu);
        assert_eq!(cpu.pc(), 0x1000);
    }

    #[test]
    fn jnz_branches_when_zero_is_clear() {
        let mut cpu = cpu_with(&[0xC2, 0x00, 0x10]);
        cpu.flags.z = false;
        jcc(&mut cpu, 0xC2);
        assert_eq!(cpu.pc(), 0x1000);
    }

    #[test]
    fn jnz_falls_through_when_zero_is_set() {
        let mut cpu = cpu_with(&[0xC2, 0x00, 0x10]);
        cpu.flags.z = true;
        jcc(&mut cpu, 0xC2);
        assert_eq!(cpu.pc(), 3);
    }

    #[test]
    fn pchl_jumps_to_hl_without_touching_the_stack() {
        let mut cpu = cpu_with(&[0xE9]);
        cpu.set_sp(0x2400);
        cpu.set_pair(RegPair::Hl, 0x4000);
        pchl(&mut cpu);
        assert_eq!(cpu.pc(), 0x4000);
        assert_eq!(cpu.sp(), 0x2400);
    }
}
