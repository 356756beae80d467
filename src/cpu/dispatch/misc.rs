//! NOP, HLT, DI, EI.

use crate::cpu::state::Cpu8080;

pub(crate) fn nop(cpu: &mut Cpu8080) -> u32 {
    cpu.advance_pc(1);
    4
}

pub(crate) fn hlt(cpu: &mut Cpu8080) -> u32 {
    cpu.halted = true;
    cpu.advance_pc(1);
    7
}

pub(crate) fn di(cpu: &mut Cpu8080) -> u32 {
    cpu.interrupts_enabled = false;
    cpu.advance_pc(1);
    4
}

pub(crate) fn ei(cpu: &mut Cpu8080) -> u32 {
    cpu.interrupts_enabled = true;
    cpu.advance_pc(1);
    4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;

    fn cpu_with(program: &[u8]) -> Cpu8080 {
        Cpu8080::initialize(Box::new(NullSink), program).unwrap()
    }

    #[test]
    fn hlt_sets_the_halted_flag() {
        let mut cpu = cpu_with(&[0x76]);
        hlt(&mut cpu);
        assert!(cpu.halted());
    }

    #[test]
    fn di_ei_toggle_the_interrupt_enable_latch() {
        let mut cpu = cpu_with(&[0xFB, 0xF3]);
        ei(&mut cpu);
        assert!(cpu.interrupts_enabled());
        cpu.set_pc(0);
        di(&mut cpu);
        assert!(!cpu.interrupts_enabled());
    }

    #[test]
    fn nop_only_advances_pc() {
        let mut cpu = cpu_with(&[0x00]);
        let cycles = nop(&mut cpu);
        assert_eq!(cpu.pc(), 1);
        assert_eq!(cycles, 4);
    }
}
