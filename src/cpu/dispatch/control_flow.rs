//! CALL/RET (and their documented duplicate opcodes) and RST n.

use crate::cpu::state::Cpu8080;
use crate::cpu::table::test_condition;

/// CALL a16 (0xCD), and its duplicates at 0xDD/0xED/0xFD.
pub(crate) fn call(cpu: &mut Cpu8080) -> u32 {
    let addr = cpu.imm16();
    cpu.call(addr);
    17
}

/// Ccc a16 (11CCC100): 11 cycles not taken, 17 taken.
pub(crate) fn ccc(cpu: &mut Cpu8080, opcode: u8) -> u32 {
    let cc = (opcode >> 3) & 0x7;
    let addr = cpu.imm16();
    if test_condition(cpu, cc) {
        cpu.call(addr);
        17
    } else {
        cpu.advance_pc(3);
        11
    }
}

/// RET (0xC9), and its duplicate at 0xD9.
pub(crate) fn ret(cpu: &mut Cpu8080) -> u32 {
    cpu.ret();
    10
}

/// Rcc (11CCC000): 5 cycles not taken, 11 taken.
pub(crate) fn rcc(cpu: &mut Cpu8080, opcode: u8) -> u32 {
    let cc = (opcode >> 3) & 0x7;
    if test_condition(cpu, cc) {
        cpu.ret();
        11
    } else {
        cpu.advance_pc(1);
        5
    }
}

/// RST n (11NNN111): called from the fetch/decode loop for a plain RST
/// instruction byte; `Cpu8080::generate_interrupt` is the separate path the
/// harness uses to inject one asynchronously.
pub(crate) fn rst(cpu: &mut Cpu8080, opcode: u8) -> u32 {
    let n = (opcode >> 3) & 0x7;
    cpu.rst(n);
    11
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
    fn call_pushes_the_return_address_and_jumps() {
        let mut cpu = cpu_with(&[0xCD, 0x00, 0x10]);
        let cycles = call(&mut cpu);
        assert_eq!(cpu.pc(), 0x1000);
        assert_eq!(cpu.sp(), 0x23FE);
        assert_eq!(cpu.read16(0x23FE), 0x0003);
        assert_eq!(cycles, 17);
    }

    #[test]
    fn ret_pops_the_return_address() {
        let mut cpu = cpu_with(&[0xC9]);
        cpu.push(0x10, 0x00);
        let cycles = ret(&mut cpu);
        assert_eq!(cpu.pc(), 0x1000);
        assert_eq!(cycles, 10);
    }

    #[test]
    fn cnz_not_taken_costs_eleven_and_does_not_touch_the_stack() {
        let mut cpu = cpu_with(&[0xC4, 0x00, 0x10]);
        cpu.flags.z = true;
        let cycles = ccc(&mut cpu, 0xC4);
        assert_eq!(cpu.pc(), 3);
        assert_eq!(cpu.sp(), 0x2400);
        assert_eq!(cycles, 11);
    }

    #[test]
    fn cnz_taken_costs_seventeen() {
        let mut cpu = cpu_with(&[0xC4, 0x00, 0x10]);
        cpu.flags.z = false;
        let cycles = ccc(&mut cpu, 0xC4);
        assert_eq!(cpu.pc(), 0x1000);
        assert_eq!(cycles, 17);
    }

    #[test]
    fn rst_2_targets_address_16() {
        let mut cpu = cpu_with(&[0xD7]);
        cpu.set_pc(0x0100);
        let cycles = rst(&mut cpu, 0xD7);
        assert_eq!(cpu.pc(), 0x0010);
        assert_eq!(cpu.read16(0x23FE), 0x0101); // PC+1, past the RST opcode byte
        assert_eq!(cycles, 11);
    }
}
