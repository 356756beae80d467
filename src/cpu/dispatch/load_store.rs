//! MOV/MVI/LXI/STAX/LDAX/STA/LDA/SHLD/LHLD/XCHG.

use crate::cpu::regs::RegPair;
use crate::cpu::state::Cpu8080;
use crate::cpu::table::{reg_pair_sp, reg_read, reg_write};

/// 0x40-0x7F except 0x76 (HLT, handled by `misc::hlt`).
pub(crate) fn mov(cpu: &mut Cpu8080, opcode: u8) -> u32 {
    let dst = (opcode >> 3) & 0x7;
    let src = opcode & 0x7;
    let value = reg_read(cpu, src);
    reg_write(cpu, dst, value);
    cpu.advance_pc(1);
    if dst == 6 || src == 6 { 7 } else { 5 }
}

/// MVI r,d8 (00DDD110).
pub(crate) fn mvi(cpu: &mut Cpu8080, opcode: u8) -> u32 {
    let dst = (opcode >> 3) & 0x7;
    let value = cpu.imm8();
    reg_write(cpu, dst, value);
    cpu.advance_pc(2);
    if dst == 6 { 10 } else { 7 }
}

/// LXI rp,d16 (00RP0001, RP in {BC, DE, HL, SP}).
pub(crate) fn lxi(cpu: &mut Cpu8080, opcode: u8) -> u32 {
    let rp = (opcode >> 4) & 0x3;
    let value = cpu.imm16();
    if rp == 3 {
        cpu.set_sp(value);
    } else {
        cpu.set_pair(reg_pair_sp(rp), value);
    }
    cpu.advance_pc(3);
    10
}

/// STAX B / STAX D: store A at the address in BC/DE.
pub(crate) fn stax(cpu: &mut Cpu8080, pair: RegPair) -> u32 {
    let addr = cpu.pair(pair);
    let a = cpu.regs().a;
    cpu.write(addr, a);
    cpu.advance_pc(1);
    7
}

/// LDAX B / LDAX D: load A from the address in BC/DE.
pub(crate) fn ldax(cpu: &mut Cpu8080, pair: RegPair) -> u32 {
    let addr = cpu.pair(pair);
    cpu.regs.a = cpu.read(addr);
    cpu.advance_pc(1);
    7
}

pub(crate) fn sta(cpu: &mut Cpu8080) -> u32 {
    let addr = cpu.imm16();
    let a = cpu.regs().a;
    cpu.write(addr, a);
    cpu.advance_pc(3);
    13
}

pub(crate) fn lda(cpu: &mut Cpu8080) -> u32 {
    let addr = cpu.imm16();
    cpu.regs.a = cpu.read(addr);
    cpu.advance_pc(3);
    13
}

pub(crate) fn shld(cpu: &mut Cpu8080) -> u32 {
    let addr = cpu.imm16();
    let (h, l) = (cpu.regs().h, cpu.regs().l);
    cpu.write(addr, l);
    cpu.write(addr.wrapping_add(1), h);
    cpu.advance_pc(3);
    16
}

pub(crate) fn lhld(cpu: &mut Cpu8080) -> u32 {
    let addr = cpu.imm16();
    let l = cpu.read(addr);
    let h = cpu.read(addr.wrapping_add(1));
    cpu.regs.l = l;
    cpu.regs.h = h;
    cpu.advance_pc(3);
    16
}

pub(crate) fn xchg(cpu: &mut Cpu8080) -> u32 {
    let de = cpu.pair(RegPair::De);
    let hl = cpu.pair(RegPair::Hl);
    cpu.set_pair(RegPair::De, hl);
    cpu.set_pair(RegPair::Hl, de);
    cpu.advance_pc(1);
    5
}
