/*!
Opcode metadata and shared decode helpers.

`opcode_info` gives the mnemonic, size, and base cycle cost for any of the
256 opcodes — used by the panic-diagnostic path (so a (theoretically
unreachable) unimplemented-opcode abort can name what it choked on) and by
tests that want to assert cycle counts without duplicating them. The actual
flag/PC semantics live in `cpu::dispatch`; this module only names things.
*/

use super::regs::RegPair;
use super::state::Cpu8080;

/// Register code used by MOV/MVI/INR/DCR/ALU-reg opcodes: 0=B,1=C,2=D,3=E,
/// 4=H,5=L,6=M (memory via HL),7=A.
#[inline]
pub fn reg_read(cpu: &Cpu8080, code: u8) -> u8 {
    match code & 0x7 {
        0 => cpu.regs().b,
        1 => cpu.regs().c,
        2 => cpu.regs().d,
        3 => cpu.regs().e,
        4 => cpu.regs().h,
        5 => cpu.regs().l,
        6 => cpu.mov_from_hl(),
        7 => cpu.regs().a,
        _ => unreachable!(),
    }
}

#[inline]
pub fn reg_write(cpu: &mut Cpu8080, code: u8, value: u8) {
    match code & 0x7 {
        0 => cpu.regs.b = value,
        1 => cpu.regs.c = value,
        2 => cpu.regs.d = value,
        3 => cpu.regs.e = value,
        4 => cpu.regs.h = value,
        5 => cpu.regs.l = value,
        6 => cpu.mov_to_hl(value),
        7 => cpu.regs.a = value,
        _ => unreachable!(),
    }
}

/// RP code used by LXI/INX/DCX/DAD/STAX/LDAX: 0=BC,1=DE,2=HL,3=SP.
#[inline]
pub fn reg_pair_sp(code: u8) -> RegPair {
    match code & 0x3 {
        0 => RegPair::Bc,
        1 => RegPair::De,
        2 => RegPair::Hl,
        _ => panic!("register-pair code 3 (SP) has no RegPair::Sp; callers handling LXI/INX/DCX/DAD must special-case it"),
    }
}

/// RP code used by PUSH/POP: 0=BC,1=DE,2=HL,3=PSW.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StackPair {
    Bc,
    De,
    Hl,
    Psw,
}

#[inline]
pub fn stack_pair(code: u8) -> StackPair {
    match code & 0x3 {
        0 => StackPair::Bc,
        1 => StackPair::De,
        2 => StackPair::Hl,
        _ => StackPair::Psw,
    }
}

/// The eight 3-bit condition codes shared by Jcc/Ccc/Rcc.
#[inline]
pub fn test_condition(cpu: &Cpu8080, cc: u8) -> bool {
    let f = cpu.flags();
    match cc & 0x7 {
        0 => !f.z,     // NZ
        1 => f.z,      // Z
        2 => !f.cy,    // NC
        3 => f.cy,     // C
        4 => !f.p,     // PO (odd parity)
        5 => f.p,      // PE (even parity)
        6 => !f.s,     // P (plus / non-negative)
        7 => f.s,      // M (minus)
        _ => unreachable!(),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub size: u8,
    /// Cycle cost; for conditional CALL/RET/branch opcodes this is the
    /// not-taken cost, with `cycles_taken` holding the taken cost.
    pub cycles: u8,
    pub cycles_taken: Option<u8>,
}

const fn info(mnemonic: &'static str, size: u8, cycles: u8) -> OpcodeInfo {
    OpcodeInfo { mnemonic, size, cycles, cycles_taken: None }
}

const fn info_branch(mnemonic: &'static str, size: u8, cycles: u8, taken: u8) -> OpcodeInfo {
    OpcodeInfo { mnemonic, size, cycles, cycles_taken: Some(taken) }
}

/// Metadata for any of the 256 opcodes. Every byte value has a defined
/// entry; this function (rather than a 256-element array literal) is the
/// authoritative source so the mnemonic/size/cycle numbers live next to the
/// bit-pattern reasoning instead of as 256 hand-transcribed struct literals.
pub fn opcode_info(opcode: u8) -> OpcodeInfo {
    // MOV d,s (0x40-0x7F), HLT at 0x76.
    if (0x40..=0x7F).contains(&opcode) {
        return if opcode == 0x76 {
            info("HLT", 1, 7)
        } else {
            let src_is_m = opcode & 0x7 == 6;
            let dst_is_m = (opcode >> 3) & 0x7 == 6;
            info("MOV", 1, if src_is_m || dst_is_m { 7 } else { 5 })
        };
    }
    // ALU reg ops (0x80-0xBF).
    if (0x80..=0xBF).contains(&opcode) {
        const NAMES: [&str; 8] = ["ADD", "ADC", "SUB", "SBB", "ANA", "XRA", "ORA", "CMP"];
        let op = ((opcode >> 3) & 0x7) as usize;
        let is_m = opcode & 0x7 == 6;
        return info(NAMES[op], 1, if is_m { 7 } else { 4 });
    }
    // NOP duplicates (incl. the 8085-only RIM/SIM slots, treated as no-ops).
    if opcode & 0xC7 == 0x00 {
        return info("NOP", 1, 4);
    }
    match opcode {
        0x01 => info("LXI B,d16", 3, 10),
        0x02 => info("STAX B", 1, 7),
        0x03 => info("INX B", 1, 5),
        0x04 => info("INR B", 1, 5),
        0x05 => info("DCR B", 1, 5),
        0x06 => info("MVI B,d8", 2, 7),
        0x07 => info("RLC", 1, 4),
        0x09 => info("DAD B", 1, 10),
        0x0A => info("LDAX B", 1, 7),
        0x0B => info("DCX B", 1, 5),
        0x0C => info("INR C", 1, 5),
        0x0D => info("DCR C", 1, 5),
        0x0E => info("MVI C,d8", 2, 7),
        0x0F => info("RRC", 1, 4),
        0x11 => info("LXI D,d16", 3, 10),
        0x12 => info("STAX D", 1, 7),
        0x13 => info("INX D", 1, 5),
        0x14 => info("INR D", 1, 5),
        0x15 => info("DCR D", 1, 5),
        0x16 => info("MVI D,d8", 2, 7),
        0x17 => info("RAL", 1, 4),
        0x19 => info("DAD D", 1, 10),
        0x1A => info("LDAX D", 1, 7),
        0x1B => info("DCX D", 1, 5),
        0x1C => info("INR E", 1, 5),
        0x1D => info("DCR E", 1, 5),
        0x1E => info("MVI E,d8", 2, 7),
        0x1F => info("RAR", 1, 4),
        0x21 => info("LXI H,d16", 3, 10),
        0x22 => info("SHLD a16", 3, 16),
        0x23 => info("INX H", 1, 5),
        0x24 => info("INR H", 1, 5),
        0x25 => info("DCR H", 1, 5),
        0x26 => info("MVI H,d8", 2, 7),
        0x27 => info("DAA", 1, 4),
        0x29 => info("DAD H", 1, 10),
        0x2A => info("LHLD a16", 3, 16),
        0x2B => info("DCX H", 1, 5),
        0x2C => info("INR L", 1, 5),
        0x2D => info("DCR L", 1, 5),
        0x2E => info("MVI L,d8", 2, 7),
        0x2F => info("CMA", 1, 4),
        0x31 => info("LXI SP,d16", 3, 10),
        0x32 => info("STA a16", 3, 13),
        0x33 => info("INX SP", 1, 5),
        0x34 => info("INR M", 1, 10),
        0x35 => info("DCR M", 1, 10),
        0x36 => info("MVI M,d8", 2, 10),
        0x37 => info("STC", 1, 4),
        0x39 => info("DAD SP", 1, 10),
        0x3A => info("LDA a16", 3, 13),
        0x3B => info("DCX SP", 1, 5),
        0x3C => info("INR A", 1, 5),
        0x3D => info("DCR A", 1, 5),
        0x3E => info("MVI A,d8", 2, 7),
        0x3F => info("CMC", 1, 4),

        0xC0 => info_branch("RNZ", 1, 5, 11),
        0xC1 => info("POP B", 1, 10),
        0xC2 => info_branch("JNZ a16", 3, 10, 10),
        0xC3 => info("JMP a16", 3, 10),
        0xC4 => info_branch("CNZ a16", 3, 11, 17),
        0xC5 => info("PUSH B", 1, 11),
        0xC6 => info("ADI d8", 2, 7),
        0xC7 => info("RST 0", 1, 11),
        0xC8 => info_branch("RZ", 1, 5, 11),
        0xC9 => info("RET", 1, 10),
        0xCA => info_branch("JZ a16", 3, 10, 10),
        0xCB => info("JMP a16", 3, 10), // duplicate of 0xC3
        0xCC => info_branch("CZ a16", 3, 11, 17),
        0xCD => info("CALL a16", 3, 17),
        0xCE => info("ACI d8", 2, 7),
        0xCF => info("RST 1", 1, 11),

        0xD0 => info_branch("RNC", 1, 5, 11),
        0xD1 => info("POP D", 1, 10),
        0xD2 => info_branch("JNC a16", 3, 10, 10),
        0xD3 => info("OUT d8", 2, 10),
        0xD4 => info_branch("CNC a16", 3, 11, 17),
        0xD5 => info("PUSH D", 1, 11),
        0xD6 => info("SUI d8", 2, 7),
        0xD7 => info("RST 2", 1, 11),
        0xD8 => info_branch("RC", 1, 5, 11),
        0xD9 => info("RET", 1, 10), // duplicate of 0xC9
        0xDA => info_branch("JC a16", 3, 10, 10),
        0xDB => info("IN d8", 2, 10),
        0xDC => info_branch("CC a16", 3, 11, 17),
        0xDD => info("CALL a16", 3, 17), // duplicate of 0xCD
        0xDE => info("SBI d8", 2, 7),
        0xDF => info("RST 3", 1, 11),

        0xE0 => info_branch("RPO", 1, 5, 11),
        0xE1 => info("POP H", 1, 10),
        0xE2 => info_branch("JPO a16", 3, 10, 10),
        0xE3 => info("XTHL", 1, 18),
        0xE4 => info_branch("CPO a16", 3, 11, 17),
        0xE5 => info("PUSH H", 1, 11),
        0xE6 => info("ANI d8", 2, 7),
        0xE7 => info("RST 4", 1, 11),
        0xE8 => info_branch("RPE", 1, 5, 11),
        0xE9 => info("PCHL", 1, 5),
        0xEA => info_branch("JPE a16", 3, 10, 10),
        0xEB => info("XCHG", 1, 5),
        0xEC => info_branch("CPE a16", 3, 11, 17),
        0xED => info("CALL a16", 3, 17), // duplicate of 0xCD
        0xEE => info("XRI d8", 2, 7),
        0xEF => info("RST 5", 1, 11),

        0xF0 => info_branch("RP", 1, 5, 11),
        0xF1 => info("POP PSW", 1, 10),
        0xF2 => info_branch("JP a16", 3, 10, 10),
        0xF3 => info("DI", 1, 4),
        0xF4 => info_branch("CP a16", 3, 11, 17),
        0xF5 => info("PUSH PSW", 1, 11),
        0xF6 => info("ORI d8", 2, 7),
        0xF7 => info("RST 6", 1, 11),
        0xF8 => info_branch("RM", 1, 5, 11),
        0xF9 => info("SPHL", 1, 5),
        0xFA => info_branch("JM a16", 3, 10, 10),
        0xFB => info("EI", 1, 4),
        0xFC => info_branch("CM a16", 3, 11, 17),
        0xFD => info("CALL a16", 3, 17), // duplicate of 0xCD
        0xFE => info("CPI d8", 2, 7),
        0xFF => info("RST 7", 1, 11),

        _ => unreachable!("opcode {opcode:#04x} is covered by an earlier arm"),
    }
}
