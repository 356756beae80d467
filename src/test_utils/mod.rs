/*!
Shared test-data builders, in the spirit of the teacher's own test fixtures:
small, hand-assembled programs and padded ROM images rather than real
copyrighted binaries.
*/

use crate::cpu::Cpu8080;
use crate::diagnostics::NullSink;

/// Pad `program` out to `ROM_END` bytes (8 KiB) with trailing NOPs, the
/// shape every real Space Invaders ROM image has.
pub fn padded_rom(program: &[u8]) -> Vec<u8> {
    let mut rom = program.to_vec();
    rom.resize(crate::memory::ROM_END as usize, 0x00);
    rom
}

/// A CPU freshly initialized from `program`, dropping all diagnostics.
pub fn cpu_from(program: &[u8]) -> Cpu8080 {
    Cpu8080::initialize(Box::new(NullSink), program).unwrap()
}

/// A CPU initialized from `program` with the stack pointer set to the
/// cabinet's conventional top-of-RAM value, matching the worked examples
/// in SPEC_FULL.md §8.
pub fn cpu_with_stack(program: &[u8]) -> Cpu8080 {
    let mut cpu = cpu_from(program);
    cpu.set_sp(0x2400);
    cpu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_rom_fills_out_to_rom_end() {
        let rom = padded_rom(&[0xC3, 0x00, 0x10]);
        assert_eq!(rom.len(), crate::memory::ROM_END as usize);
        assert_eq!(&rom[..3], &[0xC3, 0x00, 0x10]);
        assert_eq!(rom[3], 0x00);
    }

    #[test]
    fn cpu_with_stack_starts_at_the_conventional_top_of_ram() {
        let cpu = cpu_with_stack(&[0x00]);
        assert_eq!(cpu.sp(), 0x2400);
    }
}
