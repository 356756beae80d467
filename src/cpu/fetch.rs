/*!
Fetch helpers shared by every dispatch family: reading the operand bytes
that follow an opcode, and the default (non-branching) PC advance.
*/

use super::state::Cpu8080;

impl Cpu8080 {
    /// The byte at `PC + 1` (the single operand byte of a 2-byte instruction).
    pub(crate) fn imm8(&self) -> u8 {
        self.read(self.pc().wrapping_add(1))
    }

    /// The little-endian 16-bit operand of a 3-byte instruction
    /// (`PC+1` = low byte, `PC+2` = high byte).
    pub(crate) fn imm16(&self) -> u16 {
        u16::from_le_bytes([self.read(self.pc().wrapping_add(1)), self.read(self.pc().wrapping_add(2))])
    }

    /// `PC += size`, for every instruction that doesn't explicitly set PC.
    pub(crate) fn advance_pc(&mut self, size: u16) {
        let pc = self.pc().wrapping_add(size);
        self.set_pc(pc);
    }
}
