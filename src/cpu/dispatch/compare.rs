//! CMP/CPI: compare without storing the result back to A.

use crate::cpu::state::Cpu8080;

/// Called from `arithmetic::alu_reg`'s ALU-op dispatch.
pub(crate) fn cmp(cpu: &mut Cpu8080, operand: u8) {
    cpu.cmp_a(operand);
}
