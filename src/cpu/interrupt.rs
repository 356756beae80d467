/*!
Interrupt injection (§4.5).

`generate_interrupt` is the only way an RST gets dispatched outside of the
normal fetch/decode loop: the harness calls it directly at known cycle
offsets within a frame, rather than the CPU polling an IRQ line each step.
*/

use crate::diagnostics::Diagnostic;

use super::state::Cpu8080;

impl Cpu8080 {
    /// Dispatch RST `n` (`n` in 0..=7) if and only if interrupts are
    /// currently enabled; otherwise the request is dropped (reported, not
    /// an error) and nothing about the CPU state changes. `n >= 8` is
    /// rejected outright as `InvalidInterrupt` without touching
    /// `interrupts_enabled`.
    ///
    /// Unlike the RST *instruction* (which pushes `PC + 1` to skip past its
    /// own opcode byte), an interrupt pushes the current PC unmodified: it
    /// lands between instructions, so there is no opcode to skip. A halted
    /// CPU resumes on dispatch, matching real 8080 behavior.
    pub fn generate_interrupt(&mut self, n: u8) {
        if n >= 8 {
            self.report(Diagnostic::InvalidInterrupt { n });
            return;
        }
        if !self.interrupts_enabled {
            self.report(Diagnostic::InterruptMasked { n });
            return;
        }
        self.interrupts_enabled = false;
        self.halted = false;
        let ret = self.pc();
        let [hi, lo] = ret.to_be_bytes();
        self.push(hi, lo);
        self.jmp(8 * n as u16);
    }
}
