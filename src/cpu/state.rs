/*!
Intel 8080 CPU state: registers, flags, memory, I/O buffers, and the
interrupt-enable latch, plus the handful of accessors the dispatcher and
the arcade harness both need.
*/

use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink};
use crate::memory::Memory;

use super::regs::{Flags, RegPair, Registers};

/// Number of cabinet input ports the CPU exposes (0..=3).
pub const INPUT_PORT_COUNT: usize = 4;
/// Number of cabinet output ports the CPU exposes (0..=6; 0 and 1 unused).
pub const OUTPUT_PORT_COUNT: usize = 7;

pub struct Cpu8080 {
    pub(crate) regs: Registers,
    pub(crate) flags: Flags,
    pub(crate) mem: Memory,
    pub(crate) interrupts_enabled: bool,
    pub(crate) cycles_completed: u64,
    pub(crate) halted: bool,
    input_ports: [u8; INPUT_PORT_COUNT],
    output_ports: [u8; OUTPUT_PORT_COUNT],
    output_port_writes: [u64; OUTPUT_PORT_COUNT],
    sink: Box<dyn DiagnosticSink>,
}

impl Cpu8080 {
    /// All-zero state (registers, flags, SP, PC, buffers, cycle counter) with
    /// interrupts disabled and no ROM loaded yet, reporting diagnostics to
    /// `sink`.
    pub fn new(sink: Box<dyn DiagnosticSink>) -> Self {
        Cpu8080 {
            regs: Registers::new(),
            flags: Flags::new(),
            mem: Memory::new(),
            interrupts_enabled: false,
            cycles_completed: 0,
            halted: false,
            input_ports: [0; INPUT_PORT_COUNT],
            output_ports: [0; OUTPUT_PORT_COUNT],
            output_port_writes: [0; OUTPUT_PORT_COUNT],
            sink,
        }
    }

    /// Construct a CPU that drops every diagnostic (the spec's default).
    pub fn with_null_sink() -> Self {
        Self::new(Box::new(NullSink))
    }

    /// Load a ROM image and zero everything else: registers, flags, SP, PC,
    /// I/O buffers, and the cycle counter, with interrupts disabled. This is
    /// the `initialize` lifecycle operation.
    pub fn initialize(sink: Box<dyn DiagnosticSink>, rom: &[u8]) -> Result<Self, String> {
        let mut cpu = Self::new(sink);
        cpu.load_rom(rom)?;
        Ok(cpu)
    }

    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), String> {
        self.mem.load_rom(rom)
    }

    /// Zero PC, SP, and `interrupts_enabled`. Memory and registers retain
    /// their previous values (see SPEC_FULL.md §4.4 on why we pick zero for
    /// determinism rather than leaving RAM indeterminate).
    pub fn reset(&mut self) {
        self.regs.pc = 0;
        self.regs.sp = 0;
        self.interrupts_enabled = false;
        self.halted = false;
    }

    // ----- raw memory access -----

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.mem.read(addr)
    }

    #[inline]
    pub fn read16(&self, addr: u16) -> u16 {
        self.mem.read16(addr)
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.mem.write(addr, value, self.sink.as_mut());
    }

    pub fn snapshot_vram(&self) -> [u8; crate::memory::VRAM_LEN] {
        self.mem.snapshot_vram()
    }

    // ----- registers / flags -----

    pub fn regs(&self) -> &Registers {
        &self.regs
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.regs.pc = pc;
    }

    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    pub fn set_sp(&mut self, sp: u16) {
        self.regs.sp = sp;
    }

    pub fn pair(&self, which: RegPair) -> u16 {
        self.regs.pair(which)
    }

    pub fn set_pair(&mut self, which: RegPair, value: u16) {
        self.regs.set_pair(which, value)
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    pub(crate) fn report(&mut self, event: Diagnostic) {
        self.sink.report(event);
    }

    // ----- cabinet I/O buffers -----

    pub fn input_port(&self, n: usize) -> u8 {
        self.input_ports[n]
    }

    pub fn set_input_port(&mut self, n: usize, value: u8) {
        self.input_ports[n] = value;
    }

    pub fn output_port(&self, n: usize) -> u8 {
        self.output_ports[n]
    }

    pub(crate) fn set_output_port(&mut self, n: usize, value: u8) {
        self.output_ports[n] = value;
        self.output_port_writes[n] = self.output_port_writes[n].wrapping_add(1);
    }

    /// Number of times `OUT` has targeted port `n`, counting duplicate
    /// values as distinct writes. The harness uses this to notice a fresh
    /// write to the shift-register ports even when the byte written happens
    /// to repeat the previous one.
    pub fn output_port_write_count(&self, n: usize) -> u64 {
        self.output_port_writes[n]
    }
}
