/*!
Diagnostic reporting seam.

The CPU and memory model never fail with a `Result` for conditions the
physical hardware itself just shrugs off (a store into ROM, an interrupt
request with no handler slot). Those are reported through a `DiagnosticSink`
supplied at construction time instead, matching the "no error escapes the
core boundary" rule: the default sink drops everything, and a second
built-in sink prints to stderr for interactive use.
*/

use std::fmt;

/// One reportable event. Kept as a closed enum (rather than a `Box<dyn Error>`)
/// since every variant here is informational, not exceptional — the core
/// always has a well-defined next state regardless of what the sink does
/// with the event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A guest write targeted an address below 0x2000 (ROM) and was dropped.
    RomWrite { addr: u16, value: u8 },
    /// `generate_interrupt` was called with `n >= 8`; no RST exists for it.
    InvalidInterrupt { n: u8 },
    /// `generate_interrupt` was called while `interrupts_enabled` was clear;
    /// the request was silently dropped, matching real hardware.
    InterruptMasked { n: u8 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Diagnostic::RomWrite { addr, value } => {
                write!(f, "write to ROM address {addr:#06x} (value {value:#04x}) dropped")
            }
            Diagnostic::InvalidInterrupt { n } => {
                write!(f, "generate_interrupt({n}) rejected: no RST {n} exists")
            }
            Diagnostic::InterruptMasked { n } => {
                write!(f, "generate_interrupt({n}) dropped: interrupts disabled")
            }
        }
    }
}

/// Sink for diagnostic events. Object-safe so a `Box<dyn DiagnosticSink>` can
/// be plugged into `Cpu8080`/`ArcadeState` at construction time.
pub trait DiagnosticSink {
    fn report(&mut self, event: Diagnostic);
}

/// Default sink: discards every event. Used when no diagnostics are wanted,
/// e.g. in property tests that deliberately provoke ROM writes.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _event: Diagnostic) {}
}

/// Prints each event to stderr immediately (no buffering), mirroring the
/// teacher's own preference for `println!`/`eprintln!` diagnostics over a
/// logging-framework dependency.
#[derive(Copy, Clone, Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, event: Diagnostic) {
        eprintln!("[invaders8080] {event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink(Vec<Diagnostic>);

    impl DiagnosticSink for RecordingSink {
        fn report(&mut self, event: Diagnostic) {
            self.0.push(event);
        }
    }

    #[test]
    fn null_sink_drops_everything() {
        let mut sink = NullSink;
        sink.report(Diagnostic::RomWrite { addr: 0x10, value: 0xFF });
        // Nothing to assert beyond "did not panic"; there's no state to inspect.
    }

    #[test]
    fn recording_sink_captures_events_in_order() {
        let mut sink = RecordingSink::default();
        sink.report(Diagnostic::InvalidInterrupt { n: 9 });
        sink.report(Diagnostic::RomWrite { addr: 0x100, value: 1 });
        assert_eq!(
            sink.0,
            vec![
                Diagnostic::InvalidInterrupt { n: 9 },
                Diagnostic::RomWrite { addr: 0x100, value: 1 },
            ]
        );
    }
}
