#![doc = r#"
Space Invaders cabinet core library.

This crate exposes the emulator core modules for use by binaries and tests.

Modules:
- diagnostics: DiagnosticSink trait and the two built-in sinks (null, stderr)
- memory: 64 KiB byte-addressable memory with the ROM/RAM/VRAM split
- rom: ROM-image loading from bytes or a file path
- cpu: Intel 8080 CPU core (registers, flags, dispatcher, interrupts)
- harness: arcade-cabinet glue (shift register, ports, frame scheduler)
- video: the read-only VRAM snapshot accessor

In tests, shared program-builder helpers are available under `crate::test_utils`.
"#]

pub mod cpu;
pub mod diagnostics;
pub mod harness;
pub mod memory;
pub mod rom;
pub mod video;

#[cfg(feature = "screenshot")]
pub mod screenshot;

// Re-export commonly used types at the crate root for convenience.
pub use cpu::Cpu8080;
pub use diagnostics::{DiagnosticSink, NullSink, StderrSink};
pub use harness::ArcadeState;
pub use memory::Memory;
pub use rom::Rom;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
