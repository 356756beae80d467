/*!
Memory model: a flat 64 KiB byte-addressable space with the Space Invaders
cabinet's ROM/RAM/VRAM split baked in.

Address map:
- `0x0000..0x2000` ROM, loaded once at construction, never written again.
- `0x2000..0x2400` work RAM.
- `0x2400..0x4000` VRAM: a 7 KiB, 1-bit-per-pixel framebuffer.
- `0x4000..` mirrors RAM, matching the original hardware's incomplete
  address decoding.

Writes below `0x2000` are dropped and reported through a `DiagnosticSink`
rather than panicking or erroring — this is routine behavior for a running
guest program, not a bug in the emulator.
*/

use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Size in bytes of the VRAM region returned by `snapshot_vram`.
pub const VRAM_LEN: usize = 0x4000 - 0x2400;

/// First address outside the ROM region; writes below this are dropped.
pub const ROM_END: u16 = 0x2000;

const VRAM_START: usize = 0x2400;
const VRAM_END: usize = 0x4000;

pub struct Memory {
    bytes: Box<[u8; 0x10000]>,
}

impl Memory {
    /// All-zero 64 KiB space with no ROM loaded.
    pub fn new() -> Self {
        Memory { bytes: Box::new([0u8; 0x10000]) }
    }

    /// Load a ROM image at address 0. `rom` may be shorter than `ROM_END`
    /// (test fixtures commonly are); anything longer than `ROM_END` bytes
    /// does not fit in the ROM window and is rejected.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), String> {
        if rom.len() > ROM_END as usize {
            return Err(format!(
                "ROM image of {} bytes exceeds the {} byte ROM window",
                rom.len(),
                ROM_END
            ));
        }
        self.bytes[..rom.len()].copy_from_slice(rom);
        Ok(())
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn read16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes below `ROM_END` are silently dropped (reported via `sink`);
    /// every other address, including the `0x4000+` mirror, stores directly.
    pub fn write(&mut self, addr: u16, value: u8, sink: &mut dyn DiagnosticSink) {
        if addr < ROM_END {
            sink.report(Diagnostic::RomWrite { addr, value });
            return;
        }
        self.bytes[addr as usize] = value;
    }

    /// A freshly allocated copy of the 7 KiB VRAM window `[0x2400, 0x4000)`.
    /// Bit layout and the rotation needed to turn it into a row-major raster
    /// are the display consumer's concern (see `crate::video`).
    pub fn snapshot_vram(&self) -> [u8; VRAM_LEN] {
        let mut out = [0u8; VRAM_LEN];
        out.copy_from_slice(&self.bytes[VRAM_START..VRAM_END]);
        out
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
