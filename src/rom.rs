/*!
ROM-image loading.

The real Space Invaders cabinet image is four concatenated 2 KiB PROM dumps
(8,192 bytes total), handed to the emulator as a single flat binary with no
header and no checksum. This module just reads the bytes; mapping them into
a running `Memory` is `Memory::load_rom`'s job.
*/

use std::fs;
use std::path::Path;

/// The size of the original Space Invaders ROM image. `Rom` does not enforce
/// this exactly (test fixtures load much smaller synthetic programs), but it
/// documents what a real cabinet dump looks like.
pub const SPACE_INVADERS_ROM_LEN: usize = 0x2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rom {
    bytes: Vec<u8>,
}

impl Rom {
    /// Wrap an in-memory byte vector as a ROM image.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, String> {
        if bytes.len() > SPACE_INVADERS_ROM_LEN {
            return Err(format!(
                "ROM image of {} bytes exceeds the {} byte ROM window",
                bytes.len(),
                SPACE_INVADERS_ROM_LEN
            ));
        }
        Ok(Rom { bytes })
    }

    /// Read a ROM image from disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| format!("failed to read ROM file {}: {e}", path.display()))?;
        Self::from_bytes(bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
