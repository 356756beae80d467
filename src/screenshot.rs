/*!
Optional PNG dump of a VRAM snapshot, gated behind the `screenshot` feature.

This is a debugging convenience, not a display consumer: it performs the
rotation itself (via `video::pixel_at`) because its only output is a static
image file, not a live framebuffer someone else is expected to present.
*/

use image::{GrayImage, Luma};

use crate::video::{self, VramSnapshot, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Render a VRAM snapshot into a row-major 1-bit-as-8-bit grayscale PNG and
/// write it to `path`.
pub fn write_png<P: AsRef<std::path::Path>>(snapshot: &VramSnapshot, path: P) -> Result<(), String> {
    let mut image = GrayImage::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    for y in 0..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            let lit = video::pixel_at(snapshot, x, y);
            image.put_pixel(x as u32, y as u32, Luma([if lit { 255 } else { 0 }]));
        }
    }
    image.save(path.as_ref()).map_err(|e| format!("failed to write screenshot {}: {e}", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::VRAM_LEN;

    #[test]
    fn write_png_round_trips_a_lit_pixel() {
        let mut snap: VramSnapshot = [0u8; VRAM_LEN];
        let (byte_index, bit_index) = video::raster_index(5, 5);
        snap[byte_index] = 1 << bit_index;

        let dir = std::env::temp_dir();
        let path = dir.join("invaders8080_screenshot_test.png");
        write_png(&snap, &path).unwrap();

        let loaded = image::open(&path).unwrap().into_luma8();
        assert_eq!(loaded.get_pixel(5, 5).0[0], 255);
        assert_eq!(loaded.get_pixel(6, 5).0[0], 0);
        std::fs::remove_file(&path).ok();
    }
}
