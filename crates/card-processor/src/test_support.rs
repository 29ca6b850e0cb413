//! Fixed-advance text renderer for tests that should not depend on a font file.

use image::{Rgba, RgbaImage};

use crate::text::TextRenderer;

/// Every character advances `size * advance_ratio` pixels; non-space
/// characters paint a solid `advance x size` block.
#[derive(Debug, Clone)]
pub struct BlockRenderer {
    pub advance_ratio: f32,
}

impl Default for BlockRenderer {
    fn default() -> Self {
        Self { advance_ratio: 0.5 }
    }
}

impl TextRenderer for BlockRenderer {
    fn measure(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance_ratio
    }

    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, size: f32, color: Rgba<u8>, text: &str) {
        let advance = (size * self.advance_ratio) as i32;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = x + i as i32 * advance;
            for py in y..y + size as i32 {
                for px in left..left + advance {
                    let inside = px >= 0
                        && py >= 0
                        && (px as u32) < canvas.width()
                        && (py as u32) < canvas.height();
                    if inside {
                        canvas.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }
}
