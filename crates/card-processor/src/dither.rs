//! Atkinson error-diffusion dithering for RGBA buffers.
//!
//! Each pixel is quantized to pure black or white and 1/8 of the
//! quantization error is pushed onto six forward neighbours:
//!
//! ```text
//!         *   1   1
//!     1   1   1
//!         1
//! ```
//!
//! Only 6/8 of the error is redistributed. The remaining 2/8 is dropped,
//! which gives the characteristic high-contrast look.

use tracing::debug;

use crate::Result;
use crate::buffer::{CHANNELS, PixelBuffer, check_shape};
use crate::tone::clamp_channel;

/// Luminance at or below this value quantizes to black.
const THRESHOLD: f32 = 128.0;

/// Forward neighbour offsets `(dx, dy)` receiving 1/8 of the error each.
const NEIGHBOURS: [(i64, i64); 6] = [(1, 0), (2, 0), (-1, 1), (0, 1), (1, 1), (0, 2)];

/// Dither a pixel buffer in place.
pub fn dither(buffer: &mut PixelBuffer) -> Result<()> {
    let (width, height) = buffer.dimensions();
    dither_samples(buffer.samples_mut(), width, height)
}

/// Dither raw RGBA samples in place.
///
/// Pixels are visited in raster order and read values already adjusted by
/// earlier pixels, so the pass is strictly sequential.
pub fn dither_samples(samples: &mut [u8], width: u32, height: u32) -> Result<()> {
    check_shape(width, height, samples.len())?;
    debug!(width, height, "Applying Atkinson dithering");

    let w = width as i64;
    let h = height as i64;

    for y in 0..h {
        for x in 0..w {
            let idx = pixel_index(x, y, w);
            let avg = (f32::from(samples[idx])
                + f32::from(samples[idx + 1])
                + f32::from(samples[idx + 2]))
                / 3.0;
            let new_val: u8 = if avg <= THRESHOLD { 0 } else { 255 };
            let error = avg - f32::from(new_val);

            samples[idx..idx + 3].fill(new_val);
            samples[idx + 3] = 255;

            distribute_error(samples, x, y, w, h, error / 8.0);
        }
    }

    debug!("Atkinson dithering complete");
    Ok(())
}

/// Add `diff` to the color channels of each in-bounds neighbour.
fn distribute_error(samples: &mut [u8], x: i64, y: i64, w: i64, h: i64, diff: f32) {
    for (dx, dy) in NEIGHBOURS {
        let (nx, ny) = (x + dx, y + dy);
        if nx < 0 || nx >= w || ny >= h {
            continue;
        }
        let idx = pixel_index(nx, ny, w);
        for c in &mut samples[idx..idx + 3] {
            *c = clamp_channel(f32::from(*c) + diff);
        }
    }
}

fn pixel_index(x: i64, y: i64, w: i64) -> usize {
    (y * w + x) as usize * CHANNELS
}
