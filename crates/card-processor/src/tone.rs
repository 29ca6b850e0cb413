//! Exposure and contrast adjustment applied in place before dithering.

use tracing::debug;

use crate::buffer::{CHANNELS, PixelBuffer};
use crate::{CardError, Result};

/// Midpoint that contrast scales around.
const CONTRAST_MIDPOINT: f32 = 128.0;

/// Tone factors for a single pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneConfig {
    /// Multiplies every color channel.
    pub exposure: f32,
    /// Scales each channel's distance from the midpoint.
    pub contrast: f32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            exposure: 1.0,
            contrast: 1.0,
        }
    }
}

impl ToneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set exposure factor.
    pub fn with_exposure(mut self, val: f32) -> Self {
        self.exposure = val;
        self
    }

    /// Builder: set contrast factor.
    pub fn with_contrast(mut self, val: f32) -> Self {
        self.contrast = val;
        self
    }

    /// Reject non-finite or negative factors.
    pub fn validate(&self) -> Result<()> {
        check_factor("exposure", self.exposure)?;
        check_factor("contrast", self.contrast)
    }

    /// Apply exposure, then contrast.
    pub fn apply(&self, buffer: &mut PixelBuffer) -> Result<()> {
        self.validate()?;
        apply_exposure(buffer, self.exposure)?;
        apply_contrast(buffer, self.contrast)
    }
}

/// Clamp a real-valued channel to `[0, 255]` and truncate to a byte.
pub fn clamp_channel(value: f32) -> u8 {
    // NaN falls through `clamp` and casts to 0.
    value.clamp(0.0, 255.0) as u8
}

/// Multiply R, G, B of every pixel by `factor`. Alpha is untouched.
pub fn apply_exposure(buffer: &mut PixelBuffer, factor: f32) -> Result<()> {
    check_factor("exposure", factor)?;
    if factor == 1.0 {
        return Ok(());
    }

    debug!(factor, "Applying exposure");
    map_color_channels(buffer, |c| clamp_channel(f32::from(c) * factor));
    Ok(())
}

/// Scale R, G, B of every pixel around the midpoint by `factor`.
pub fn apply_contrast(buffer: &mut PixelBuffer, factor: f32) -> Result<()> {
    check_factor("contrast", factor)?;
    if factor == 1.0 {
        return Ok(());
    }

    debug!(factor, "Applying contrast");
    map_color_channels(buffer, |c| {
        clamp_channel((f32::from(c) - CONTRAST_MIDPOINT) * factor + CONTRAST_MIDPOINT)
    });
    Ok(())
}

fn map_color_channels(buffer: &mut PixelBuffer, f: impl Fn(u8) -> u8) {
    for px in buffer.samples_mut().chunks_exact_mut(CHANNELS) {
        for c in &mut px[..3] {
            *c = f(*c);
        }
    }
}

fn check_factor(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CardError::InvalidToneFactor { name, value });
    }
    Ok(())
}
