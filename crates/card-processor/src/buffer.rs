//! Owned RGBA pixel buffer handed between pipeline stages.

use image::RgbaImage;

use crate::{CardError, Result};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A row-major RGBA8888 frame with validated dimensions.
///
/// The sample vector always holds exactly `width * height * 4` bytes and
/// both dimensions are non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA samples, validating the shape.
    pub fn from_raw(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        check_shape(width, height, samples.len())?;
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Create a buffer filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let len = expected_len(width, height);
        check_shape(width, height, len)?;
        let samples = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = &self.samples[idx..idx + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy into an `image` crate buffer for resampling or encoding.
    pub fn to_image(&self) -> RgbaImage {
        // Same dimensions and length as `samples`, checked at construction.
        let mut img = RgbaImage::new(self.width, self.height);
        img.copy_from_slice(&self.samples);
        img
    }

    /// Take ownership of an `image` crate buffer.
    pub fn from_image(img: RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }
}

/// Byte length of an RGBA buffer with the given dimensions.
pub fn expected_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

/// Validate dimensions against a sample length.
pub(crate) fn check_shape(width: u32, height: u32, len: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CardError::EmptyDimensions { width, height });
    }
    if len != expected_len(width, height) {
        return Err(CardError::Shape { width, height, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_accepts_exact_length() {
        let buf = PixelBuffer::from_raw(3, 2, vec![0; 24]).unwrap();
        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.samples().len(), 24);
    }

    #[test]
    fn from_raw_rejects_length_mismatch() {
        let err = PixelBuffer::from_raw(3, 2, vec![0; 23]).unwrap_err();
        assert_eq!(
            err,
            CardError::Shape {
                width: 3,
                height: 2,
                len: 23
            }
        );
    }

    #[test]
    fn from_raw_rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::from_raw(0, 4, Vec::new()),
            Err(CardError::EmptyDimensions { .. })
        ));
        assert!(matches!(
            PixelBuffer::from_raw(4, 0, Vec::new()),
            Err(CardError::EmptyDimensions { .. })
        ));
    }

    #[test]
    fn filled_repeats_color() {
        let buf = PixelBuffer::filled(2, 2, [1, 2, 3, 4]).unwrap();
        assert_eq!(buf.samples(), &[1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn pixel_reads_row_major() {
        let mut samples = vec![0u8; 2 * 2 * 4];
        // (1, 1) is the last pixel
        samples[12..16].copy_from_slice(&[9, 8, 7, 6]);
        let buf = PixelBuffer::from_raw(2, 2, samples).unwrap();
        assert_eq!(buf.pixel(1, 1), Some([9, 8, 7, 6]));
        assert_eq!(buf.pixel(2, 0), None);
    }

    #[test]
    fn image_conversion_keeps_samples() {
        let buf = PixelBuffer::filled(5, 3, [10, 20, 30, 255]).unwrap();
        let img = buf.to_image();
        assert_eq!(img.dimensions(), (5, 3));
        assert_eq!(img.get_pixel(4, 2).0, [10, 20, 30, 255]);
        assert_eq!(PixelBuffer::from_image(img).unwrap(), buf);
    }

    #[test]
    fn to_image_copies_every_sample_in_order() {
        let samples: Vec<u8> = (0..4 * 3 * 4).map(|i| i as u8).collect();
        let buf = PixelBuffer::from_raw(4, 3, samples.clone()).unwrap();
        let img = buf.to_image();
        assert_eq!(img.as_raw(), &samples);
        assert_eq!(img.get_pixel(1, 2).0, [36, 37, 38, 39]);
    }
}
