//! Instant-photo card processing.
//!
//! Provides tone adjustment, Atkinson dithering, greedy text wrapping,
//! quote selection and card composition for monochrome instant-photo
//! composites.

pub mod buffer;
pub mod compose;
pub mod dither;
pub mod pipeline;
pub mod quote;
pub mod resize;
pub mod text;
pub mod tone;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use compose::{Caption, CardLayout, CardStyle, compose};
pub use dither::{dither, dither_samples};
pub use pipeline::PhotoPipeline;
pub use quote::QuoteSelector;
pub use text::{GlyphRenderer, TextBlock, TextRenderer, wrap_text};
pub use tone::{ToneConfig, apply_contrast, apply_exposure, clamp_channel};

/// Errors raised by the card pipeline.
///
/// Every variant is detected before any buffer is mutated or allocated.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CardError {
    #[error("Buffer dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("Buffer length {len} does not match {width}x{height} RGBA")]
    Shape { width: u32, height: u32, len: usize },

    #[error("Invalid {name} factor: {value} (must be finite and >= 0)")]
    InvalidToneFactor { name: &'static str, value: f32 },

    #[error("Source image must be non-empty, got {width}x{height}")]
    EmptySource { width: u32, height: u32 },

    #[error("Invalid card style: {field} = {value}")]
    InvalidStyle { field: &'static str, value: u32 },

    #[error("Card layout overflows u32 while computing {field}")]
    LayoutOverflow { field: &'static str },
}

/// Result type alias for card operations.
pub type Result<T> = std::result::Result<T, CardError>;
