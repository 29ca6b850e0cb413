//! Decoding source frames and encoding finished cards.

use std::path::Path;

use anyhow::Context;
use card_processor::PixelBuffer;
use image::ImageFormat;
use tracing::debug;

/// Decode an image file into an RGBA frame.
pub fn load_frame(path: &Path) -> anyhow::Result<PixelBuffer> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgba8();
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Loaded frame");
    Ok(PixelBuffer::from_image(img)?)
}

/// Encode a card as PNG.
pub fn save_png(card: &PixelBuffer, path: &Path) -> anyhow::Result<()> {
    let img = card.to_image();
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), "Saved card");
    Ok(())
}
