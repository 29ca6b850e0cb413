//! Caption font loading.

use std::path::Path;

use ab_glyph::FontVec;
use card_processor::GlyphRenderer;

const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024; // 50MB

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Invalid font format (only TTF/OTF supported)")]
    InvalidFormat,
    #[error("Font file too large (max 50MB)")]
    FileTooLarge,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a TTF/OTF file and wrap it in a renderer.
pub fn load_renderer(path: &Path) -> Result<GlyphRenderer<FontVec>, FontError> {
    if std::fs::metadata(path)?.len() > MAX_FONT_SIZE {
        return Err(FontError::FileTooLarge);
    }
    let data = std::fs::read(path)?;
    parse_font(data)
}

/// Parse font bytes.
pub fn parse_font(data: Vec<u8>) -> Result<GlyphRenderer<FontVec>, FontError> {
    let font = FontVec::try_from_vec(data).map_err(|_| FontError::InvalidFormat)?;
    Ok(GlyphRenderer::new(font))
}
