//! Text layout and rendering for card captions and quotes.
//!
//! Provides greedy word wrapping against an arbitrary width measurement,
//! a [`TextRenderer`] seam for measuring and drawing text, and the
//! `ab_glyph`-backed [`GlyphRenderer`] used in production.

use ab_glyph::{Font, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

/// Wrapped lines in rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    pub lines: Vec<String>,
}

impl TextBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Measures and draws single lines of text at a pixel size.
pub trait TextRenderer {
    /// Advance width of `text` in pixels.
    fn measure(&self, text: &str, size: f32) -> f32;

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, size: f32, color: Rgba<u8>, text: &str);
}

/// [`TextRenderer`] over an `ab_glyph` font.
#[derive(Debug, Clone)]
pub struct GlyphRenderer<F> {
    font: F,
}

impl<F: Font> GlyphRenderer<F> {
    pub fn new(font: F) -> Self {
        Self { font }
    }
}

impl<F: Font> TextRenderer for GlyphRenderer<F> {
    fn measure(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0f32;
        let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

        for ch in text.chars() {
            let glyph_id = scaled.glyph_id(ch);
            if let Some(prev) = prev_glyph {
                width += scaled.kern(prev, glyph_id);
            }
            width += scaled.h_advance(glyph_id);
            prev_glyph = Some(glyph_id);
        }

        width
    }

    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, size: f32, color: Rgba<u8>, text: &str) {
        draw_text_mut(canvas, color, x, y, PxScale::from(size), &self.font, text);
    }
}

/// Draw a line horizontally centered on the canvas.
pub fn draw_centered_text(
    canvas: &mut RgbaImage,
    renderer: &impl TextRenderer,
    size: f32,
    y: i32,
    text: &str,
    color: Rgba<u8>,
) {
    if text.is_empty() {
        return;
    }
    let text_width = renderer.measure(text, size).ceil() as i32;
    let x = ((canvas.width() as i32) - text_width).max(0) / 2;
    renderer.draw(canvas, x, y, size, color, text);
}

/// Greedily wrap `text` into lines no wider than `max_width`.
///
/// Words are split on whitespace runs and joined with single spaces. The
/// first word of a line is always accepted, so a word wider than
/// `max_width` sits alone on its own line rather than being broken.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> TextBlock {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if current.is_empty() || measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    TextBlock { lines }
}

/// Wrap `text` using a renderer's measurement at `size`.
pub fn wrap_with_renderer(
    renderer: &impl TextRenderer,
    size: f32,
    text: &str,
    max_width: f32,
) -> TextBlock {
    wrap_text(text, max_width, |s| renderer.measure(s, size))
}
