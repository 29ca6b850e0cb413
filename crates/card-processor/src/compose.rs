//! Card geometry and compositing.
//!
//! Layout, top to bottom:
//!
//! ```text
//! ┌──────────────────────────┐
//! │ padding                  │
//! │  ┌────────────────────┐  │
//! │  │ photo              │  │
//! │  └────────────────────┘  │
//! │        timestamp         │  caption band
//! │        location          │
//! │ padding                  │
//! │     quote line 1         │  quote block (optional)
//! │     quote line 2         │
//! └──────────────────────────┘
//! ```

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::resize;
use crate::text::{self, TextBlock, TextRenderer};
use crate::{CardError, Result};

/// Caption strings drawn under the photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption {
    pub timestamp: String,
    pub location: String,
}

impl Caption {
    pub fn new(timestamp: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            location: location.into(),
        }
    }
}

/// Composition constants.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    /// Display width of the photo in pixels.
    pub photo_width: u32,
    /// Border around the photo.
    pub padding: u32,
    /// Space reserved below the photo for the two caption lines.
    pub caption_band_height: u32,
    /// Distance from the photo's bottom edge to the first caption line.
    pub caption_offset: u32,
    pub caption_line_height: u32,
    pub caption_font_size: f32,
    /// Total horizontal margin subtracted from the photo width when wrapping quotes.
    pub quote_side_margin: u32,
    pub quote_font_size: f32,
    pub quote_line_height: u32,
    pub quote_top_pad: u32,
    pub quote_bottom_pad: u32,
    /// Minimum distance between the last caption line and the first quote line.
    pub quote_gap: u32,
    pub background: Rgba<u8>,
    pub ink: Rgba<u8>,
    pub filter: FilterType,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            photo_width: 440,
            padding: 12,
            caption_band_height: 60,
            caption_offset: 10,
            caption_line_height: 22,
            caption_font_size: 16.0,
            quote_side_margin: 24,
            quote_font_size: 15.0,
            quote_line_height: 20,
            quote_top_pad: 10,
            quote_bottom_pad: 14,
            quote_gap: 12,
            background: Rgba([255, 255, 255, 255]),
            ink: Rgba([0, 0, 0, 255]),
            filter: FilterType::Nearest,
        }
    }
}

impl CardStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set photo display width.
    pub fn with_photo_width(mut self, val: u32) -> Self {
        self.photo_width = val;
        self
    }

    /// Width available to a wrapped quote line.
    pub fn quote_wrap_width(&self) -> f32 {
        self.photo_width.saturating_sub(self.quote_side_margin) as f32
    }

    /// Wrap quote text with the style's quote font size.
    pub fn wrap_quote(&self, renderer: &impl TextRenderer, quote: &str) -> TextBlock {
        let max_width = self.quote_wrap_width();
        text::wrap_with_renderer(renderer, self.quote_font_size, quote, max_width)
    }
}

/// Derived card geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub photo_width: u32,
    pub photo_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub quote_block_height: u32,
    /// Top edge of the timestamp and location lines.
    pub caption_tops: [u32; 2],
    /// Top edge of the first quote line, when there is a quote block.
    pub quote_top: Option<u32>,
}

impl CardLayout {
    /// Compute geometry for a source of the given size and a wrapped quote.
    pub fn compute(
        source_width: u32,
        source_height: u32,
        quote_lines: &TextBlock,
        style: &CardStyle,
    ) -> Result<Self> {
        if source_width == 0 || source_height == 0 {
            return Err(CardError::EmptySource {
                width: source_width,
                height: source_height,
            });
        }
        if style.photo_width == 0 {
            return Err(CardError::InvalidStyle {
                field: "photo_width",
                value: style.photo_width,
            });
        }

        let photo_width = style.photo_width;
        let photo_height = resize::scaled_height(source_width, source_height, photo_width)
            .ok_or(CardError::LayoutOverflow {
                field: "photo_height",
            })?;

        let quote_block_height = if quote_lines.is_empty() {
            0
        } else {
            let lines_height = u32::try_from(quote_lines.len())
                .ok()
                .and_then(|n| style.quote_line_height.checked_mul(n))
                .ok_or(CardError::LayoutOverflow {
                    field: "quote_block_height",
                })?;
            checked_sum(
                "quote_block_height",
                &[lines_height, style.quote_top_pad, style.quote_bottom_pad],
            )?
        };

        let canvas_width =
            checked_sum("canvas_width", &[photo_width, style.padding, style.padding])?;
        let canvas_height = checked_sum(
            "canvas_height",
            &[
                photo_height,
                style.padding,
                style.padding,
                style.caption_band_height,
                quote_block_height,
            ],
        )?;

        let first_caption = checked_sum(
            "caption_top",
            &[style.padding, photo_height, style.caption_offset],
        )?;
        let caption_tops = [
            first_caption,
            checked_sum("caption_top", &[first_caption, style.caption_line_height])?,
        ];

        let quote_top = if quote_block_height > 0 {
            let after_captions = checked_sum("quote_top", &[caption_tops[1], style.quote_gap])?;
            // canvas_height already includes quote_block_height
            let from_bottom = checked_sum(
                "quote_top",
                &[canvas_height - quote_block_height, style.quote_top_pad],
            )?;
            Some(after_captions.max(from_bottom))
        } else {
            None
        };

        Ok(Self {
            photo_width,
            photo_height,
            canvas_width,
            canvas_height,
            quote_block_height,
            caption_tops,
            quote_top,
        })
    }
}

/// Composite a dithered photo, its caption and an optional quote onto a card.
///
/// An empty or blank `quote` produces no quote block.
pub fn compose(
    source: &PixelBuffer,
    caption: &Caption,
    quote: &str,
    style: &CardStyle,
    renderer: &impl TextRenderer,
) -> Result<PixelBuffer> {
    let (source_width, source_height) = source.dimensions();
    let quote_lines = style.wrap_quote(renderer, quote);
    let layout = CardLayout::compute(source_width, source_height, &quote_lines, style)?;

    debug!(
        source_width,
        source_height,
        photo_height = layout.photo_height,
        canvas_width = layout.canvas_width,
        canvas_height = layout.canvas_height,
        quote_lines = quote_lines.len(),
        "Composing card"
    );

    let mut canvas =
        RgbaImage::from_pixel(layout.canvas_width, layout.canvas_height, style.background);

    let photo = resize::resize_exact(
        &source.to_image(),
        layout.photo_width,
        layout.photo_height,
        style.filter,
    );
    paste(&mut canvas, &photo, style.padding, style.padding);

    let caption_lines = [caption.timestamp.as_str(), caption.location.as_str()];
    for (line, top) in caption_lines.iter().zip(layout.caption_tops) {
        text::draw_centered_text(
            &mut canvas,
            renderer,
            style.caption_font_size,
            top as i32,
            line,
            style.ink,
        );
    }

    if let Some(quote_top) = layout.quote_top {
        let mut y = quote_top as i32;
        for line in quote_lines.iter() {
            text::draw_centered_text(
                &mut canvas,
                renderer,
                style.quote_font_size,
                y,
                line,
                style.ink,
            );
            y += style.quote_line_height as i32;
        }
    }

    PixelBuffer::from_image(canvas)
}

/// Add layout terms, failing instead of wrapping on overflow.
fn checked_sum(field: &'static str, parts: &[u32]) -> Result<u32> {
    parts
        .iter()
        .try_fold(0u32, |acc, &part| acc.checked_add(part))
        .ok_or(CardError::LayoutOverflow { field })
}

/// Copy `top` onto `base` at `(x, y)`, clipping at the edges.
fn paste(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < base.width() && target_y < base.height() {
            base.put_pixel(target_x, target_y, *pixel);
        }
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
