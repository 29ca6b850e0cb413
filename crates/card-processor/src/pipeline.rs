//! End-to-end capture processing: tone, dither, compose.

use tracing::{debug, info};

use crate::Result;
use crate::buffer::PixelBuffer;
use crate::compose::{self, Caption, CardStyle};
use crate::dither;
use crate::quote::QuoteSelector;
use crate::text::TextRenderer;
use crate::tone::ToneConfig;

/// Pipeline context carried across captures.
///
/// The quote selector is the only state that changes between calls.
#[derive(Debug, Clone, Default)]
pub struct PhotoPipeline {
    pub tone: ToneConfig,
    pub style: CardStyle,
    pub quotes: QuoteSelector,
}

impl PhotoPipeline {
    pub fn new(tone: ToneConfig, style: CardStyle) -> Self {
        Self {
            tone,
            style,
            quotes: QuoteSelector::new(),
        }
    }

    /// Tone-adjust and dither a frame in place.
    pub fn develop(&self, frame: &mut PixelBuffer) -> Result<()> {
        self.tone.apply(frame)?;
        dither::dither(frame)
    }

    /// Turn a raw frame into a finished card.
    ///
    /// Tone factors are validated before the frame is touched. An empty
    /// corpus yields a card without a quote block.
    pub fn process(
        &mut self,
        mut frame: PixelBuffer,
        caption: &Caption,
        corpus: &[String],
        renderer: &impl TextRenderer,
    ) -> Result<PixelBuffer> {
        let (width, height) = frame.dimensions();
        info!(
            width,
            height,
            exposure = self.tone.exposure,
            contrast = self.tone.contrast,
            "Processing capture"
        );

        self.develop(&mut frame)?;

        let quote = self.quotes.select(corpus);
        debug!(has_quote = !quote.is_empty(), "Quote chosen");

        let card = compose::compose(&frame, caption, &quote, &self.style, renderer)?;
        info!(width = card.width(), height = card.height(), "Card composed");
        Ok(card)
    }
}
