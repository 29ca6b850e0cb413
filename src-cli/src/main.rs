//! Command-line front end: decodes a photo, builds the card, writes a PNG.

mod caption;
mod cli;
mod config;
mod export;
mod font;
mod quotes;

use anyhow::{Context, bail};
use card_processor::PhotoPipeline;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::CardConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = CardConfig::load(&cli)?;
    run(&config)
}

fn run(config: &CardConfig) -> anyhow::Result<()> {
    let Some(font_path) = config.font.as_deref() else {
        bail!("no font configured (use --font or INSTANT_CARD_FONT)");
    };
    let renderer = font::load_renderer(font_path)
        .with_context(|| format!("failed to load font {}", font_path.display()))?;

    let corpus = match config.quotes.as_deref() {
        Some(path) => quotes::load_quotes(path)
            .with_context(|| format!("failed to load quotes {}", path.display()))?,
        None => Vec::new(),
    };

    let frame = export::load_frame(&config.input)?;
    let caption = caption::build_caption(
        &chrono::Local::now(),
        &config.timestamp_format,
        &config.location,
    );

    let mut pipeline = PhotoPipeline::new(config.tone(), config.style());
    let card = pipeline.process(frame, &caption, &corpus, &renderer)?;

    export::save_png(&card, &config.output)?;
    tracing::info!(output = %config.output.display(), "Card written");
    Ok(())
}
