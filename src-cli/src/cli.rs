//! Command-line arguments. Every flag overrides the matching environment setting.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "instant-card",
    version,
    about = "Turn a photo into a dithered instant-photo card"
)]
pub struct Cli {
    /// Source image (PNG or JPEG).
    pub input: PathBuf,

    /// Where to write the finished card.
    #[arg(short, long, default_value = "card.png")]
    pub output: PathBuf,

    /// Exposure factor applied before dithering.
    #[arg(long)]
    pub exposure: Option<String>,

    /// Contrast factor applied after exposure.
    #[arg(long)]
    pub contrast: Option<String>,

    /// TTF/OTF font used for captions and quotes.
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// JSON file with a `quotes` array.
    #[arg(long)]
    pub quotes: Option<PathBuf>,

    /// Location caption.
    #[arg(long)]
    pub location: Option<String>,

    /// strftime pattern for the timestamp caption.
    #[arg(long)]
    pub timestamp_format: Option<String>,

    /// Display width of the photo on the card.
    #[arg(long)]
    pub photo_width: Option<String>,
}
