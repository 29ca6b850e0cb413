//! Configuration management: defaults, environment overrides, command-line flags.

pub mod validation;

use std::path::PathBuf;

use anyhow::{Context, bail};
use card_processor::{CardStyle, ToneConfig};

use crate::cli::Cli;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "INSTANT_CARD_";

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Runtime configuration for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub font: Option<PathBuf>,
    pub quotes: Option<PathBuf>,
    pub exposure: f32,
    pub contrast: f32,
    pub location: String,
    pub timestamp_format: String,
    pub photo_width: u32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from("card.png"),
            font: None,
            quotes: None,
            exposure: 1.0,
            contrast: 1.0,
            location: String::new(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
            photo_width: CardStyle::default().photo_width,
        }
    }
}

impl CardConfig {
    /// Load configuration: defaults, then `INSTANT_CARD_*` environment
    /// variables, then command-line flags.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        Self::load_with(cli, |key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())
    }

    /// Load with a custom environment lookup (keys are given without prefix).
    pub fn load_with(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            ..Self::default()
        };

        for key in SETTING_KEYS {
            if let Some(value) = env(key) {
                config
                    .set(key, &value)
                    .with_context(|| format!("environment variable {ENV_PREFIX}{key}"))?;
            }
        }

        let flags: [(&str, Option<String>); 7] = [
            ("EXPOSURE", cli.exposure.clone()),
            ("CONTRAST", cli.contrast.clone()),
            ("PHOTO_WIDTH", cli.photo_width.clone()),
            ("TIMESTAMP_FORMAT", cli.timestamp_format.clone()),
            ("LOCATION", cli.location.clone()),
            ("FONT", cli.font.as_ref().map(|p| p.display().to_string())),
            ("QUOTES", cli.quotes.as_ref().map(|p| p.display().to_string())),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                config
                    .set(key, &value)
                    .with_context(|| format!("--{}", key.to_lowercase().replace('_', "-")))?;
            }
        }

        Ok(config)
    }

    /// Validate and apply a single raw setting.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        if let Err(msg) = validation::validate_setting(key, value) {
            bail!("invalid value {value:?}: {msg}");
        }

        match key {
            "EXPOSURE" => self.exposure = value.parse()?,
            "CONTRAST" => self.contrast = value.parse()?,
            "PHOTO_WIDTH" => self.photo_width = value.parse()?,
            "TIMESTAMP_FORMAT" => self.timestamp_format = value.to_string(),
            "LOCATION" => self.location = value.trim().to_string(),
            "FONT" => self.font = Some(PathBuf::from(value)),
            "QUOTES" => self.quotes = Some(PathBuf::from(value)),
            other => bail!("unknown setting {other}"),
        }
        Ok(())
    }

    pub fn tone(&self) -> ToneConfig {
        ToneConfig::new()
            .with_exposure(self.exposure)
            .with_contrast(self.contrast)
    }

    pub fn style(&self) -> CardStyle {
        CardStyle::new().with_photo_width(self.photo_width)
    }
}

/// Settings that can be supplied through the environment.
const SETTING_KEYS: [&str; 7] = [
    "EXPOSURE",
    "CONTRAST",
    "PHOTO_WIDTH",
    "TIMESTAMP_FORMAT",
    "LOCATION",
    "FONT",
    "QUOTES",
];

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn cli(input: &str) -> Cli {
        Cli {
            input: PathBuf::from(input),
            output: PathBuf::from("out.png"),
            ..Cli::default()
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_overrides() {
        let config = CardConfig::load_with(&cli("in.jpg"), no_env).unwrap();
        assert_eq!(config.input, PathBuf::from("in.jpg"));
        assert_eq!(config.output, PathBuf::from("out.png"));
        assert_eq!(config.exposure, 1.0);
        assert_eq!(config.contrast, 1.0);
        assert_eq!(config.photo_width, 440);
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
        assert!(config.font.is_none());
        assert_eq!(config.tone(), ToneConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let env: HashMap<&str, &str> = [
            ("EXPOSURE", "1.2"),
            ("LOCATION", " Lisbon "),
            ("FONT", "mono.ttf"),
        ]
        .into_iter()
        .collect();
        let lookup = |k: &str| env.get(k).map(|v| v.to_string());
        let config = CardConfig::load_with(&cli("in.jpg"), lookup).unwrap();
        assert!((config.exposure - 1.2).abs() < f32::EPSILON);
        assert_eq!(config.location, "Lisbon");
        assert_eq!(config.font, Some(PathBuf::from("mono.ttf")));
    }

    #[test]
    fn flags_override_environment() {
        let mut args = cli("in.jpg");
        args.contrast = Some("2.5".into());
        args.photo_width = Some("300".into());
        let lookup = |k: &str| (k == "CONTRAST").then(|| "0.5".to_string());
        let config = CardConfig::load_with(&args, lookup).unwrap();
        assert!((config.contrast - 2.5).abs() < f32::EPSILON);
        assert_eq!(config.style().photo_width, 300);
    }

    #[test]
    fn invalid_environment_value_is_reported() {
        let lookup = |k: &str| (k == "EXPOSURE").then(|| "-3".to_string());
        let err = CardConfig::load_with(&cli("in.jpg"), lookup).unwrap_err();
        assert!(format!("{err:#}").contains("INSTANT_CARD_EXPOSURE"));
    }

    #[test]
    fn invalid_flag_is_reported() {
        let mut args = cli("in.jpg");
        args.timestamp_format = Some("%Q".into());
        let err = CardConfig::load_with(&args, no_env).unwrap_err();
        assert!(format!("{err:#}").contains("--timestamp-format"));
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut config = CardConfig::default();
        assert!(config.set("NOPE", "1").is_err());
    }
}
