//! Setting value validation.

use chrono::format::{Item, StrftimeItems};

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "EXPOSURE" | "CONTRAST" => validate_float_range(value, 0.0, 4.0)?,
        "PHOTO_WIDTH" => validate_int_range(value, 16, 4096)?,
        "TIMESTAMP_FORMAT" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
            if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
                return Err("invalid strftime pattern".into());
            }
        }
        "FONT" => {
            let lower = value.to_lowercase();
            if !lower.ends_with(".ttf") && !lower.ends_with(".otf") {
                return Err("font must be a .ttf or .otf file".into());
            }
        }
        "QUOTES" => {
            if !value.to_lowercase().ends_with(".json") {
                return Err("quotes must be a .json file".into());
            }
        }
        "LOCATION" => {
            if value.chars().count() > 200 {
                return Err("location must be at most 200 characters".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_float_range(value: &str, min: f32, max: f32) -> Result<(), String> {
    let v: f32 = value.parse().map_err(|_| "must be a float")?;
    if !v.is_finite() || v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

fn validate_int_range(value: &str, min: u32, max: u32) -> Result<(), String> {
    let v: u32 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_factors_in_range() {
        assert!(validate_setting("EXPOSURE", "1.0").is_ok());
        assert!(validate_setting("CONTRAST", "0").is_ok());
        assert!(validate_setting("CONTRAST", "4").is_ok());
        assert!(validate_setting("EXPOSURE", "-0.1").is_err());
        assert!(validate_setting("EXPOSURE", "4.5").is_err());
        assert!(validate_setting("CONTRAST", "NaN").is_err());
        assert!(validate_setting("CONTRAST", "bright").is_err());
    }

    #[test]
    fn photo_width_range() {
        assert!(validate_setting("PHOTO_WIDTH", "440").is_ok());
        assert!(validate_setting("PHOTO_WIDTH", "8").is_err());
        assert!(validate_setting("PHOTO_WIDTH", "-440").is_err());
        assert!(validate_setting("PHOTO_WIDTH", "440.5").is_err());
    }

    #[test]
    fn timestamp_format_is_checked() {
        assert!(validate_setting("TIMESTAMP_FORMAT", "%Y-%m-%d %H:%M").is_ok());
        assert!(validate_setting("TIMESTAMP_FORMAT", "").is_err());
        assert!(validate_setting("TIMESTAMP_FORMAT", "%Q").is_err());
    }

    #[test]
    fn file_extensions() {
        assert!(validate_setting("FONT", "fonts/Mono.TTF").is_ok());
        assert!(validate_setting("FONT", "font.woff").is_err());
        assert!(validate_setting("QUOTES", "quotes.json").is_ok());
        assert!(validate_setting("QUOTES", "quotes.txt").is_err());
    }

    #[test]
    fn location_limit_counts_characters() {
        // 150 characters but 300 bytes
        assert!(validate_setting("LOCATION", &"é".repeat(150)).is_ok());
        assert!(validate_setting("LOCATION", &"a".repeat(200)).is_ok());
        assert!(validate_setting("LOCATION", &"é".repeat(201)).is_err());
    }

    #[test]
    fn unknown_keys_pass() {
        assert!(validate_setting("SOMETHING_ELSE", "anything").is_ok());
    }
}
