//! Caption strings for the card: capture time and location.

use card_processor::Caption;
use chrono::{DateTime, TimeZone};

/// Shown when no location is configured.
pub const LOCATION_UNAVAILABLE: &str = "Location unavailable";

/// Format the capture time and pick the location line.
pub fn build_caption<Tz>(now: &DateTime<Tz>, timestamp_format: &str, location: &str) -> Caption
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let location = location.trim();
    Caption::new(
        now.format(timestamp_format).to_string(),
        if location.is_empty() {
            LOCATION_UNAVAILABLE
        } else {
            location
        },
    )
}
