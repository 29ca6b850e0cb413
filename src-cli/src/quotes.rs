//! Quote corpus loading from a JSON document with a `quotes` array.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid quotes JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct QuoteFile {
    #[serde(default)]
    quotes: Vec<serde_json::Value>,
}

/// Read and parse a quote corpus from disk.
pub fn load_quotes(path: &Path) -> Result<Vec<String>, QuoteError> {
    let data = std::fs::read_to_string(path)?;
    let quotes = parse_quotes(&data)?;
    debug!(path = %path.display(), count = quotes.len(), "Loaded quotes");
    Ok(quotes)
}

/// Parse a corpus, keeping only non-empty string entries (trimmed).
pub fn parse_quotes(json: &str) -> Result<Vec<String>, QuoteError> {
    let file: QuoteFile = serde_json::from_str(json)?;
    let total = file.quotes.len();

    let quotes: Vec<String> = file
        .quotes
        .into_iter()
        .filter_map(|v| v.as_str().map(str::trim).map(str::to_string))
        .filter(|q| !q.is_empty())
        .collect();

    if quotes.len() < total {
        warn!(dropped = total - quotes.len(), "Skipped empty or non-string quotes");
    }
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_string_entries() {
        let quotes = parse_quotes(r#"{"quotes": ["a", "b c"]}"#).unwrap();
        assert_eq!(quotes, vec!["a", "b c"]);
    }

    #[test]
    fn filters_malformed_entries() {
        let json = r#"{"quotes": ["  keep  ", "", "   ", 42, null, {"text": "x"}, "also"]}"#;
        let quotes = parse_quotes(json).unwrap();
        assert_eq!(quotes, vec!["keep", "also"]);
    }

    #[test]
    fn missing_field_is_empty_corpus() {
        assert!(parse_quotes(r#"{"other": 1}"#).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(parse_quotes("{not json"), Err(QuoteError::Json(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"quotes": ["from disk"]}}"#).unwrap();
        assert_eq!(load_quotes(file.path()).unwrap(), vec!["from disk"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_quotes(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, QuoteError::Io(_)));
    }
}
