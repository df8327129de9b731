//! Structured error types for the pagecraft layout core.
//!
//! The core operations never fail. Errors only come from the edges: decoding
//! documents or configuration, and reading or writing files.

use thiserror::Error;

/// The unified error type returned by the fallible public API.
#[derive(Debug, Error)]
pub enum PagecraftError {
    /// JSON input failed to parse as a document, patch or config.
    #[error("Failed to parse input: {source}{}", format_hint(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A configuration value was rejected.
    #[error("Config error: {0}")]
    Config(String),
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {hint}")
    }
}

impl From<serde_json::Error> for PagecraftError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the expected schema. Check field names, element types and value types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        PagecraftError::ParseError { source: e, hint }
    }
}
