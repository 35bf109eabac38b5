//! Error types for book generation and language handling.

use thiserror::Error;

/// Result type alias using [`BookError`].
pub type Result<T> = std::result::Result<T, BookError>;

/// Errors raised while generating the book or formatting language files.
#[derive(Debug, Error)]
pub enum BookError {
    /// Failed to read or write a file.
    #[error("Failed to access '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A translation or language file is not valid JSON.
    #[error("Failed to parse '{path}': {source}")]
    Parse {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A language file differs from its canonical formatting.
    #[error("Language file for '{lang}' is not formatted; run update-lang")]
    NotFormatted {
        /// The offending language.
        lang: String,
    },
}

impl BookError {
    /// Wrap an IO error with the path it occurred at.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        BookError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Wrap a parse error with the path it occurred at.
    pub fn parse(path: &std::path::Path, source: serde_json::Error) -> Self {
        BookError::Parse {
            path: path.display().to_string(),
            source,
        }
    }
}
