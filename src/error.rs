//! This module defines all error types used throughout the application.

use std::io;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input is not a valid/parsable L5X document
    #[error("Invalid L5X document: {0}")]
    DocumentFormat(String),

    /// No rung comment contains the state-logic start marker
    #[error(
        "No rung comment containing {marker:?} found; the routine does not follow the state-logic marker convention"
    )]
    SectionNotFound { marker: String },

    /// State tag auto-detection found zero or multiple candidates
    #[error("State tag resolution failed: {0}")]
    TagResolution(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Wrapped anyhow errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a document format error
    pub fn document_format(msg: impl Into<String>) -> Self {
        Self::DocumentFormat(msg.into())
    }

    /// Create a section-not-found error for the given start marker
    pub fn section_not_found(marker: impl Into<String>) -> Self {
        Self::SectionNotFound {
            marker: marker.into(),
        }
    }

    /// Create a tag resolution error
    pub fn tag_resolution(msg: impl Into<String>) -> Self {
        Self::TagResolution(msg.into())
    }

    /// Check if error is a missing state-logic section
    pub fn is_section_not_found(&self) -> bool {
        matches!(self, Error::SectionNotFound { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Custom(format!("JSON error: {}", err))
    }
}

// Helper macros for creating errors

/// Create a custom error with formatting
#[macro_export]
macro_rules! custom_error {
    ($($arg:tt)*) => {
        $crate::error::Error::Custom(format!($($arg)*))
    };
}

/// Bail with a custom error message
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::custom_error!($($arg)*))
    };
}

/// Ensure a condition is true or return error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($($arg)*);
        }
    };
}
