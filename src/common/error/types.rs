//! Unified error types for career-export.
use thiserror::Error;

/// Main error type for export operations.
///
/// Export is all-or-nothing: when one of these is returned no bytes were
/// produced.
#[derive(Error, Debug)]
pub enum Error {
    /// The `.docx` package could not be assembled
    #[error("DOCX packaging error: {0}")]
    Package(String),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid or unreadable export configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Feature disabled at compile time
    #[error("Feature '{0}' is disabled. Enable it with --features {0}")]
    FeatureDisabled(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, Error>;
