//! Custom error types for Synthfix with improved type safety and error handling.

use thiserror::Error;

/// Main error type for Synthfix operations.
#[derive(Error, Debug)]
pub enum SynthfixError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Registry/metadata errors
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("metadata document has no versioning.latest element")]
    MissingLatestVersion,

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    // Source patching errors
    #[error("method signature not found in {path}: {signature}")]
    SignatureNotFound { path: String, signature: String },

    // Template rendering errors
    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using SynthfixError
pub type Result<T> = std::result::Result<T, SynthfixError>;

impl SynthfixError {
    /// Create a network error with context
    pub fn network(msg: impl Into<String>) -> Self {
        Self::NetworkError(msg.into())
    }

    /// Create a signature-not-found error for a method removal
    pub fn signature_not_found(
        path: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self::SignatureNotFound {
            path: path.into(),
            signature: signature.into(),
        }
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for SynthfixError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

// Implement From for reqwest errors (network/API)
impl From<reqwest::Error> for SynthfixError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkError(err.to_string())
    }
}
