//! Error types for notes-core

use thiserror::Error;

/// Result type alias using notes-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notes-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Remote API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failures surfaced by [`crate::api::NotesApiClient`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP exchange could not be completed (DNS, refused connection, ...)
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its status is outside the 2xx range
    #[error("HTTP error! status: {status}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Response body, compacted for diagnostics
        body: String,
    },

    /// A request body could not be serialized to JSON
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A successful response carried a body that is not the expected JSON
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The configured base URL is unusable
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// HTTP status code, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(error) => error.status().map(|status| status.as_u16()),
            Self::Encode(_) | Self::Decode(_) | Self::InvalidBaseUrl(_) => None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
