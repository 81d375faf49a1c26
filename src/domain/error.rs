use std::io;

use thiserror::Error;

/// Library-wide error type for nedoto operations.
///
/// Expected failures of a fetch (bad status, malformed payload) are reported through
/// [`FetchResult`](crate::domain::FetchResult) instead; this type is reserved for contract
/// violations, configuration problems, and transport-level faults.
#[derive(Debug, Error)]
pub enum AppError {
    /// A value object received an argument it cannot represent.
    #[error("{0}")]
    InvalidArgument(String),

    /// The transport produced no HTTP response at all.
    #[error("HTTP request failed: {message}")]
    Transport { message: String, status: Option<u16> },

    /// Required environment variable is missing or blank.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Transport configuration is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Endpoint URL could not be built.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        AppError::InvalidArgument(message.into())
    }

    /// HTTP status attached to the error, when the server answered before the failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers bridging into I/O error handling.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidArgument(_)
            | AppError::InvalidConfig(_)
            | AppError::InvalidEndpoint(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::EnvironmentVariableMissing(_) => io::ErrorKind::NotFound,
            AppError::Transport { .. } => io::ErrorKind::Other,
        }
    }
}
