//! Directions error types

use domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during a directions call
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Caller input was rejected before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No API key configured
    #[error("missing API key")]
    MissingApiKey,

    /// The configured base URL does not parse
    #[error("invalid directions url: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The provider answered with a non-2xx HTTP status
    #[error("directions API error ({status_code}): {body}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Trimmed raw response body
        body: String,
    },

    /// DNS, connection, or body read failure
    #[error("directions request failed: {0}")]
    Transport(String),

    /// The HTTP client's per-request timeout elapsed
    #[error("directions request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout in seconds
        timeout_secs: u64,
    },

    /// The caller's deadline passed before the call completed
    #[error("directions call cancelled: deadline exceeded")]
    DeadlineExceeded,

    /// The provider returned a 2xx response without a body
    #[error("empty response")]
    EmptyResponse,

    /// The response body is not a valid directions envelope
    #[error("decode directions response: {0}")]
    Decode(String),

    /// The provider reported a status other than `OK`
    #[error("directions status {status}: {message}")]
    ProviderStatus {
        /// Provider status string, e.g. `ZERO_RESULTS`
        status: String,
        /// Trimmed provider `error_message`, possibly empty
        message: String,
    },

    /// The provider returned no route or no leg
    #[error("no directions returned")]
    NoResults,
}

/// Coarse classification of a [`DirectionsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before network I/O
    Validation,
    /// Missing key, bad base URL, or bad settings
    Configuration,
    /// Non-2xx HTTP status
    Api,
    /// Network failure, timeout, or cancellation
    Transport,
    /// Empty or malformed body
    Decode,
    /// Provider answered with a non-OK status
    ProviderRejected,
    /// Provider answered OK without routes or legs
    NoResults,
}

impl DirectionsError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::MissingApiKey | Self::InvalidUrl(_) | Self::ConfigurationError(_) => {
                ErrorKind::Configuration
            },
            Self::Api { .. } => ErrorKind::Api,
            Self::Transport(_) | Self::Timeout { .. } | Self::DeadlineExceeded => {
                ErrorKind::Transport
            },
            Self::EmptyResponse | Self::Decode(_) => ErrorKind::Decode,
            Self::ProviderStatus { .. } => ErrorKind::ProviderRejected,
            Self::NoResults => ErrorKind::NoResults,
        }
    }

    /// Returns true if repeating the same call might succeed
    ///
    /// The client itself never retries; this is a hint for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout { .. } => true,
            Self::Api { status_code, .. } => *status_code == 429 || *status_code >= 500,
            _ => false,
        }
    }

    /// Get the validation error, if this is one
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}
