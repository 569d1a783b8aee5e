//! Typed errors for session construction and chat turns.
//!
//! The `Display` form of each turn error is the text shown to the user, so
//! callers that only deal in strings can print it as-is.

use thiserror::Error;

/// Coarse classification of [`Error`], for callers that branch on the
/// failure class rather than on the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Startup configuration is missing or invalid. Fatal.
    Config,
    /// The remote completion call failed. The session stays usable.
    Remote,
    /// The remote call succeeded but produced no text.
    EmptyCompletion,
}

/// Session error.
#[derive(Debug, Error)]
pub enum Error {
    /// The API key variable is unset or empty.
    #[error("{0} not found in environment variables")]
    MissingApiKey(String),

    /// Invalid configuration value or unreadable configuration payload.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The completion request failed (network, auth, rate limit, bad body).
    #[error("I encountered an error: {0:#}")]
    Remote(anyhow::Error),

    /// The completion came back without content.
    #[error("I apologize, but I couldn't generate a response.")]
    EmptyCompletion,
}

impl Error {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey(_) | Self::Config(_) => ErrorKind::Config,
            Self::Remote(_) => ErrorKind::Remote,
            Self::EmptyCompletion => ErrorKind::EmptyCompletion,
        }
    }
}
