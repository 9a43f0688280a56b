//! Error types shared by the Spotify client and the local storage.

use thiserror::Error;

/// Errors produced by the Spotify client and the storage service.
#[derive(Error, Debug)]
pub enum Error {
    /// Token endpoint rejected the credentials or returned a body without an
    /// `access_token` field. Fatal to client construction.
    #[error("Spotify authentication failed: {0}")]
    AuthenticationError(String),

    /// Resource endpoint answered with a non-2xx status.
    #[error("Spotify request failed with status {status}: {body}")]
    RequestFailedError {
        /// HTTP status code returned by the API
        status: u16,
        /// Raw response body, useful for diagnostics
        body: String,
    },

    /// Network or timeout failure before any status was received.
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// Storage lookup, update or delete referenced a missing key.
    #[error("no item stored under key {0:?}")]
    NotFoundError(String),

    /// Item passed to the storage has no string `id` field to key it by.
    #[error("spotify item is missing a string 'id' field")]
    InvalidItemError,

    /// Missing or unreadable credentials at construction time.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
