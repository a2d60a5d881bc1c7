//! Error types for compdir.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`FetchError`] - The record fetch failed (transport, HTTP status, or body decoding)
//!
//! Terminal I/O failures belong to the shell and are reported as
//! [`TuiError::Io`](crate::view::TuiError::Io).
//!
//! # Error Recovery Strategy
//!
//! A fetch failure is the only error the core can produce. What happens next depends on
//! the configured [`FetchPolicy`](crate::source::FetchPolicy): under `Strict` the shell
//! enters an error state with a retry action, under `Fallback` the failure is masked by
//! the bundled dataset and never reaches the shell. The query pipeline itself is total.

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The company list could not be fetched.
    ///
    /// Surfaced to the user as an error screen with a retry hint. Not fatal.
    #[error("Failed to load companies: {0}")]
    Fetch(#[from] FetchError),
}

/// The record fetch failed.
///
/// Every variant means the same thing to the shell ("the company list could not be
/// loaded"). The variants only carry the reason, which the error screen displays.
///
/// # Examples
///
/// ```
/// use compdir::model::error::FetchError;
///
/// let err = FetchError::Status { status: 503 };
/// assert!(err.to_string().contains("503"));
/// ```
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("could not reach the directory server: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("directory server responded with HTTP {status}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The response body was not a JSON array of companies.
    #[error("directory server sent an unreadable company list: {0}")]
    Decode(String),

    /// The HTTP client could not be built (bad TLS backend, invalid settings).
    #[error("could not create HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if err.is_builder() {
            FetchError::Client(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
