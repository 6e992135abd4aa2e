// SPDX-License-Identifier: MIT
//
// qrng-rs: Rust client for the qrngapi.com quantum entropy service
//
// https://github.com/qrngapi/qrng-rs

//! Error types for the QRNG API client
//!
//! Provides the failure taxonomy using `thiserror` for ergonomic error handling.
//! A request can fail at five points: assembling the URL, the network
//! round-trip, draining the response body, the service rejecting the call,
//! and decoding the payload. Each point is a distinct variant so callers can
//! react per kind.

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for QRNG API operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request URL could not be assembled
    #[error("failed to create request: {0}")]
    RequestBuild(#[from] url::ParseError),

    /// Network round-trip failed (DNS, connect, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response arrived but its body could not be drained
    #[error("failed to read response: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// Service answered with a non-success status
    #[error("API error: {message}")]
    Api {
        /// Status code reported by the service
        status: StatusCode,
        /// The service's own `error` field when present, otherwise the
        /// verbatim status and body text
        message: String,
    },

    /// Success response did not match the expected JSON shape
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Check if the error is transient and worth retrying upstream
    ///
    /// The client itself never retries; this is guidance for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Status code carried by an [`Error::Api`] rejection
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
