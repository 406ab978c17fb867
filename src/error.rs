//! Error types for the Super SIM client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Transport failures and decode failures are kept distinct so callers can
//! tell a broken network apart from a broken payload.

use thiserror::Error;

/// The main error type for the Super SIM client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response whose body parsed as the API's error document.
    #[error("API error {status} (code {code:?}): {message}")]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    /// Non-2xx response with a body the API error schema did not match.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Pagination
    // ============================================================================
    /// The iterator already returned a terminal page.
    #[error("No more pages in this collection")]
    NoMorePages,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// True when the server reported the resource as missing (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Api { status: 404, .. } | Error::HttpStatus { status: 404, .. }
        )
    }

    /// True for transport-level failures (as opposed to decode failures).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Api { .. } | Error::HttpStatus { .. }
        )
    }
}

/// Result type alias for the Super SIM client
pub type Result<T> = std::result::Result<T, Error>;
