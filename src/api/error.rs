use thiserror::Error;

/// Errors surfaced by the Booking API client.
/// Every non-2xx status is treated uniformly as a failure; there is no
/// status-specific recovery and no retry.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the JSON shape we expected
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
