//! # AppError
//!
//! Centralized error handling for the Watermark client.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

use crate::models::Rejection;

/// The primary error type for all client operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., an unknown message id on edit)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Client-side validation failure; the draft never left the machine
    #[error("validation error: {0}")]
    Invalid(Rejection),

    /// Backend refused the submission (e.g., duplicate title)
    #[error("rejected by backend: {0}")]
    Rejected(String),

    /// Backend or a probed media URL could not be reached
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// Unexpected backend response (non-2xx outside the mapped cases)
    #[error("backend error (status {status}): {note}")]
    Backend { status: u16, note: String },

    /// Infrastructure failure (e.g., malformed response body)
    #[error("internal client error: {0}")]
    Internal(String),
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        AppError::Invalid(rejection)
    }
}

/// A specialized Result type for Watermark client logic.
pub type Result<T> = std::result::Result<T, AppError>;
