// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Errors that end a lookup run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Activities API request failed: {0}")]
    Request(String),

    #[error("Activities API rejected the bearer token (HTTP 401)")]
    Unauthorized,

    #[error("Activities API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected activities response: {0}")]
    Decode(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status returned by the API, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Unauthorized => Some(401),
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, AppError>;
