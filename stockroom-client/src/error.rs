//! Client error types

use shared::{FieldErrors, FormError};
use thiserror::Error;

/// Client error type
///
/// Mirrors the backend error taxonomy:
/// - [`ClientError::Validation`]: HTTP 422 with field-level messages
/// - [`ClientError::Api`]: any other error response carrying `{message}`
/// - everything else: transport or unexpected failures, shown with a
///   per-operation fallback message
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server-side validation failure (HTTP 422)
    #[error("Validation error: {message}")]
    Validation { message: String, fields: FieldErrors },

    /// Error response with a server message
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Error response without a usable message
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading an attachment failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Local form validation failed; nothing was sent
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// The same row operation is already in flight
    #[error("Operation already in progress: {0}")]
    Busy(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Message to show the user
    ///
    /// Validation errors surface the first message of the first field,
    /// server errors their message verbatim, and everything else the
    /// caller's fallback (e.g. "Failed to fetch brands").
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation { message, fields } => fields
                .first_message()
                .map(str::to_string)
                .unwrap_or_else(|| message.clone()),
            Self::Api { message, .. } => message.clone(),
            Self::Form(err) => err
                .field_errors()
                .first_message()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
            Self::Busy(_) => "Please wait for the current operation to finish".to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Field errors to attach to form inputs (empty for non-field errors)
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Validation { fields, .. } => fields.clone(),
            Self::Form(err) => err.field_errors(),
            _ => FieldErrors::new(),
        }
    }

    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(422),
            Self::Api { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
