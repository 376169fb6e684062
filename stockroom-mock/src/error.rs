//! Mock error responses
//!
//! Bodies follow the backend's conventions:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | NotFound | 404 | `{message}` |
//! | Validation | 422 | `{message, errors: {field: [messages]}}` |
//! | BadRequest | 400 | `{message}` |

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use shared::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("{0}")]
    NotFound(String),

    #[error("The given data was invalid.")]
    Validation(FieldErrors),

    #[error("{0}")]
    BadRequest(String),
}

impl MockError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, Json(json!({ "message": message }))),
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": message, "errors": errors })),
            ),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))),
        }
        .into_response()
    }
}

impl From<MultipartError> for MockError {
    fn from(e: MultipartError) -> Self {
        Self::BadRequest(format!("Multipart error: {}", e))
    }
}

pub type MockResult<T> = Result<T, MockError>;
