// stockroom-client/src/client/response.rs
// Response decoding shared by both clients

use http::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::FieldErrors;

use crate::{ClientError, ClientResult};

/// Error body as sent by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<FieldErrors>,
}

/// Decode a response body according to its status
///
/// - 2xx: JSON body (an empty body decodes as `null`)
/// - 422: [`ClientError::Validation`] with the field map
/// - other errors carrying `message`: [`ClientError::Api`]
/// - anything else: [`ClientError::Status`]
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ClientResult<T> {
    if status.is_success() {
        let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            body
        };
        return serde_json::from_slice(body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)));
    }

    let parsed = serde_json::from_slice::<ErrorBody>(body).ok();

    if status == StatusCode::UNPROCESSABLE_ENTITY {
        let (message, fields) = match parsed {
            Some(b) => (b.message.or(b.error), b.errors.unwrap_or_default()),
            None => (None, FieldErrors::new()),
        };
        return Err(ClientError::Validation {
            message: message.unwrap_or_else(|| "The given data was invalid.".to_string()),
            fields,
        });
    }

    if let Some(message) = parsed
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty())
    {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Err(ClientError::Status {
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
