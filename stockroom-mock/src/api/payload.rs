//! JSON or multipart request bodies

use axum::{
    Json,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;

use crate::error::MockError;
use crate::store::Record;

/// A create/update body, whichever way it was encoded
///
/// Multipart text fields arrive as strings; `*_id` fields that parse as
/// integers are stored as numbers. An uploaded file is stored as a path
/// under `uploads/`.
#[derive(Debug)]
pub struct Payload(pub Record);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = MockError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| MockError::BadRequest(e.body_text()))?;
            let mut record = Record::new();
            while let Some(field) = multipart.next_field().await? {
                let name = field.name().unwrap_or_default().to_string();
                if let Some(file_name) = field.file_name().map(str::to_string) {
                    let bytes = field.bytes().await?;
                    tracing::debug!(field = %name, %file_name, size = bytes.len(), "upload received");
                    record.insert(name, Value::String(format!("uploads/{}", file_name)));
                } else {
                    let text = field.text().await?;
                    let value = coerce(&name, text);
                    record.insert(name, value);
                }
            }
            return Ok(Self(record));
        }

        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| MockError::BadRequest(e.body_text()))?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(MockError::BadRequest("Expected a JSON object".into())),
        }
    }
}

fn coerce(name: &str, text: String) -> Value {
    if name.ends_with("_id")
        && let Ok(n) = text.trim().parse::<i64>()
    {
        return Value::from(n);
    }
    Value::String(text)
}
