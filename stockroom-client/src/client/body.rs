// stockroom-client/src/client/body.rs
// Request bodies: JSON or multipart

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{ClientError, ClientResult};

/// File attached to a create/update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Form field name (usually "image")
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Build an attachment, guessing the content type from the file name
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            field: field.into(),
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read an attachment from disk
    pub async fn from_path(field: impl Into<String>, path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self::new(field, file_name, bytes))
    }
}

/// Request body
///
/// Requests carrying a file go out as multipart form data, everything else
/// as JSON.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart {
        fields: Map<String, Value>,
        attachment: Attachment,
    },
}

impl RequestBody {
    pub fn json<T: Serialize>(value: &T) -> ClientResult<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// JSON body, or multipart when an attachment is present
    pub fn with_attachment<T: Serialize>(
        value: &T,
        attachment: Option<Attachment>,
    ) -> ClientResult<Self> {
        let value = serde_json::to_value(value)?;
        match attachment {
            None => Ok(Self::Json(value)),
            Some(attachment) => match value {
                Value::Object(fields) => Ok(Self::Multipart { fields, attachment }),
                other => Err(ClientError::Internal(format!(
                    "multipart body must be an object, got {}",
                    other
                ))),
            },
        }
    }
}

/// Flatten a JSON object into text form fields
///
/// Nulls are skipped, booleans become `1`/`0`, nested values are sent as
/// JSON text.
pub fn form_fields(fields: &Map<String, Value>) -> Vec<(String, String)> {
    fields
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
                Value::Number(n) => n.to_string(),
                other => other.to_string(),
            };
            Some((key.clone(), text))
        })
        .collect()
}

static BOUNDARY_SEQ: AtomicU64 = AtomicU64::new(0);

/// Unique multipart boundary
pub(crate) fn boundary() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let seq = BOUNDARY_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("stockroom-{:x}-{:x}", nanos, seq)
}

/// Escape a `Content-Disposition` parameter value
///
/// `"`, CR and LF are percent-encoded the way browsers encode form field
/// and file names.
fn disposition_param(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("%22"),
            '\r' => out.push_str("%0D"),
            '\n' => out.push_str("%0A"),
            other => out.push(other),
        }
    }
    out
}

/// Encode a multipart/form-data body (RFC 7578)
pub(crate) fn encode_multipart(
    boundary: &str,
    fields: &Map<String, Value>,
    attachment: &Attachment,
) -> Vec<u8> {
    let mut out = Vec::new();
    for (name, value) in form_fields(fields) {
        out.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        out.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                disposition_param(&name)
            )
            .as_bytes(),
        );
        out.extend_from_slice(value.as_bytes());
        out.extend_from_slice(b"\r\n");
    }

    out.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    out.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            disposition_param(&attachment.field),
            disposition_param(&attachment.file_name)
        )
        .as_bytes(),
    );
    out.extend_from_slice(format!("Content-Type: {}\r\n\r\n", attachment.content_type).as_bytes());
    out.extend_from_slice(&attachment.bytes);
    out.extend_from_slice(b"\r\n");
    out.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    out
}
