//! Field-level validation errors
//!
//! Two sources feed the same shape:
//! - HTTP 422 bodies from the backend: `{"message": "...", "errors": {"field": ["msg", ...]}}`
//! - Local form validation (serial units, required selections)

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;
use validator::ValidationErrors;

/// Ordered field -> messages list
///
/// Keeps the order the server sent the fields in, so that the "first message
/// of the first field" rule surfaces the same message the backend put first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field, creating the field entry if needed
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        match self.0.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message.into()),
            None => self.0.push((field, vec![message.into()])),
        }
    }

    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages attached to a single field
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// First message of the first field (what gets surfaced as a notice)
    pub fn first_message(&self) -> Option<&str> {
        self.0
            .iter()
            .find_map(|(_, messages)| messages.first())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, messages) in &self.0 {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldErrorsVisitor;

        /// Some backends send a bare string instead of a list for a field
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Messages {
            Many(Vec<String>),
            One(String),
        }

        impl<'de> Visitor<'de> for FieldErrorsVisitor {
            type Value = FieldErrors;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to error messages")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((field, messages)) = access.next_entry::<String, Messages>()? {
                    let messages = match messages {
                        Messages::Many(list) => list,
                        Messages::One(single) => vec![single],
                    };
                    entries.push((field, messages));
                }
                Ok(FieldErrors(entries))
            }
        }

        deserializer.deserialize_map(FieldErrorsVisitor)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        // field_errors() is a HashMap; sort so the first message is stable
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut out = FieldErrors::new();
        for (field, errs) in fields {
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid.", field));
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// Local form validation failure
///
/// Raised before any request is sent; a form that fails here never reaches
/// the network.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// An electronic product has a serial unit without an SKU
    #[error("sku_required")]
    SkuRequired { index: usize },

    /// Serial unit count does not match the entered quantity
    #[error("serial unit count {actual} does not match quantity {expected}")]
    SerialCountMismatch { expected: usize, actual: usize },

    /// Quantity needs more unit slots than one entry can track
    #[error("quantity {requested} exceeds the limit of {max} serial units")]
    TooManyUnits { requested: usize, max: usize },

    /// Generic field validation failure
    #[error("{}", .0.first_message().unwrap_or("Validation failed"))]
    Invalid(FieldErrors),
}

impl FormError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::SkuRequired { .. } => "sku_required",
            Self::SerialCountMismatch { .. } => "serial_count_mismatch",
            Self::TooManyUnits { .. } => "too_many_units",
            Self::Invalid(_) => "validation_failed",
        }
    }

    /// Field errors to attach to form inputs
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::SkuRequired { index } => {
                FieldErrors::new().with(format!("sku.{}", index), "The SKU field is required.")
            }
            Self::SerialCountMismatch { expected, actual } => FieldErrors::new().with(
                "sku",
                format!("Expected {} serial units, got {}.", expected, actual),
            ),
            Self::TooManyUnits { max, .. } => FieldErrors::new().with(
                "quantity",
                format!("At most {} serial units can be entered at once.", max),
            ),
            Self::Invalid(fields) => fields.clone(),
        }
    }
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(FieldErrors::from(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_keep_server_order() {
        let body = r#"{"name": ["The name field is required."], "image": ["Too large.", "Bad type."]}"#;
        let errors: FieldErrors = serde_json::from_str(body).unwrap();

        let fields: Vec<&str> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["name", "image"]);
        assert_eq!(errors.first_message(), Some("The name field is required."));
        assert_eq!(errors.get("image").unwrap().len(), 2);
    }

    #[test]
    fn test_field_errors_accept_single_string() {
        let errors: FieldErrors = serde_json::from_str(r#"{"status": "Invalid status"}"#).unwrap();
        assert_eq!(errors.get("status"), Some(&["Invalid status".to_string()][..]));
    }

    #[test]
    fn test_field_errors_add_merges_same_field() {
        let errors = FieldErrors::new().with("sku", "a").with("color", "b").with("sku", "c");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("sku").unwrap(), &["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_form_error_codes() {
        assert_eq!(FormError::SkuRequired { index: 1 }.code(), "sku_required");
        assert_eq!(FormError::SkuRequired { index: 1 }.to_string(), "sku_required");

        let fields = FormError::SkuRequired { index: 1 }.field_errors();
        assert!(fields.get("sku.1").is_some());
    }
}
