//! Request body validation

use std::borrow::Cow;

use serde_json::Value;
use shared::FieldErrors;
use validator::{ValidationError, ValidationErrors};

use crate::error::{MockError, MockResult};
use crate::kind::ResourceKind;
use crate::store::Record;

/// Check `record` against the rules of `kind`
pub fn validate(kind: ResourceKind, record: &Record) -> MockResult<()> {
    let mut errors = ValidationErrors::new();

    for &(field, message) in kind.required() {
        let present = match record.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        };
        if !present {
            errors.add(field, error("required", message.to_string()));
        }
    }

    for &field in kind.non_negative() {
        if number(record.get(field)).is_some_and(|n| n < 0.0) {
            errors.add(field, error("range", format!("The {} must be at least 0.", field)));
        }
    }

    if let Some(status) = record.get("status").and_then(Value::as_str)
        && !matches!(status, "active" | "inactive")
    {
        errors.add("status", error("status", "The selected status is invalid.".to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(MockError::Validation(FieldErrors::from(&errors)))
    }
}

fn error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => Record::new(),
        }
    }

    #[test]
    fn test_blank_name_is_required() {
        let err = validate(ResourceKind::Brands, &record(json!({ "name": "  " }))).unwrap_err();
        match err {
            MockError::Validation(fields) => {
                assert_eq!(fields.first_message(), Some("The name field is required."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_stock_rules() {
        let ok = record(json!({
            "product_id": 1, "vendor_id": 2, "warehouse_id": 3, "quantity": 4, "buying_price": "10.00"
        }));
        assert!(validate(ResourceKind::Stocks, &ok).is_ok());

        let bad = record(json!({ "product_id": 1, "quantity": -1, "status": "archived" }));
        let MockError::Validation(fields) = validate(ResourceKind::Stocks, &bad).unwrap_err() else {
            panic!("expected validation error");
        };
        assert!(fields.get("vendor_id").is_some());
        assert!(fields.get("warehouse_id").is_some());
        assert_eq!(fields.get("quantity").unwrap()[0], "The quantity must be at least 0.");
        assert!(fields.get("status").is_some());
    }
}
