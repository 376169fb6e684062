//! Create/update payloads for simple catalog entities

use super::Status;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for creating or updating a name + status entity
///
/// Covers brands, categories, units, product types, warehouses, payment
/// types and vendors. Entity-specific columns go in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CatalogEntityCreate {
    #[validate(length(min = 1, max = 255, message = "The name field is required."))]
    pub name: String,
    #[serde(default)]
    pub status: Status,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CatalogEntityCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Active,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set an entity-specific column (`cat_id`, `location`, ...)
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
