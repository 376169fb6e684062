//! Unit Model

use super::{Status, impl_catalog_record};
use serde::{Deserialize, Serialize};

/// Unit of measure (piece, box, kg, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl_catalog_record!(Unit);
