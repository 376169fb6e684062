//! Category Models
//!
//! Three-level hierarchy: category -> sub-category -> sub-item. Deleting a
//! parent is left to the backend; nothing cascades client-side.

use super::{Status, impl_catalog_record};
use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Sub-category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: i64,
    pub name: String,
    /// Parent category
    #[serde(default)]
    pub cat_id: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Sub-item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubItem {
    pub id: i64,
    pub name: String,
    /// Parent sub-category
    #[serde(default)]
    pub sub_category_id: Option<i64>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl_catalog_record!(Category, SubCategory, SubItem);
