//! Variant Model

use super::{Status, impl_catalog_record};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product variant (size, color, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl_catalog_record!(Variant);
