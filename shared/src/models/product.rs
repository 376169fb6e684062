//! Product Model

use super::{ProductType, Status, impl_catalog_record};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub sub_category_id: Option<i64>,
    #[serde(default)]
    pub brand_id: Option<i64>,
    #[serde(default)]
    pub unit_id: Option<i64>,
    #[serde(default)]
    pub product_type_id: Option<i64>,
    /// Eager-loaded product type, when the backend includes it
    #[serde(default)]
    pub product_type: Option<ProductType>,
    #[serde(default)]
    pub buying_price: Option<Decimal>,
    #[serde(default)]
    pub selling_price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Product {
    /// Resolve whether this product needs per-unit serial tracking
    ///
    /// Uses the eager-loaded type when present, otherwise looks the type up
    /// in `types` by `product_type_id`. Unknown types are not electronic.
    pub fn is_electronic(&self, types: &[ProductType]) -> bool {
        if let Some(pt) = &self.product_type {
            return pt.is_electronic();
        }
        self.product_type_id
            .and_then(|id| types.iter().find(|t| t.id == id))
            .is_some_and(ProductType::is_electronic)
    }
}

impl_catalog_record!(Product);
