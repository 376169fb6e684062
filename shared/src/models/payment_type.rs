//! Payment Type Model

use super::{Status, impl_catalog_record};
use serde::{Deserialize, Serialize};

/// Payment type (cash, card, bank transfer, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl_catalog_record!(PaymentType);
