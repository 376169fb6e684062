//! Serial Number Model

use super::{CatalogRecord, Status};
use serde::{Deserialize, Serialize};

/// One physical unit of a stock entry (`/api/serial-list`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialNumber {
    pub id: i64,
    #[serde(default)]
    pub stock_id: Option<i64>,
    #[serde(default)]
    pub product_id: Option<i64>,
    pub sku: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub bar_code: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl CatalogRecord for SerialNumber {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.sku
    }

    fn status(&self) -> Status {
        self.status
    }
}
