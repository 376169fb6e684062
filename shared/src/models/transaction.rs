//! Transaction Model

use super::{CatalogRecord, Status};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money movement recorded against a stock entry or sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Invoice / reference number
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub payment_type_id: Option<i64>,
    #[serde(default)]
    pub stock_id: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl CatalogRecord for Transaction {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.reference
    }

    fn status(&self) -> Status {
        self.status
    }
}
