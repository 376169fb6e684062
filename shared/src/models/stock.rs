//! Stock Entry Model

use super::{CatalogRecord, Status};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock entry as stored by the backend
///
/// `total_amount` and `due_amount` are the values computed when the entry
/// was created; they are not recomputed when the record is loaded for
/// editing. Serial attributes are comma-joined, one value per unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockEntry {
    pub id: i64,
    pub product_id: i64,
    /// Denormalized product name, when the backend joins it
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<i64>,
    #[serde(default)]
    pub warehouse_id: Option<i64>,
    #[serde(default)]
    pub payment_type_id: Option<i64>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub buying_price: Decimal,
    /// Tax percentage
    #[serde(default)]
    pub tax: Option<Decimal>,
    #[serde(default)]
    pub selling_price: Option<Decimal>,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub paid_amount: Decimal,
    #[serde(default)]
    pub due_amount: Decimal,
    #[serde(default)]
    pub stock_date: Option<String>,
    #[serde(default)]
    pub expire_date: Option<String>,
    #[serde(default)]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub sku: Option<String>,
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
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl CatalogRecord for StockEntry {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        self.product_name.as_deref().unwrap_or_default()
    }

    fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimals_accept_strings_and_numbers() {
        let json = r#"{
            "id": 7,
            "product_id": 3,
            "quantity": 2,
            "buying_price": "12.50",
            "total_amount": 25,
            "paid_amount": "10.00",
            "due_amount": 15.0,
            "tax": null,
            "status": "inactive"
        }"#;
        let entry: StockEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.buying_price, dec!(12.50));
        assert_eq!(entry.total_amount, dec!(25));
        assert_eq!(entry.due_amount, dec!(15));
        assert_eq!(entry.tax, None);
        assert_eq!(entry.status, Status::Inactive);
        assert_eq!(entry.name(), "");
    }
}
