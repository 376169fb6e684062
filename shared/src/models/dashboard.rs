//! Dashboard Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures from `/api/dashboard`
///
/// Counters the backend does not report stay at zero; anything else it sends
/// is kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub total_stocks: u64,
    #[serde(default)]
    pub total_vendors: u64,
    #[serde(default)]
    pub total_warehouses: u64,
    #[serde(default)]
    pub total_stock_value: Decimal,
    #[serde(default)]
    pub total_due: Decimal,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
