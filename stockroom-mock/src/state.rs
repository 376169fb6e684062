//! Shared mock state
//!
//! Every resource lives in its own [`Table`]. Besides storage the state
//! carries two hooks for tests: per-keyword latency, to make list
//! responses arrive out of order, and a log of every request received.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::kind::ResourceKind;
use crate::store::{ListParams, Record, Table, text};

/// One request as seen by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
}

impl RecordedRequest {
    /// Value of one query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.as_deref()?.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            (k == key).then_some(v)
        })
    }
}

impl fmt::Display for RecordedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Some(query) => write!(f, "{} {}?{}", self.method, self.path, query),
            None => write!(f, "{} {}", self.method, self.path),
        }
    }
}

#[derive(Default)]
struct Inner {
    tables: DashMap<ResourceKind, Table>,
    latency: DashMap<String, Duration>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Cheaply cloneable handle to the in-memory backend
#[derive(Clone, Default)]
pub struct MockState {
    inner: Arc<Inner>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Storage ==========

    /// Insert a row directly, bypassing validation
    pub fn insert(&self, kind: ResourceKind, value: Value) -> Record {
        let record = match value {
            Value::Object(map) => map,
            _ => Record::new(),
        };
        self.create(kind, record)
    }

    /// Insert `count` rows built by `make(i)`, `i` starting at 1
    pub fn seed(&self, kind: ResourceKind, count: usize, make: impl Fn(usize) -> Value) {
        for i in 1..=count {
            self.insert(kind, make(i));
        }
    }

    /// Store a validated row, filling in derived columns
    pub(crate) fn create(&self, kind: ResourceKind, mut record: Record) -> Record {
        if kind == ResourceKind::Stocks {
            self.attach_product_name(&mut record);
        }
        let row = self.inner.tables.entry(kind).or_default().insert(record);
        if kind == ResourceKind::Stocks {
            self.expand_serials(&row);
        }
        row
    }

    pub(crate) fn update(&self, kind: ResourceKind, id: i64, mut patch: Record) -> Option<Record> {
        if kind == ResourceKind::Stocks {
            self.attach_product_name(&mut patch);
        }
        let serials_changed = patch.contains_key("sku");
        let row = self.inner.tables.get_mut(&kind)?.update(id, patch)?;
        if kind == ResourceKind::Stocks && serials_changed {
            self.remove_serials(id);
            self.expand_serials(&row);
        }
        Some(row)
    }

    pub(crate) fn remove(&self, kind: ResourceKind, id: i64) -> Option<Record> {
        let row = self.inner.tables.get_mut(&kind)?.remove(id)?;
        if kind == ResourceKind::Stocks {
            self.remove_serials(id);
        }
        Some(row)
    }

    pub fn get(&self, kind: ResourceKind, id: i64) -> Option<Record> {
        self.inner.tables.get(&kind)?.get(id).cloned()
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.inner.tables.get(&kind).map_or(0, |t| t.len())
    }

    /// All rows of `kind`, ordered by id
    pub fn rows(&self, kind: ResourceKind) -> Vec<Record> {
        self.inner
            .tables
            .get(&kind)
            .map(|t| t.rows().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn list(&self, kind: ResourceKind, params: &ListParams) -> (Vec<Record>, u64) {
        match self.inner.tables.get(&kind) {
            Some(table) => params.apply(table.rows(), kind.searchable()),
            None => (Vec::new(), 0),
        }
    }

    fn attach_product_name(&self, record: &mut Record) {
        let name = record
            .get("product_id")
            .and_then(Value::as_i64)
            .and_then(|id| self.get(ResourceKind::Products, id))
            .and_then(|product| product.get("name").cloned());
        if let Some(name) = name {
            record.insert("product_name".into(), name);
        }
    }

    /// One serial-list row per comma-separated SKU of a stock entry
    fn expand_serials(&self, stock: &Record) {
        let column = |key: &str| -> Vec<String> {
            stock
                .get(key)
                .map(text)
                .unwrap_or_default()
                .split(',')
                .map(str::to_string)
                .collect()
        };
        let skus = column("sku");
        let colors = column("color");
        let bar_codes = column("bar_code");
        let notes = column("note");
        let at = |values: &[String], i: usize| -> Value {
            values
                .get(i)
                .filter(|v| !v.is_empty())
                .map_or(Value::Null, |v| Value::from(v.as_str()))
        };

        let mut table = self.inner.tables.entry(ResourceKind::SerialNumbers).or_default();
        for (i, sku) in skus.iter().enumerate().filter(|(_, sku)| !sku.trim().is_empty()) {
            let row = json!({
                "stock_id": stock.get("id"),
                "product_id": stock.get("product_id"),
                "sku": sku,
                "color": at(&colors, i),
                "bar_code": at(&bar_codes, i),
                "note": at(&notes, i),
            });
            if let Value::Object(map) = row {
                table.insert(map);
            }
        }
    }

    fn remove_serials(&self, stock_id: i64) {
        if let Some(mut table) = self.inner.tables.get_mut(&ResourceKind::SerialNumbers) {
            table.remove_where("stock_id", stock_id);
        }
    }

    // ========== Aggregates ==========

    /// Figures for `/api/dashboard`
    pub fn dashboard(&self) -> Value {
        let stocks = self.rows(ResourceKind::Stocks);
        let sum = |field: &str| -> Decimal {
            stocks
                .iter()
                .filter_map(|row| row.get(field).map(text))
                .filter_map(|v| v.parse::<Decimal>().ok())
                .sum()
        };

        json!({
            "total_products": self.count(ResourceKind::Products),
            "total_stocks": stocks.len(),
            "total_vendors": self.count(ResourceKind::Vendors),
            "total_warehouses": self.count(ResourceKind::Warehouses),
            "total_stock_value": sum("total_amount").to_string(),
            "total_due": sum("due_amount").to_string(),
            "total_categories": self.count(ResourceKind::Categories),
        })
    }

    // ========== Test hooks ==========

    /// Delay list responses whose keyword equals `keyword`
    pub fn set_keyword_latency(&self, keyword: impl Into<String>, delay: Duration) {
        self.inner
            .latency
            .insert(keyword.into().trim().to_lowercase(), delay);
    }

    pub(crate) fn latency_for(&self, keyword: &str) -> Option<Duration> {
        self.inner.latency.get(keyword).map(|d| *d)
    }

    pub(crate) async fn record(&self, request: RecordedRequest) {
        self.inner.requests.lock().await.push(request);
    }

    /// Every request received so far, oldest first
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.requests.lock().await.clone()
    }

    /// Number of requests matching `method` and `path` exactly
    pub async fn request_count(&self, method: &str, path: &str) -> usize {
        self.inner
            .requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub async fn clear_requests(&self) {
        self.inner.requests.lock().await.clear();
    }

    // ========== Demo data ==========

    /// State preloaded with a small catalog for local development
    pub fn with_demo_data() -> Self {
        let state = Self::new();
        for name in ["Computers", "Phones", "Accessories"] {
            state.insert(ResourceKind::Categories, json!({ "name": name }));
        }
        for name in ["Acme", "Globex", "Initech"] {
            state.insert(ResourceKind::Brands, json!({ "name": name }));
        }
        for (name, short) in [("Piece", "pcs"), ("Box", "box")] {
            state.insert(ResourceKind::Units, json!({ "name": name, "short_name": short }));
        }
        state.insert(
            ResourceKind::ProductTypes,
            json!({ "name": "Consumer Electronics", "is_electronic": true }),
        );
        state.insert(
            ResourceKind::ProductTypes,
            json!({ "name": "Stationery", "is_electronic": false }),
        );
        state.insert(
            ResourceKind::Vendors,
            json!({ "name": "Northwind Supply", "phone": "555-0100", "email": "orders@northwind.test" }),
        );
        state.insert(
            ResourceKind::Warehouses,
            json!({ "name": "Main Warehouse", "location": "Dock 1" }),
        );
        for name in ["Cash", "Bank Transfer"] {
            state.insert(ResourceKind::PaymentTypes, json!({ "name": name }));
        }
        state.insert(
            ResourceKind::Products,
            json!({
                "name": "Laptop 14\"", "code": "LP-14", "category_id": 1, "brand_id": 1,
                "unit_id": 1, "product_type_id": 1, "buying_price": "650.00", "selling_price": "899.00"
            }),
        );
        state.insert(
            ResourceKind::Products,
            json!({
                "name": "Notebook A5", "code": "NB-A5", "category_id": 3, "brand_id": 2,
                "unit_id": 2, "product_type_id": 2, "buying_price": "1.20", "selling_price": "2.50"
            }),
        );
        for (name, role) in [("Dana Reyes", "Manager"), ("Sam Okafor", "Cashier")] {
            state.insert(ResourceKind::Employees, json!({ "name": name, "role": role }));
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_serials_expand_and_follow_deletes() {
        let state = MockState::new();
        state.insert(ResourceKind::Products, json!({ "name": "Phone X", "category_id": 1 }));
        let stock = state.insert(
            ResourceKind::Stocks,
            json!({
                "product_id": 1, "vendor_id": 1, "warehouse_id": 1, "quantity": 2,
                "sku": "SN1,SN2", "color": "black,", "total_amount": "200.00", "due_amount": "50.00"
            }),
        );
        assert_eq!(stock["product_name"], "Phone X");

        let serials = state.rows(ResourceKind::SerialNumbers);
        assert_eq!(serials.len(), 2);
        assert_eq!(serials[0]["sku"], "SN1");
        assert_eq!(serials[0]["color"], "black");
        assert_eq!(serials[1]["color"], Value::Null);

        let dashboard = state.dashboard();
        assert_eq!(dashboard["total_stock_value"], "200.00");
        assert_eq!(dashboard["total_due"], "50.00");

        state.remove(ResourceKind::Stocks, 1);
        assert_eq!(state.count(ResourceKind::SerialNumbers), 0);
    }

    #[test]
    fn test_recorded_request_param() {
        let request = RecordedRequest {
            method: "GET".into(),
            path: "/api/brands".into(),
            query: Some("page=2&limit=10".into()),
        };
        assert_eq!(request.param("page"), Some("2"));
        assert_eq!(request.param("keyword"), None);
        assert_eq!(request.to_string(), "GET /api/brands?page=2&limit=10");
    }
}
