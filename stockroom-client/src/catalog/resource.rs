//! REST resources
//!
//! One marker type per backend endpoint. The marker fixes the record type,
//! the path and the wording of fallback notices, so a
//! [`CatalogController`](super::CatalogController) needs nothing else to
//! drive a page.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{CatalogRecord, PageEnvelope};
use shared::models::{
    Brand, Category, PaymentType, Product, ProductType, SerialNumber, StockEntry, SubCategory,
    SubItem, Transaction, Unit, Variant, Vendor, Warehouse,
};

use crate::client::HttpClient;
use crate::query::ListQuery;
use crate::{ClientError, ClientResult};

/// What a status toggle sends back to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPayload {
    /// `{name, status}`
    NameAndStatus,
    /// The whole record with the flipped status, for endpoints whose update
    /// validation requires every column
    FullRecord,
}

/// A list endpoint of the backend
pub trait Resource: Send + Sync + 'static {
    type Item: CatalogRecord + Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Collection path, e.g. `/api/brands`
    const PATH: &'static str;

    /// Plural noun used in notices ("Failed to fetch brands")
    const LABEL: &'static str;

    /// Singular noun used in notices ("Brand created successfully")
    const SINGULAR: &'static str;

    const STATUS_PAYLOAD: StatusPayload;

    /// Path of a single record
    fn item_path(id: i64) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

/// GET one page of `R` and normalize whichever envelope comes back
pub async fn fetch_page<C, R>(client: &C, query: &ListQuery) -> ClientResult<PageEnvelope<R::Item>>
where
    C: HttpClient,
    R: Resource,
{
    let value: serde_json::Value = client.get(&query.to_path(R::PATH)).await?;
    PageEnvelope::from_value(value, query.page, query.limit)
        .map_err(|e| ClientError::InvalidResponse(format!("{} envelope: {}", R::LABEL, e)))
}

macro_rules! resources {
    ($($name:ident => $item:ty, $path:literal, $label:literal, $singular:literal, $status:ident;)+) => {
        $(
            #[doc = concat!("`", $path, "`")]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Resource for $name {
                type Item = $item;
                const PATH: &'static str = $path;
                const LABEL: &'static str = $label;
                const SINGULAR: &'static str = $singular;
                const STATUS_PAYLOAD: StatusPayload = StatusPayload::$status;
            }
        )+
    };
}

resources! {
    Brands => Brand, "/api/brands", "brands", "Brand", NameAndStatus;
    Categories => Category, "/api/categories", "categories", "Category", NameAndStatus;
    SubCategories => SubCategory, "/api/sub-categories", "sub categories", "Sub category", FullRecord;
    SubItems => SubItem, "/api/sub-items", "sub items", "Sub item", FullRecord;
    Products => Product, "/api/products", "products", "Product", FullRecord;
    ProductTypes => ProductType, "/api/product-type", "product types", "Product type", NameAndStatus;
    Units => Unit, "/api/units", "units", "Unit", NameAndStatus;
    Vendors => Vendor, "/api/vendors", "vendors", "Vendor", FullRecord;
    Warehouses => Warehouse, "/api/warehouses", "warehouses", "Warehouse", NameAndStatus;
    PaymentTypes => PaymentType, "/api/payment-types", "payment types", "Payment type", NameAndStatus;
    Stocks => StockEntry, "/api/stocks", "stocks", "Stock", FullRecord;
    SerialNumbers => SerialNumber, "/api/serial-list", "serial numbers", "Serial number", FullRecord;
    Variants => Variant, "/api/variants", "variants", "Variant", FullRecord;
    Transactions => Transaction, "/api/transaction", "transactions", "Transaction", FullRecord;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path() {
        assert_eq!(Brands::item_path(7), "/api/brands/7");
        assert_eq!(ProductTypes::item_path(1), "/api/product-type/1");
        assert_eq!(Transactions::PATH, "/api/transaction");
    }
}
