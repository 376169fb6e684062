//! Data models
//!
//! Records as returned by the REST backend. All IDs are `i64`; money is
//! `rust_decimal::Decimal` and accepts both JSON numbers and numeric strings.

/// Implement [`CatalogRecord`] for structs with `id`, `name` and `status` fields
macro_rules! impl_catalog_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::CatalogRecord for $ty {
                fn id(&self) -> i64 {
                    self.id
                }

                fn name(&self) -> &str {
                    &self.name
                }

                fn status(&self) -> $crate::models::Status {
                    self.status
                }
            }
        )+
    };
}

pub(crate) use impl_catalog_record;

pub mod brand;
pub mod category;
pub mod dashboard;
pub mod payload;
pub mod payment_type;
pub mod product;
pub mod product_type;
pub mod serial;
pub mod status;
pub mod stock;
pub mod transaction;
pub mod unit;
pub mod variant;
pub mod vendor;
pub mod warehouse;

// Re-exports
pub use brand::*;
pub use category::*;
pub use dashboard::*;
pub use payload::*;
pub use payment_type::*;
pub use product::*;
pub use product_type::*;
pub use serial::*;
pub use status::*;
pub use stock::*;
pub use transaction::*;
pub use unit::*;
pub use variant::*;
pub use vendor::*;
pub use warehouse::*;

/// Common surface of every listed record
///
/// Every entity carries an id and an `active`/`inactive` status that is
/// flipped independently of its other fields.
pub trait CatalogRecord {
    fn id(&self) -> i64;

    /// Display label (name, reference number, ...)
    fn name(&self) -> &str;

    fn status(&self) -> Status;
}
