//! Shared types for the Stockroom workspace
//!
//! Domain models, response envelopes, field-level error types and the
//! stock entry form engine. Everything here is pure data and arithmetic;
//! network access lives in `stockroom-client`.

pub mod error;
pub mod models;
pub mod response;
pub mod stock;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{FieldErrors, FormError};
pub use models::{CatalogRecord, Status};
pub use response::{MessageResponse, PageEnvelope, Pagination};
