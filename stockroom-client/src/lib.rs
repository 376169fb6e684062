//! Stockroom Client - REST client for the inventory backend
//!
//! Provides the transport ([`client`]), a generic list/form controller for
//! every catalog page ([`catalog`]), lookup lists ([`lookups`]), stock
//! entry submission ([`stock`]) and read-only reports ([`reports`]).

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod lookups;
pub mod query;
pub mod reports;
pub mod stock;

pub use catalog::{
    CatalogController, FetchOutcome, ListSnapshot, LoadState, Notice, NoticeBus, NoticeLevel,
    OperationKey,
};
pub use client::{Attachment, HttpClient, NetworkHttpClient, OneshotHttpClient, RequestBody};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use lookups::Lookups;
pub use query::ListQuery;
pub use reports::{ReportKind, ReportsApi};
pub use stock::StockApi;

// Re-export shared types for convenience
pub use shared::{FieldErrors, FormError, MessageResponse, PageEnvelope, Pagination, Status};
