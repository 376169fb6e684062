//! Catalog pages
//!
//! - [`resource`]: one marker type per REST endpoint
//! - [`CatalogController`]: paginated list, filters, debounced search and
//!   the create/update/toggle/delete cycle for any resource
//! - [`Notice`]: success and error messages for the user

mod controller;
mod notice;
mod operation;
pub mod resource;
mod state;

pub use controller::CatalogController;
pub use notice::{Notice, NoticeBus, NoticeLevel};
pub use operation::{OperationGuard, OperationKey, Operations};
pub use resource::{Resource, StatusPayload, fetch_page};
pub use state::{FetchOutcome, FormState, ListSnapshot, LoadState};
