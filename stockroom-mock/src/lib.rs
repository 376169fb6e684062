//! Stockroom Mock - in-memory stand-in for the inventory REST backend
//!
//! Serves every list endpoint the client uses, in both envelope shapes,
//! with the backend's validation (422) and not-found (404) bodies. Tests
//! drive [`router`] in-process; the binary serves it over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod kind;
pub mod state;
pub mod store;
pub mod validation;

pub use api::router;
pub use config::MockConfig;
pub use error::{MockError, MockResult};
pub use kind::{Envelope, ResourceKind};
pub use state::{MockState, RecordedRequest};
