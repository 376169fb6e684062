//! Transport layer
//!
//! [`HttpClient`] is the seam between the controllers and the backend.
//! [`NetworkHttpClient`] talks to a real server; [`OneshotHttpClient`]
//! drives an axum [`Router`](axum::Router) in-process.

mod body;
pub mod http;
pub mod http_oneshot;
mod response;

pub use body::{Attachment, RequestBody, form_fields};
pub use http::{HttpClient, NetworkHttpClient};
pub use http_oneshot::OneshotHttpClient;
