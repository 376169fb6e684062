//! Mock REST API

mod handler;
mod payload;

use axum::{Router, middleware, routing::get};

use crate::state::MockState;

pub use handler::envelope;
pub use payload::Payload;

/// Build the mock router with its state applied
///
/// Static routes (`/api/dashboard`, `/api/reports/{kind}`) take precedence
/// over the generic `/api/{resource}` routes.
pub fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/dashboard", get(handler::dashboard))
        .route("/api/reports/{kind}", get(handler::report))
        .route("/api/{resource}", get(handler::list).post(handler::create))
        .route(
            "/api/{resource}/{id}",
            get(handler::show)
                .put(handler::update)
                .delete(handler::destroy),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handler::record_request,
        ))
        .with_state(state)
}
