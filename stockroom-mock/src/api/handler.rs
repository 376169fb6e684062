//! Resource handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use serde_json::{Value, json};

use super::payload::Payload;
use crate::error::{MockError, MockResult};
use crate::kind::{Envelope, ResourceKind};
use crate::state::{MockState, RecordedRequest};
use crate::store::{ListParams, Record};
use crate::validation::validate;

fn resolve(segment: &str) -> MockResult<ResourceKind> {
    ResourceKind::from_segment(segment)
        .ok_or_else(|| MockError::not_found(format!("Resource {} not found", segment)))
}

fn missing(kind: ResourceKind, id: i64) -> MockError {
    MockError::not_found(format!("{} {} not found", kind.singular(), id))
}

/// Wrap a page of rows in the envelope `envelope` prescribes
pub fn envelope(envelope: Envelope, rows: Vec<Record>, params: &ListParams, total: u64) -> Value {
    let total_pages = params.total_pages(total);
    match envelope {
        Envelope::Nested => json!({
            "pagination": {
                "data": rows,
                "current_page": params.page,
                "per_page": params.limit,
                "total_items": total,
                "total_pages": total_pages,
            }
        }),
        Envelope::Flat => json!({
            "data": rows,
            "page": params.page,
            "perPage": params.limit,
            "totalItems": total,
            "totalPages": total_pages,
        }),
    }
}

/// GET /api/{resource}
pub async fn list(
    State(state): State<MockState>,
    Path(segment): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> MockResult<Json<Value>> {
    let kind = resolve(&segment)?;
    let params = ListParams::from_query(query);

    if let Some(delay) = params
        .keyword
        .as_deref()
        .and_then(|keyword| state.latency_for(keyword))
    {
        tokio::time::sleep(delay).await;
    }

    let (rows, total) = state.list(kind, &params);
    Ok(Json(envelope(kind.envelope(), rows, &params, total)))
}

/// GET /api/{resource}/{id}
pub async fn show(
    State(state): State<MockState>,
    Path((segment, id)): Path<(String, i64)>,
) -> MockResult<Json<Value>> {
    let kind = resolve(&segment)?;
    let row = state.get(kind, id).ok_or_else(|| missing(kind, id))?;
    Ok(Json(json!({ "data": row })))
}

/// POST /api/{resource}
pub async fn create(
    State(state): State<MockState>,
    Path(segment): Path<String>,
    Payload(record): Payload,
) -> MockResult<(StatusCode, Json<Value>)> {
    let kind = resolve(&segment)?;
    validate(kind, &record)?;

    let row = state.create(kind, record);
    tracing::info!(resource = kind.segment(), id = ?row.get("id"), "created");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("{} created successfully", kind.singular()),
            "data": row,
        })),
    ))
}

/// PUT /api/{resource}/{id}
pub async fn update(
    State(state): State<MockState>,
    Path((segment, id)): Path<(String, i64)>,
    Payload(record): Payload,
) -> MockResult<Json<Value>> {
    let kind = resolve(&segment)?;
    if state.get(kind, id).is_none() {
        return Err(missing(kind, id));
    }
    validate(kind, &record)?;

    let row = state
        .update(kind, id, record)
        .ok_or_else(|| missing(kind, id))?;
    tracing::info!(resource = kind.segment(), id, "updated");
    Ok(Json(json!({
        "message": format!("{} updated successfully", kind.singular()),
        "data": row,
    })))
}

/// DELETE /api/{resource}/{id}
pub async fn destroy(
    State(state): State<MockState>,
    Path((segment, id)): Path<(String, i64)>,
) -> MockResult<Json<Value>> {
    let kind = resolve(&segment)?;
    state.remove(kind, id).ok_or_else(|| missing(kind, id))?;
    tracing::info!(resource = kind.segment(), id, "deleted");
    Ok(Json(json!({
        "message": format!("{} deleted successfully", kind.singular()),
    })))
}

/// GET /api/dashboard
pub async fn dashboard(State(state): State<MockState>) -> Json<Value> {
    Json(json!({ "data": state.dashboard() }))
}

/// GET /api/reports/{kind}
pub async fn report(
    State(state): State<MockState>,
    Path(kind): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> MockResult<Json<Value>> {
    let source = match kind.as_str() {
        "inventory" => ResourceKind::Stocks,
        "employees" => ResourceKind::Employees,
        "sales" => ResourceKind::Transactions,
        other => return Err(MockError::not_found(format!("Report {} not found", other))),
    };
    let params = ListParams::from_query(query);
    let (rows, total) = state.list(source, &params);
    Ok(Json(envelope(Envelope::Flat, rows, &params, total)))
}

/// Record every request before it is routed
pub async fn record_request(State(state): State<MockState>, req: Request, next: Next) -> Response {
    state
        .record(RecordedRequest {
            method: req.method().to_string(),
            path: req.uri().path().to_string(),
            query: req.uri().query().map(str::to_string),
        })
        .await;
    next.run(req).await
}
