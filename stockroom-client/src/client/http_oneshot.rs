// stockroom-client/src/client/http_oneshot.rs
// In-process client driving an axum router

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::body::{RequestBody, boundary, encode_multipart};
use super::http::HttpClient;
use super::response::decode;
use crate::{ClientError, ClientResult};

/// In-process client
///
/// Each request is handed to a clone of the router with `oneshot`;
/// nothing touches a socket.
///
/// # Example
///
/// ```ignore
/// use stockroom_client::client::OneshotHttpClient;
///
/// let client = OneshotHttpClient::new(stockroom_mock::router(state));
/// let page: serde_json::Value = client.get("/api/brands?page=1&limit=10").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Option<String>,
}

impl OneshotHttpClient {
    /// Wrap a router
    ///
    /// `router` must already have its state attached.
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build the HTTP request for one call
    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            RequestBody::Empty => builder.body(Body::empty()),
            RequestBody::Json(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&value)?)),
            RequestBody::Multipart { fields, attachment } => {
                let boundary = boundary();
                let bytes = encode_multipart(&boundary, &fields, &attachment);
                builder
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={}", boundary),
                    )
                    .body(Body::from(bytes))
            }
        };

        request.map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    /// Run one request and decode the response
    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        decode(status, &body_bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, RequestBody::Empty)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> ClientResult<T> {
        let request = self.build_request(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> ClientResult<T> {
        let request = self.build_request(Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, RequestBody::Empty)?;
        self.execute(request).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
