// stockroom-client/src/client/http.rs
// Transport trait and the reqwest-backed client

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::body::{RequestBody, form_fields};
use super::response::decode;
use crate::{ClientConfig, ClientResult};

/// Transport used by every API in this crate
///
/// Updates go through [`HttpClient::put`]; there is no POST-with-`_method`
/// override.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> ClientResult<T>;
    async fn put<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    fn token(&self) -> Option<&str>;
}

/// Client for a backend reachable over the network
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut req = self
            .client
            .request(method, &url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    fn with_body(req: RequestBuilder, body: RequestBody) -> ClientResult<RequestBuilder> {
        Ok(match body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart { fields, attachment } => {
                let mut form = Form::new();
                for (name, value) in form_fields(&fields) {
                    form = form.text(name, value);
                }
                let part = Part::bytes(attachment.bytes)
                    .file_name(attachment.file_name)
                    .mime_str(&attachment.content_type)?;
                req.multipart(form.part(attachment.field, part))
            }
        })
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        decode(status, &bytes)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        self.execute(self.request(Method::GET, path)).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let req = Self::with_body(self.request(Method::POST, path), body)?;
        self.execute(req).await
    }

    async fn put<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> ClientResult<T> {
        tracing::debug!(path, "PUT");
        let req = Self::with_body(self.request(Method::PUT, path), body)?;
        self.execute(req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "DELETE");
        self.execute(self.request(Method::DELETE, path)).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_client_trims_base_url() {
        let client = NetworkHttpClient::new("http://localhost:8090/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8090");
        assert!(client.token().is_none());

        let client = client.with_token("abc");
        assert_eq!(client.token(), Some("abc"));
    }
}
