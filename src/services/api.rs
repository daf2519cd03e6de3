//! HTTP client for the study-material backend
//!
//! One round trip per call, JSON in and out. Any non-2xx response becomes a
//! `RequestError::Status` carrying the body verbatim. Nothing is retried.

use crate::config::Config;
use crate::error::RequestError;
use crate::model::{EntryId, Payload, ResourceKind};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

/// The four collection operations, plus a liveness probe.
///
/// Implementations are shared with request worker threads.
pub trait ResourceApi: Send + Sync {
    fn fetch_collection(&self, resource: ResourceKind) -> Result<Value, RequestError>;

    fn create(&self, resource: ResourceKind, body: &Payload) -> Result<Value, RequestError>;

    fn update(
        &self,
        resource: ResourceKind,
        id: EntryId,
        body: &Payload,
    ) -> Result<Value, RequestError>;

    fn delete(&self, resource: ResourceKind, id: EntryId) -> Result<Value, RequestError>;

    fn health(&self) -> Result<(), RequestError>;
}

/// `ResourceApi` over HTTP
pub struct ApiClient {
    base: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            base: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn send(&self, request: RequestBuilder, method: &str, path: &str) -> Result<Value, RequestError> {
        tracing::debug!(method, path, "sending request");
        let response = request.send().map_err(|e| {
            tracing::warn!(method, path, error = %e, "request failed");
            RequestError::from(e)
        })?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            tracing::warn!(method, path, status = status.as_u16(), "backend rejected request");
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl ResourceApi for ApiClient {
    fn fetch_collection(&self, resource: ResourceKind) -> Result<Value, RequestError> {
        let path = resource.collection_path();
        self.send(self.client.get(self.url(&path)), "GET", &path)
    }

    fn create(&self, resource: ResourceKind, body: &Payload) -> Result<Value, RequestError> {
        let path = resource.collection_path();
        self.send(self.client.post(self.url(&path)).json(body), "POST", &path)
    }

    fn update(
        &self,
        resource: ResourceKind,
        id: EntryId,
        body: &Payload,
    ) -> Result<Value, RequestError> {
        let path = resource.entry_path(id);
        self.send(self.client.put(self.url(&path)).json(body), "PUT", &path)
    }

    fn delete(&self, resource: ResourceKind, id: EntryId) -> Result<Value, RequestError> {
        let path = resource.entry_path(id);
        self.send(self.client.delete(self.url(&path)), "DELETE", &path)
    }

    fn health(&self) -> Result<(), RequestError> {
        self.send(self.client.get(self.url("/health")), "GET", "/health")
            .map(|_| ())
    }
}
