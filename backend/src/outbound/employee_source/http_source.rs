//! Reqwest-backed employee source adapter.
//!
//! This adapter owns transport details only: request serialisation, status
//! inspection, and JSON decoding into domain employee records. Failure
//! mapping follows one discipline for every call: transport errors and
//! non-success statuses are `Unavailable`, undecodable bodies after a
//! successful status are `Malformed`, and local payload serialisation
//! failures are `Serialization`. A 404 on the by-id fetch is the one
//! non-error outcome. No retries; a failed attempt surfaces immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::dto::{
    CreateEmployeeBodyDto, DeleteEmployeeBodyDto, DeleteEnvelopeDto, EmployeeDto,
    EmployeeEnvelopeDto, EmployeeListEnvelopeDto,
};
use crate::domain::employee::{CreateEmployee, Employee};
use crate::domain::ports::{EmployeeSource, EmployeeSourceError};

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// HTTP adapter that talks to one employee mock server endpoint.
///
/// Holds only immutable configuration (endpoint plus a cloned reqwest
/// client), so instances are freely shared across concurrent requests.
pub struct EmployeeHttpSource {
    client: Client,
    endpoint: Url,
}

impl EmployeeHttpSource {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS))
    }

    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    fn resource_url(&self, id: &str) -> Result<Url, EmployeeSourceError> {
        // Url::join would treat the endpoint's last segment as a file name;
        // extend the path segments instead.
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| {
                EmployeeSourceError::unavailable("employee endpoint cannot carry path segments")
            })?
            .push(id);
        Ok(url)
    }

    fn encode<T: Serialize>(body: &T) -> Result<Vec<u8>, EmployeeSourceError> {
        serde_json::to_vec(body).map_err(|error| EmployeeSourceError::serialization(error.to_string()))
    }

    async fn read_success_body(
        response: reqwest::Response,
        operation: &str,
    ) -> Result<Vec<u8>, EmployeeSourceError> {
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(%status, operation, "employee request failed downstream");
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl EmployeeSource for EmployeeHttpSource {
    async fn fetch_all(&self) -> Result<Vec<Employee>, EmployeeSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let body = Self::read_success_body(response, "list").await?;
        let envelope: EmployeeListEnvelopeDto = decode(&body)?;
        Ok(envelope
            .data
            .into_iter()
            .map(EmployeeDto::into_domain)
            .collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Employee>, EmployeeSourceError> {
        let url = self.resource_url(id)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        // 404 is a handled outcome here, not an adapter fault; every other
        // non-success status still maps to Unavailable.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = Self::read_success_body(response, "get-by-id").await?;
        let envelope: EmployeeEnvelopeDto = decode(&body)?;
        Ok(envelope.data.map(EmployeeDto::into_domain))
    }

    async fn create(
        &self,
        request: &CreateEmployee,
    ) -> Result<Option<Employee>, EmployeeSourceError> {
        let body = Self::encode(&CreateEmployeeBodyDto::from(request))?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let payload = Self::read_success_body(response, "create").await?;
        let envelope: EmployeeEnvelopeDto = decode(&payload)?;
        Ok(envelope.data.map(EmployeeDto::into_domain))
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, EmployeeSourceError> {
        let body = Self::encode(&DeleteEmployeeBodyDto { name })?;
        let response = self
            .client
            .delete(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let payload = Self::read_success_body(response, "delete").await?;
        let envelope: DeleteEnvelopeDto = decode(&payload)?;
        Ok(envelope.data.unwrap_or(false))
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, EmployeeSourceError> {
    serde_json::from_slice(body).map_err(|error| {
        EmployeeSourceError::malformed(format!("invalid employee JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> EmployeeSourceError {
    EmployeeSourceError::unavailable(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> EmployeeSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };
    EmployeeSourceError::unavailable(message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
