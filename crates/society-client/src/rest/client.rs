// ============================================================================
// Society Client - REST Client
// File: crates/society-client/src/rest/client.rs
// ============================================================================
//! Thin wrapper over reqwest for the backend's resource endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use society_core::error::DomainError;
use society_shared::config::BackendSettings;
use thiserror::Error;
use tracing::debug;

use super::models::ListEnvelope;

#[derive(Error, Debug)]
pub enum RestError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error ({status}): {message}")]
    Status { status: u16, message: String },
}

impl RestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Status { status, .. } => Some(*status),
            RestError::Network(_) => None,
        }
    }

    pub fn into_domain(self) -> DomainError {
        match self {
            RestError::Network(msg) => DomainError::Network(msg),
            RestError::Status { message, .. } => DomainError::Backend(message),
        }
    }
}

impl From<reqwest::Error> for RestError {
    fn from(e: reqwest::Error) -> Self {
        RestError::Network(e.to_string())
    }
}

/// Error bodies arrive as `{"detail": ...}` or `{"message": ...}`; both
/// keys are tolerated.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "message"] {
        if let Some(detail) = value.get(key).and_then(|v| v.as_str()) {
            return Some(detail.to_string());
        }
    }
    None
}

#[derive(Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            http: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &BackendSettings) -> Self {
        Self::new(
            &settings.base_url,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RestError> {
        debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    /// GET that tolerates plain-array and paginated envelope responses.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, RestError> {
        let envelope: ListEnvelope<T> = self.get_json(path).await?;
        Ok(envelope.into_vec())
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RestError> {
        debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RestError> {
        debug!("PUT {}", path);
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RestError> {
        debug!("PATCH {}", path);
        let response = self.http.patch(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), RestError> {
        debug!("DELETE {}", path);
        let response = self.http.delete(self.url(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RestError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status.as_u16(), &body));
        }
        response
            .json()
            .await
            .map_err(|e| RestError::Network(format!("Invalid response body: {}", e)))
    }

    fn status_error(status: u16, body: &str) -> RestError {
        let message = error_detail(body).unwrap_or_else(|| {
            if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                body.to_string()
            }
        });
        RestError::Status { status, message }
    }
}
