use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::core::error::{ConfigError, TranslateError};

/// One completed HTTP exchange. Non-success statuses are not errors at this
/// layer; status interpretation belongs to the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout_ms: u64,
}

impl HttpTransport {
    pub fn new(timeout_ms: u64) -> Result<Self, ConfigError> {
        Self::with_client(reqwest::Client::new(), timeout_ms)
    }

    /// Wraps an externally owned client so callers can share one connection
    /// pool across adapters.
    pub fn with_client(client: reqwest::Client, timeout_ms: u64) -> Result<Self, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout { timeout_ms });
        }

        Ok(Self { client, timeout_ms })
    }

    /// Serializes `body` to JSON and POSTs it to `url` with the given
    /// headers. Returns the reply for every completed exchange regardless of
    /// status; only send/read failures map to errors.
    pub async fn post_json<TReq>(
        &self,
        service: &str,
        url: &str,
        headers: &HeaderMap,
        body: &TReq,
    ) -> Result<HttpReply, TranslateError>
    where
        TReq: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(|error| TranslateError::Serialization {
            service: service.to_string(),
            message: error.to_string(),
        })?;

        let response = self
            .client
            .post(url)
            .timeout(Duration::from_millis(self.timeout_ms))
            .headers(headers.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(payload)
            .send()
            .await
            .map_err(|error| TranslateError::Transport {
                service: service.to_string(),
                message: error.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|error| TranslateError::Transport {
                service: service.to_string(),
                message: format!("failed to read response body: {error}"),
            })?;

        Ok(HttpReply { status, body })
    }
}
