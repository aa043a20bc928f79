//! Response envelope returned by every dispatcher call.

use reqwest::{header::HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{ApiError, Result};

/// The undecoded HTTP response, kept for caller inspection.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self {
            url,
            status,
            headers,
            body,
        })
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::invalid_response(self.status, &e, &self.body))
    }

    /// Decode the body for an envelope.
    ///
    /// 2xx bodies must fit `T`. A non-2xx body only has to be valid JSON;
    /// when it does not fit `T` (a bare string, an array) `data` is
    /// `T::default()` and the body is still available in `raw`.
    pub(crate) fn decode<T: DeserializeOwned + Default>(&self) -> Result<T> {
        if self.status.is_success() {
            return self.json();
        }
        let value: Value = self.json()?;
        match serde_json::from_value(value) {
            Ok(data) => Ok(data),
            Err(e) => {
                debug!(status = %self.status, error = %e, "Error body does not fit the response type");
                Ok(T::default())
            }
        }
    }
}

/// Uniform wrapper around a call result.
///
/// Non-2xx responses are not errors: the envelope carries whatever the server
/// returned and callers check `status` themselves.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub data: T,
    pub raw: RawResponse,
    pub status: StatusCode,
    pub status_text: String,
}

impl<T> Envelope<T> {
    pub(crate) fn new(data: T, raw: RawResponse) -> Self {
        let status = raw.status;
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        Self {
            data,
            raw,
            status,
            status_text,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body exactly as the server sent it, as JSON.
    pub fn body(&self) -> Result<Value> {
        self.raw.json()
    }

    /// Discard the envelope and keep the decoded body.
    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            data: f(self.data),
            raw: self.raw,
            status: self.status,
            status_text: self.status_text,
        }
    }
}
