//! Request dispatcher for the ChurchSuite REST API.
//!
//! A `Dispatcher` performs one HTTP call against the configured base URL with
//! the account, application and auth headers attached, and wraps the result
//! in an [`Envelope`].

use std::sync::Arc;

use reqwest::{header, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::auth::TokenSource;

use super::{ApiError, Envelope, RawResponse, Result};

// ============================================================================
// Constants
// ============================================================================

/// Base URL for all resource endpoints
pub const API_BASE_URL: &str = "https://api.churchsuite.com";

const HEADER_ACCOUNT: &str = "X-Account";
const HEADER_APPLICATION: &str = "X-Application";
const HEADER_AUTH: &str = "X-Auth";

/// Where the `X-Auth` header value comes from.
#[derive(Clone)]
pub enum Auth {
    /// A fixed API key, resolved once at construction.
    Static(String),
    /// An OAuth2 access token, read from the source on every call.
    Token(Arc<dyn TokenSource>),
}

impl Auth {
    fn resolve(&self) -> Result<String> {
        match self {
            Auth::Static(token) => Ok(token.clone()),
            Auth::Token(source) => source.token().ok_or(ApiError::MissingAccessToken),
        }
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::Static(_) => f.write_str("Auth::Static(..)"),
            Auth::Token(_) => f.write_str("Auth::Token(..)"),
        }
    }
}

/// Body for post/put requests.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Already serialized; sent as-is.
    Text(String),
    Json(serde_json::Value),
}

impl RequestBody {
    /// Serialize any value into a JSON body.
    ///
    /// Going through `serde_json::Value` drops anything that has no JSON form
    /// before the body is encoded.
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(body)?))
    }

    fn into_string(self) -> Result<String> {
        match self {
            RequestBody::Text(text) => Ok(text),
            RequestBody::Json(value) => Ok(serde_json::to_string(&value)?),
        }
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        RequestBody::Json(value)
    }
}

/// Per-call request options for `get_with` / `delete_with`.
///
/// Extra headers are sent alongside the identity headers. `X-Account`,
/// `X-Application` and `X-Auth` always take the dispatcher's values.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: header::HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: header::HeaderName, value: header::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP dispatcher bound to one auth context.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    client: Client,
    base_url: String,
    account: String,
    application: String,
    auth: Auth,
}

impl Dispatcher {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        account: impl Into<String>,
        application: impl Into<String>,
        auth: Auth,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            account: account.into(),
            application: application.into(),
            auth,
        }
    }

    /// Create a dispatcher for another auth context, sharing the connection pool.
    pub fn with_auth(&self, auth: Auth) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            base_url: self.base_url.clone(),
            account: self.account.clone(),
            application: self.application.clone(),
            auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        // Paths are appended verbatim; callers supply the leading slash.
        format!("{}{}", self.base_url, path)
    }

    fn identity_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(HEADER_ACCOUNT, header_value(HEADER_ACCOUNT, &self.account)?);
        headers.insert(
            HEADER_APPLICATION,
            header_value(HEADER_APPLICATION, &self.application)?,
        );
        headers.insert(HEADER_AUTH, header_value(HEADER_AUTH, &self.auth.resolve()?)?);
        Ok(headers)
    }

    fn request(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        self.request_with(method, url, &RequestOptions::default())
    }

    fn request_with(&self, method: Method, url: &str, options: &RequestOptions) -> Result<RequestBuilder> {
        let mut headers = options.headers.clone();
        // extend replaces existing keys, so identity headers win
        headers.extend(self.identity_headers()?);
        Ok(self.client.request(method, url).headers(headers))
    }

    fn json_request(&self, method: Method, path: &str, body: RequestBody) -> Result<RequestBuilder> {
        Ok(self
            .request(method, &self.url(path))?
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into_string()?))
    }

    async fn send(&self, method: &Method, path: &str, request: RequestBuilder) -> Result<RawResponse> {
        let response = request.send().await?;
        let raw = RawResponse::read(response).await?;
        debug!(method = %method, path = path, status = %raw.status, "ChurchSuite response received");
        Ok(raw)
    }

    async fn dispatch<T: DeserializeOwned + Default>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Envelope<T>> {
        let raw = self.send(&method, path, request).await?;
        let data = raw.decode()?;
        Ok(Envelope::new(data, raw))
    }

    pub async fn get<T: DeserializeOwned + Default>(&self, path: &str) -> Result<Envelope<T>> {
        self.get_with(path, &RequestOptions::default()).await
    }

    pub async fn get_with<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Envelope<T>> {
        let request = self.request_with(Method::GET, &self.url(path), options)?;
        self.dispatch(Method::GET, path, request).await
    }

    pub async fn post<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: impl Into<RequestBody>,
    ) -> Result<Envelope<T>> {
        let request = self.json_request(Method::POST, path, body.into())?;
        self.dispatch(Method::POST, path, request).await
    }

    pub async fn put<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: impl Into<RequestBody>,
    ) -> Result<Envelope<T>> {
        let request = self.json_request(Method::PUT, path, body.into())?;
        self.dispatch(Method::PUT, path, request).await
    }

    /// Delete a resource. The body is kept in `raw` but not decoded.
    pub async fn delete(&self, path: &str) -> Result<Envelope<()>> {
        self.delete_with(path, &RequestOptions::default()).await
    }

    pub async fn delete_with(&self, path: &str, options: &RequestOptions) -> Result<Envelope<()>> {
        let request = self.request_with(Method::DELETE, &self.url(path), options)?;
        let raw = self.send(&Method::DELETE, path, request).await?;
        Ok(Envelope::new((), raw))
    }

    /// POST a form-encoded body to an absolute URL outside the API host.
    pub async fn post_form<T, F>(&self, url: &str, form: &F) -> Result<Envelope<T>>
    where
        T: DeserializeOwned + Default,
        F: Serialize + ?Sized,
    {
        let body = serde_urlencoded::to_string(form)?;
        let request = self
            .request(Method::POST, url)?
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);
        self.dispatch(Method::POST, url, request).await
    }
}

fn header_value(name: &'static str, value: &str) -> Result<header::HeaderValue> {
    let mut value = header::HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader(name))?;
    if name == HEADER_AUTH {
        value.set_sensitive(true);
    }
    Ok(value)
}
