//! OAuth2 authorization-code flow for "my" self-service access.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::api::{ApiError, Dispatcher, Envelope, Result};
use crate::config::{ClientOptions, OAuth2Options};
use crate::models::lenient::record;

use super::token::{SharedToken, TokenSource};

record! {
    /// Body returned by the token endpoint.
    pub struct TokenResponse {
        pub access_token: String,
        pub token_type: String,
        pub expires_in: i64,
        pub refresh_token: String,
    }
}

/// Result of a code exchange that reached the server.
#[derive(Debug, Clone)]
pub enum TokenOutcome {
    /// The access token now held by the client.
    Token(String),
    /// The server did not return 200; the state is unchanged.
    Failed(Envelope<TokenResponse>),
}

impl TokenOutcome {
    pub fn token(&self) -> Option<&str> {
        match self {
            TokenOutcome::Token(token) => Some(token),
            TokenOutcome::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    NoToken,
    Authorizing,
    Authorized,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    code: &'a str,
    redirect_uri: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Holds the access token and exchanges authorization codes for it.
#[derive(Clone)]
pub struct OAuth2 {
    http: Dispatcher,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    authorization_url: String,
    token_url: String,
    token: SharedToken,
    exchanging: Arc<AtomicBool>,
}

impl std::fmt::Debug for OAuth2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .field("token_url", &self.token_url)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Clears the in-flight flag even if the exchange future is dropped.
struct ExchangeGuard<'a>(&'a AtomicBool);

impl Drop for ExchangeGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl OAuth2 {
    /// `http` must be the primary (API key) dispatcher.
    pub fn new(options: &ClientOptions, oauth2: &OAuth2Options, http: Dispatcher) -> Result<Self> {
        let base = format!("{}/oauth", options.oauth_origin());
        let params = [
            ("response_type", "code"),
            ("client_id", oauth2.client_id.as_str()),
            ("redirect_uri", oauth2.redirect_uri.as_str()),
        ];
        let query = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let authorization_url = format!("{}/authorize?{}", base, query);
        Url::parse(&authorization_url)?;

        Ok(Self {
            http,
            client_id: oauth2.client_id.clone(),
            client_secret: oauth2.client_secret.clone(),
            redirect_uri: oauth2.redirect_uri.clone(),
            authorization_url,
            token_url: format!("{}/token", base),
            token: SharedToken::new(oauth2.access_token.clone()),
            exchanging: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Where to send the user to grant access. Constructed, never called.
    pub fn authorization_url(&self) -> &str {
        &self.authorization_url
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub fn state(&self) -> TokenState {
        if self.token.get().is_some() {
            TokenState::Authorized
        } else if self.exchanging.load(Ordering::SeqCst) {
            TokenState::Authorizing
        } else {
            TokenState::NoToken
        }
    }

    /// Exchange a temporary authorization code for an access token.
    ///
    /// Returns the held token without a request when already authorized.
    /// A non-200 answer comes back as `TokenOutcome::Failed`; only a missing
    /// code or a transport/parse failure is an `Err`.
    pub async fn create_token(&self, code: Option<&str>) -> Result<TokenOutcome> {
        if let Some(token) = self.token.get() {
            return Ok(TokenOutcome::Token(token));
        }
        let code = match code {
            Some(code) if !code.is_empty() => code,
            _ => return Err(ApiError::MissingAuthorizationCode),
        };

        self.exchanging.store(true, Ordering::SeqCst);
        let _guard = ExchangeGuard(&self.exchanging);

        let form = TokenRequest {
            grant_type: "authorization_code",
            code,
            redirect_uri: &self.redirect_uri,
            client_id: &self.client_id,
            client_secret: &self.client_secret,
        };
        let envelope: Envelope<TokenResponse> = self.http.post_form(&self.token_url, &form).await?;

        if envelope.status == StatusCode::OK {
            if let Some(token) = envelope.data.access_token.clone() {
                debug!("OAuth2 access token obtained");
                self.token.set(token.clone());
                return Ok(TokenOutcome::Token(token));
            }
        }

        warn!(status = %envelope.status, "OAuth2 token exchange did not return an access token");
        Ok(TokenOutcome::Failed(envelope))
    }

    /// Replace the access token, whatever the current state.
    pub fn set_token(&self, token: impl Into<String>) {
        self.token.set(token.into());
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.get()
    }

    /// Accessor handed to dispatchers that authenticate with the access token.
    pub fn token_source(&self) -> Arc<dyn TokenSource> {
        Arc::new(self.token.clone())
    }
}
