//! Client configuration.
//!
//! A single `ClientOptions` record carries everything the client needs:
//! the account and application identifiers, the API key, and optionally the
//! OAuth2 application credentials. Nothing is read from the environment.

use serde::{Deserialize, Serialize};

use crate::api::API_BASE_URL;

/// Host under which per-account OAuth2 endpoints live (`{account}.{host}`)
const OAUTH_HOST: &str = "churchsuite.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Sent as `X-Account`; also the subdomain of the OAuth2 endpoints.
    pub account: String,
    /// Sent as `X-Application`.
    pub application: String,
    /// Sent as `X-Auth` on every non-"my" call.
    pub auth_token: String,
    #[serde(default)]
    pub oauth2: Option<OAuth2Options>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Origin of the OAuth2 endpoints; `https://{account}.churchsuite.com` when unset.
    #[serde(default)]
    pub oauth_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Options {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// A token obtained earlier; the client starts out authorized when set.
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_base_url() -> String {
    API_BASE_URL.to_string()
}

impl ClientOptions {
    pub fn new(
        account: impl Into<String>,
        application: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            application: application.into(),
            auth_token: auth_token.into(),
            oauth2: None,
            base_url: default_base_url(),
            oauth_url: None,
        }
    }

    pub fn with_oauth2(mut self, oauth2: OAuth2Options) -> Self {
        self.oauth2 = Some(oauth2);
        self
    }

    /// Point the client at another API host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_oauth_url(mut self, oauth_url: impl Into<String>) -> Self {
        self.oauth_url = Some(oauth_url.into());
        self
    }

    /// Origin the authorize and token URLs are built on.
    pub fn oauth_origin(&self) -> String {
        match self.oauth_url {
            Some(ref url) => url.clone(),
            None => format!("https://{}.{}", self.account, OAUTH_HOST),
        }
    }
}

impl OAuth2Options {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
}
