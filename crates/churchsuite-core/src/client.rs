//! Client factory.
//!
//! `Client` carries the API-key dispatcher and every always-present module.
//! `OAuthClient` adds the OAuth2 manager and the "my" module; it only exists
//! when OAuth2 options were supplied, so the capability is checked at
//! construction rather than on each call.

use std::ops::Deref;

use tracing::debug;

use crate::api::{ApiError, Auth, Dispatcher, Result};
use crate::auth::OAuth2;
use crate::config::ClientOptions;
use crate::modules::{
    Account, AddressBook, Attendance, Calendar, ChildrenModule, Giving, My, RotasModule,
    SmallGroups,
};

/// Client authenticated with the account API key.
#[derive(Debug, Clone)]
pub struct Client {
    http: Dispatcher,
}

impl Client {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let pool = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(pool, options))
    }

    /// Build on an existing `reqwest::Client`, sharing its connection pool.
    pub fn with_http_client(pool: reqwest::Client, options: &ClientOptions) -> Self {
        let http = Dispatcher::new(
            pool,
            options.base_url.clone(),
            options.account.clone(),
            options.application.clone(),
            Auth::Static(options.auth_token.clone()),
        );
        Self { http }
    }

    /// The underlying dispatcher, for endpoints without a typed method.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.http
    }

    pub fn account(&self) -> Account<'_> {
        Account::new(&self.http)
    }

    pub fn address_book(&self) -> AddressBook<'_> {
        AddressBook::new(&self.http)
    }

    pub fn attendance(&self) -> Attendance<'_> {
        Attendance::new(&self.http)
    }

    pub fn calendar(&self) -> Calendar<'_> {
        Calendar::new(&self.http)
    }

    pub fn children(&self) -> ChildrenModule<'_> {
        ChildrenModule::new(&self.http)
    }

    pub fn giving(&self) -> Giving<'_> {
        Giving::new(&self.http)
    }

    pub fn rotas(&self) -> RotasModule<'_> {
        RotasModule::new(&self.http)
    }

    pub fn small_groups(&self) -> SmallGroups<'_> {
        SmallGroups::new(&self.http)
    }
}

/// Client with OAuth2 and "my" self-service access. Derefs to `Client`.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    client: Client,
    oauth2: OAuth2,
    my_http: Dispatcher,
}

impl OAuthClient {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let client = Client::new(options)?;
        Self::from_client(client, options)
    }

    fn from_client(client: Client, options: &ClientOptions) -> Result<Self> {
        let oauth2_options = options.oauth2.as_ref().ok_or(ApiError::MissingOAuth2Config)?;
        let oauth2 = OAuth2::new(options, oauth2_options, client.http.clone())?;
        // The "my" dispatcher reads the token on each call, so later
        // set_token/create_token calls apply to the next request.
        let my_http = client.http.with_auth(Auth::Token(oauth2.token_source()));
        Ok(Self {
            client,
            oauth2,
            my_http,
        })
    }

    pub fn oauth2(&self) -> &OAuth2 {
        &self.oauth2
    }

    pub fn my(&self) -> My<'_> {
        My::new(&self.my_http)
    }
}

impl Deref for OAuthClient {
    type Target = Client;

    fn deref(&self) -> &Client {
        &self.client
    }
}

/// Either client flavour, as chosen by the options.
#[derive(Debug, Clone)]
pub enum AnyClient {
    Basic(Client),
    OAuth(OAuthClient),
}

impl AnyClient {
    /// The API-key client, present in both variants.
    pub fn client(&self) -> &Client {
        match self {
            AnyClient::Basic(client) => client,
            AnyClient::OAuth(client) => &client.client,
        }
    }

    pub fn as_oauth(&self) -> Option<&OAuthClient> {
        match self {
            AnyClient::Basic(_) => None,
            AnyClient::OAuth(client) => Some(client),
        }
    }
}

/// Build a client; OAuth2 capability is present iff `options.oauth2` is set.
pub fn create_client(options: &ClientOptions) -> Result<AnyClient> {
    let client = Client::new(options)?;
    if options.oauth2.is_none() {
        debug!(account = %options.account, "Created API key client");
        return Ok(AnyClient::Basic(client));
    }
    debug!(account = %options.account, "Created OAuth2 client");
    Ok(AnyClient::OAuth(OAuthClient::from_client(client, options)?))
}
