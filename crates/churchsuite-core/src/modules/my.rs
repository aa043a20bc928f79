//! Self-service endpoints for the person who granted OAuth2 access.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::api::{Dispatcher, Envelope, Result};
use crate::models::{MyChild, MyChildren, MyContacts, MyDetails};
use crate::utils::encode_query;

#[skip_serializing_none]
#[derive(Serialize)]
struct MyContactsParams<'a> {
    q: Option<&'a str>,
}

/// Must be given a dispatcher whose auth is the OAuth2 token source.
#[derive(Debug, Clone, Copy)]
pub struct My<'a> {
    http: &'a Dispatcher,
}

impl<'a> My<'a> {
    pub fn new(http: &'a Dispatcher) -> Self {
        Self { http }
    }

    pub async fn details(&self) -> Result<Envelope<MyDetails>> {
        self.http.get("/v1/my/details").await
    }

    pub async fn contacts(&self, query: Option<&str>) -> Result<Envelope<MyContacts>> {
        let params = encode_query(&MyContactsParams { q: query })?;
        self.http.get(&format!("/v1/my/contacts{}", params)).await
    }

    pub async fn children(&self) -> Result<Envelope<MyChildren>> {
        self.http.get("/v1/my/children").await
    }

    pub async fn child(&self, id: i64) -> Result<Envelope<MyChild>> {
        self.http.get(&format!("/v1/my/child/{}", id)).await
    }
}
