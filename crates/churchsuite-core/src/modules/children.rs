//! Children's ministry: children, their groups and tags.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::api::{Dispatcher, Envelope, Result};
use crate::models::{Child, ChildGroup, ChildGroups, ChildTags, Children, ModuleInfo};
use crate::utils::encode_query;

#[derive(Debug, Clone, Default)]
pub struct ChildrenQuery {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub view: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct ChildrenParams<'a> {
    q: Option<&'a str>,
    page: Option<u32>,
    per_page: Option<u32>,
    view: Option<&'a str>,
}

impl<'a> From<&'a ChildrenQuery> for ChildrenParams<'a> {
    fn from(query: &'a ChildrenQuery) -> Self {
        Self {
            q: query.query.as_deref(),
            page: query.page,
            per_page: query.per_page,
            view: query.view.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChildrenModule<'a> {
    http: &'a Dispatcher,
}

impl<'a> ChildrenModule<'a> {
    pub fn new(http: &'a Dispatcher) -> Self {
        Self { http }
    }

    pub async fn info(&self) -> Result<Envelope<ModuleInfo>> {
        self.http.get("/v1/module/children").await
    }

    pub fn children(&self) -> ChildrenTable<'a> {
        ChildrenTable { http: self.http }
    }

    pub fn groups(&self) -> ChildGroupsTable<'a> {
        ChildGroupsTable { http: self.http }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChildrenTable<'a> {
    http: &'a Dispatcher,
}

impl ChildrenTable<'_> {
    pub async fn list(&self, query: &ChildrenQuery) -> Result<Envelope<Children>> {
        let params = encode_query(&ChildrenParams::from(query))?;
        self.http.get(&format!("/v1/children/children{}", params)).await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<Child>> {
        self.http.get(&format!("/v1/children/child/{}", id)).await
    }

    /// Groups the child belongs to
    pub async fn groups(&self, id: i64) -> Result<Envelope<ChildGroups>> {
        self.http.get(&format!("/v1/children/child/{}/groups", id)).await
    }

    pub async fn tags(&self, id: i64) -> Result<Envelope<ChildTags>> {
        self.http.get(&format!("/v1/children/child/{}/tags", id)).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChildGroupsTable<'a> {
    http: &'a Dispatcher,
}

impl ChildGroupsTable<'_> {
    pub async fn list(&self) -> Result<Envelope<ChildGroups>> {
        self.http.get("/v1/children/groups").await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<ChildGroup>> {
        self.http.get(&format!("/v1/children/group/{}", id)).await
    }

    pub async fn children(&self, id: i64) -> Result<Envelope<Children>> {
        self.http.get(&format!("/v1/children/group/{}/children", id)).await
    }
}
