use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::api::{Dispatcher, Envelope, Result};
use crate::models::{Clusters, Group, Groups, Labels, Members, ModuleInfo};
use crate::utils::encode_query;

#[derive(Debug, Clone, Default)]
pub struct GroupsQuery {
    pub query: Option<String>,
    pub view: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct GroupsParams<'a> {
    q: Option<&'a str>,
    view: Option<&'a str>,
    page: Option<u32>,
    per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
pub struct SmallGroups<'a> {
    http: &'a Dispatcher,
}

impl<'a> SmallGroups<'a> {
    pub fn new(http: &'a Dispatcher) -> Self {
        Self { http }
    }

    pub async fn info(&self) -> Result<Envelope<ModuleInfo>> {
        self.http.get("/v1/module/smallgroups").await
    }

    pub fn groups(&self) -> GroupsTable<'a> {
        GroupsTable { http: self.http }
    }

    pub async fn clusters(&self) -> Result<Envelope<Clusters>> {
        self.http.get("/v1/smallgroups/clusters").await
    }

    pub async fn labels(&self) -> Result<Envelope<Labels>> {
        self.http.get("/v1/smallgroups/labels").await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GroupsTable<'a> {
    http: &'a Dispatcher,
}

impl GroupsTable<'_> {
    pub async fn list(&self, query: &GroupsQuery) -> Result<Envelope<Groups>> {
        let params = encode_query(&GroupsParams {
            q: query.query.as_deref(),
            view: query.view.as_deref(),
            page: query.page,
            per_page: query.per_page,
        })?;
        self.http.get(&format!("/v1/smallgroups/groups{}", params)).await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<Group>> {
        self.http.get(&format!("/v1/smallgroups/group/{}", id)).await
    }

    pub async fn members(&self, id: i64) -> Result<Envelope<Members>> {
        self.http.get(&format!("/v1/smallgroups/group/{}/members", id)).await
    }
}
