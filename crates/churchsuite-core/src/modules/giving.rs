use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::api::{Dispatcher, Envelope, Result};
use crate::models::{Batch, Batches, Donor, Donors, Fund, Funds, ModuleInfo};
use crate::utils::encode_query;

#[derive(Debug, Clone, Default)]
pub struct DonorsQuery {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct DonorsParams<'a> {
    q: Option<&'a str>,
    page: Option<u32>,
    per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
pub struct Giving<'a> {
    http: &'a Dispatcher,
}

impl<'a> Giving<'a> {
    pub fn new(http: &'a Dispatcher) -> Self {
        Self { http }
    }

    pub async fn info(&self) -> Result<Envelope<ModuleInfo>> {
        self.http.get("/v1/module/giving").await
    }

    pub fn funds(&self) -> FundsTable<'a> {
        FundsTable { http: self.http }
    }

    pub fn batches(&self) -> BatchesTable<'a> {
        BatchesTable { http: self.http }
    }

    pub fn donors(&self) -> DonorsTable<'a> {
        DonorsTable { http: self.http }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FundsTable<'a> {
    http: &'a Dispatcher,
}

impl FundsTable<'_> {
    pub async fn list(&self) -> Result<Envelope<Funds>> {
        self.http.get("/v1/giving/funds").await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<Fund>> {
        self.http.get(&format!("/v1/giving/fund/{}", id)).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BatchesTable<'a> {
    http: &'a Dispatcher,
}

impl BatchesTable<'_> {
    pub async fn list(&self) -> Result<Envelope<Batches>> {
        self.http.get("/v1/giving/batches").await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<Batch>> {
        self.http.get(&format!("/v1/giving/batch/{}", id)).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DonorsTable<'a> {
    http: &'a Dispatcher,
}

impl DonorsTable<'_> {
    pub async fn list(&self, query: &DonorsQuery) -> Result<Envelope<Donors>> {
        let params = encode_query(&DonorsParams {
            q: query.query.as_deref(),
            page: query.page,
            per_page: query.per_page,
        })?;
        self.http.get(&format!("/v1/giving/donors{}", params)).await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<Donor>> {
        self.http.get(&format!("/v1/giving/donor/{}", id)).await
    }
}
