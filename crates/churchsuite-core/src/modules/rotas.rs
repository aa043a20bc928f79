use chrono::NaiveDate;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::api::{Dispatcher, Envelope, Result};
use crate::models::{ModuleInfo, Rota, RotaDates, Rotas};
use crate::utils::encode_query;

/// Date window for a rota's scheduled dates.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct RotaDatesQuery {
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy)]
pub struct RotasModule<'a> {
    http: &'a Dispatcher,
}

impl<'a> RotasModule<'a> {
    pub fn new(http: &'a Dispatcher) -> Self {
        Self { http }
    }

    pub async fn info(&self) -> Result<Envelope<ModuleInfo>> {
        self.http.get("/v1/module/rotas").await
    }

    pub fn rotas(&self) -> RotasTable<'a> {
        RotasTable { http: self.http }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RotasTable<'a> {
    http: &'a Dispatcher,
}

impl RotasTable<'_> {
    pub async fn list(&self) -> Result<Envelope<Rotas>> {
        self.http.get("/v1/rotas/rotas").await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<Rota>> {
        self.http.get(&format!("/v1/rotas/rota/{}", id)).await
    }

    pub async fn dates(&self, id: i64, query: &RotaDatesQuery) -> Result<Envelope<RotaDates>> {
        let params = encode_query(query)?;
        self.http.get(&format!("/v1/rotas/rota/{}/dates{}", id, params)).await
    }
}
