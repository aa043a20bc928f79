//! Calendar events, sign-ups and categories.

use chrono::NaiveDate;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::api::{Dispatcher, Envelope, RequestBody, Result};
use crate::models::{Categories, Event, EventTickets, Events, ModuleInfo, Signup, Signups};
use crate::utils::{encode_query, maybe_bool_to_number};

/// Search options for listing events.
#[derive(Debug, Clone, Default)]
pub struct EventsQuery {
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub query: Option<String>,
    pub category: Option<i64>,
    pub site: Option<i64>,
    pub featured: Option<bool>,
    pub public: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct EventsParams<'a> {
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
    q: Option<&'a str>,
    category: Option<i64>,
    site: Option<i64>,
    featured: Option<u8>,
    public: Option<u8>,
    page: Option<u32>,
    per_page: Option<u32>,
}

impl<'a> From<&'a EventsQuery> for EventsParams<'a> {
    fn from(query: &'a EventsQuery) -> Self {
        Self {
            date_start: query.date_start,
            date_end: query.date_end,
            q: query.query.as_deref(),
            category: query.category,
            site: query.site,
            featured: maybe_bool_to_number(query.featured),
            public: maybe_bool_to_number(query.public),
            page: query.page,
            per_page: query.per_page,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Calendar<'a> {
    http: &'a Dispatcher,
}

impl<'a> Calendar<'a> {
    pub fn new(http: &'a Dispatcher) -> Self {
        Self { http }
    }

    pub async fn info(&self) -> Result<Envelope<ModuleInfo>> {
        self.http.get("/v1/module/calendar").await
    }

    pub fn events(&self) -> EventsTable<'a> {
        EventsTable { http: self.http }
    }

    /// Categories, ordered alphabetically
    pub async fn categories(&self) -> Result<Envelope<Categories>> {
        self.http.get("/v1/calendar/categories").await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventsTable<'a> {
    http: &'a Dispatcher,
}

impl<'a> EventsTable<'a> {
    pub async fn list(&self, query: &EventsQuery) -> Result<Envelope<Events>> {
        let params = encode_query(&EventsParams::from(query))?;
        self.http.get(&format!("/v1/calendar/events{}", params)).await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<Event>> {
        self.http.get(&format!("/v1/calendar/event/{}", id)).await
    }

    pub async fn tickets(&self, id: i64) -> Result<Envelope<EventTickets>> {
        self.http.get(&format!("/v1/calendar/events/{}/tickets", id)).await
    }

    pub fn signups(&self) -> SignupsTable<'a> {
        SignupsTable { http: self.http }
    }
}

/// People signed up to an event.
#[derive(Debug, Clone, Copy)]
pub struct SignupsTable<'a> {
    http: &'a Dispatcher,
}

impl SignupsTable<'_> {
    pub async fn list(&self, event_id: i64) -> Result<Envelope<Signups>> {
        self.http.get(&format!("/v1/calendar/events/{}/signups", event_id)).await
    }

    /// Sign someone up. The body is sent as given.
    pub async fn create<B: Serialize + ?Sized>(&self, event_id: i64, body: &B) -> Result<Envelope<Signups>> {
        let body = RequestBody::json(body)?;
        self.http.post(&format!("/v1/calendar/event/{}/signups", event_id), body).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        event_id: i64,
        signup_id: i64,
        body: &B,
    ) -> Result<Envelope<Signup>> {
        let body = RequestBody::json(body)?;
        self.http
            .put(&format!("/v1/calendar/event/{}/signup/{}", event_id, signup_id), body)
            .await
    }

    pub async fn delete(&self, event_id: i64, signup_id: i64) -> Result<Envelope<()>> {
        self.http
            .delete(&format!("/v1/calendar/event/{}/signup/{}", event_id, signup_id))
            .await
    }
}
