//! Address book: contacts, tags, flows and key dates.

use chrono::NaiveDate;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::api::{Dispatcher, Envelope, RequestBody, Result};
use crate::models::{
    Contact, ContactTags, Contacts, Flow, FlowTracking, Flows, KeyDate, KeyDateContacts, KeyDates,
    ModuleInfo, TagWithContacts, Tags,
};
use crate::utils::{encode_query, maybe_bool_to_number};

/// Search options for listing contacts. Unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct ContactsQuery {
    pub name: Option<String>,
    pub query: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub public_access: Option<bool>,
    pub public_visible: Option<bool>,
    pub view: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct ContactsParams<'a> {
    name: Option<&'a str>,
    q: Option<&'a str>,
    page: Option<u32>,
    per_page: Option<u32>,
    public_access: Option<u8>,
    public_visible: Option<u8>,
    view: Option<&'a str>,
}

impl<'a> From<&'a ContactsQuery> for ContactsParams<'a> {
    fn from(query: &'a ContactsQuery) -> Self {
        Self {
            name: query.name.as_deref(),
            q: query.query.as_deref(),
            page: query.page,
            per_page: query.per_page,
            public_access: maybe_bool_to_number(query.public_access),
            public_visible: maybe_bool_to_number(query.public_visible),
            view: query.view.as_deref(),
        }
    }
}

/// Communication preferences for a contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommunicationArgs {
    pub general_email: Option<bool>,
    pub general_sms: Option<bool>,
    pub rota_email: Option<bool>,
    pub rota_sms: Option<bool>,
}

/// Fields for creating or updating a contact. Unset fields are left out of
/// the request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactArgs {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub formal_name: Option<String>,
    pub maiden_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub sex: Option<String>,
    pub title: Option<String>,
    pub marital: Option<String>,
    pub spouse_id: Option<i64>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub telephone: Option<String>,
    pub mobile: Option<String>,
    pub work_telephone: Option<String>,
    pub email: Option<String>,
    pub employer: Option<String>,
    pub communication: Option<CommunicationArgs>,
    pub status: Option<String>,
    pub site_id: Option<i64>,
    pub site_ids: Option<Vec<i64>>,
}

/// Wire shape of `CommunicationArgs`: flags as `0`/`1`.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommunicationPayload {
    pub general_email: Option<u8>,
    pub general_sms: Option<u8>,
    pub rota_email: Option<u8>,
    pub rota_sms: Option<u8>,
}

impl From<&CommunicationArgs> for CommunicationPayload {
    fn from(args: &CommunicationArgs) -> Self {
        Self {
            general_email: maybe_bool_to_number(args.general_email),
            general_sms: maybe_bool_to_number(args.general_sms),
            rota_email: maybe_bool_to_number(args.rota_email),
            rota_sms: maybe_bool_to_number(args.rota_sms),
        }
    }
}

/// Wire shape of `ContactArgs`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub formal_name: Option<String>,
    pub maiden_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub sex: Option<String>,
    pub title: Option<String>,
    pub marital: Option<String>,
    pub spouse_id: Option<i64>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub telephone: Option<String>,
    pub mobile: Option<String>,
    pub work_telephone: Option<String>,
    pub email: Option<String>,
    pub employer: Option<String>,
    pub communication: Option<CommunicationPayload>,
    pub status: Option<String>,
    pub site_id: Option<i64>,
    pub site_ids: Option<Vec<i64>>,
}

impl From<&ContactArgs> for ContactPayload {
    fn from(args: &ContactArgs) -> Self {
        Self {
            first_name: args.first_name.clone(),
            last_name: args.last_name.clone(),
            middle_name: args.middle_name.clone(),
            formal_name: args.formal_name.clone(),
            maiden_name: args.maiden_name.clone(),
            date_of_birth: args.date_of_birth,
            sex: args.sex.clone(),
            title: args.title.clone(),
            marital: args.marital.clone(),
            spouse_id: args.spouse_id,
            address: args.address.clone(),
            address2: args.address2.clone(),
            address3: args.address3.clone(),
            city: args.city.clone(),
            county: args.county.clone(),
            postcode: args.postcode.clone(),
            latitude: args.latitude,
            longitude: args.longitude,
            telephone: args.telephone.clone(),
            mobile: args.mobile.clone(),
            work_telephone: args.work_telephone.clone(),
            email: args.email.clone(),
            employer: args.employer.clone(),
            communication: args.communication.as_ref().map(CommunicationPayload::from),
            status: args.status.clone(),
            site_id: args.site_id,
            site_ids: args.site_ids.clone(),
        }
    }
}

/// Body for adding contacts to a flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddContactsToFlow {
    pub contacts: Vec<i64>,
}

#[derive(Debug, Clone, Copy)]
pub struct AddressBook<'a> {
    http: &'a Dispatcher,
}

impl<'a> AddressBook<'a> {
    pub fn new(http: &'a Dispatcher) -> Self {
        Self { http }
    }

    pub async fn info(&self) -> Result<Envelope<ModuleInfo>> {
        self.http.get("/v1/module/addressbook").await
    }

    pub fn contacts(&self) -> ContactsTable<'a> {
        ContactsTable { http: self.http }
    }

    pub fn tags(&self) -> TagsTable<'a> {
        TagsTable { http: self.http }
    }

    pub fn flows(&self) -> FlowsTable<'a> {
        FlowsTable { http: self.http }
    }

    pub fn key_dates(&self) -> KeyDatesTable<'a> {
        KeyDatesTable { http: self.http }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContactsTable<'a> {
    http: &'a Dispatcher,
}

impl ContactsTable<'_> {
    /// List or search contacts
    pub async fn list(&self, query: &ContactsQuery) -> Result<Envelope<Contacts>> {
        let params = encode_query(&ContactsParams::from(query))?;
        self.http.get(&format!("/v1/addressbook/contacts{}", params)).await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<Contact>> {
        self.http.get(&format!("/v1/addressbook/contact/{}", id)).await
    }

    pub async fn tags(&self, id: i64) -> Result<Envelope<ContactTags>> {
        self.http.get(&format!("/v1/addressbook/contact/{}/tags", id)).await
    }

    pub async fn key_dates(&self, id: i64) -> Result<Envelope<KeyDates>> {
        self.http.get(&format!("/v1/addressbook/contact/{}/keydates", id)).await
    }

    pub async fn create(&self, args: &ContactArgs) -> Result<Envelope<Contact>> {
        let body = RequestBody::json(&ContactPayload::from(args))?;
        self.http.post("/v1/addressbook/contact", body).await
    }

    pub async fn update(&self, id: i64, args: &ContactArgs) -> Result<Envelope<Contact>> {
        let body = RequestBody::json(&ContactPayload::from(args))?;
        self.http.put(&format!("/v1/addressbook/contact/{}", id), body).await
    }

    pub async fn delete(&self, id: i64) -> Result<Envelope<()>> {
        self.http.delete(&format!("/v1/addressbook/contact/{}", id)).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TagsTable<'a> {
    http: &'a Dispatcher,
}

#[skip_serializing_none]
#[derive(Serialize)]
struct TagParams {
    contacts: Option<u8>,
}

impl TagsTable<'_> {
    pub async fn list(&self) -> Result<Envelope<Tags>> {
        self.http.get("/v1/addressbook/tags").await
    }

    /// A single tag; with `contacts` set, the tagged contacts are embedded.
    pub async fn show(&self, id: i64, contacts: Option<bool>) -> Result<Envelope<TagWithContacts>> {
        let params = encode_query(&TagParams {
            contacts: maybe_bool_to_number(contacts),
        })?;
        self.http.get(&format!("/v1/addressbook/tag/{}{}", id, params)).await
    }

    pub async fn contacts(&self, id: i64) -> Result<Envelope<Contacts>> {
        self.http.get(&format!("/v1/addressbook/tag/{}/contacts", id)).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlowsTable<'a> {
    http: &'a Dispatcher,
}

impl FlowsTable<'_> {
    pub async fn list(&self) -> Result<Envelope<Flows>> {
        self.http.get("/v1/addressbook/flows").await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<Flow>> {
        self.http.get(&format!("/v1/addressbook/flow/{}", id)).await
    }

    pub async fn tracking(&self, id: i64) -> Result<Envelope<FlowTracking>> {
        self.http.get(&format!("/v1/addressbook/flow/{}/tracking", id)).await
    }

    pub async fn add_contacts(&self, id: i64, args: &AddContactsToFlow) -> Result<Envelope<FlowTracking>> {
        let body = RequestBody::json(args)?;
        self.http.post(&format!("/v1/addressbook/flow/{}/tracking", id), body).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeyDatesTable<'a> {
    http: &'a Dispatcher,
}

impl KeyDatesTable<'_> {
    pub async fn list(&self) -> Result<Envelope<KeyDates>> {
        self.http.get("/v1/addressbook/keydates").await
    }

    pub async fn show(&self, id: i64) -> Result<Envelope<KeyDate>> {
        self.http.get(&format!("/v1/addressbook/keydate/{}", id)).await
    }

    pub async fn contacts(&self, id: i64) -> Result<Envelope<KeyDateContacts>> {
        self.http.get(&format!("/v1/addressbook/keydate/{}/contacts", id)).await
    }
}
