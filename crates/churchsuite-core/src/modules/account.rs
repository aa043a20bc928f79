use crate::api::{Dispatcher, Envelope, Result};
use crate::models::{Profile, WhoAmI};

/// Data about the API user.
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    http: &'a Dispatcher,
}

impl<'a> Account<'a> {
    pub fn new(http: &'a Dispatcher) -> Self {
        Self { http }
    }

    /// The user the API key belongs to
    pub async fn user(&self) -> Result<Envelope<WhoAmI>> {
        self.http.get("/v1/whoami").await
    }

    pub async fn profile(&self) -> Result<Envelope<Profile>> {
        self.http.get("/v1/profile").await
    }
}
