use crate::api::{Dispatcher, Envelope, Result};
use crate::models::ModuleInfo;

#[derive(Debug, Clone, Copy)]
pub struct Attendance<'a> {
    http: &'a Dispatcher,
}

impl<'a> Attendance<'a> {
    pub fn new(http: &'a Dispatcher) -> Self {
        Self { http }
    }

    pub async fn info(&self) -> Result<Envelope<ModuleInfo>> {
        self.http.get("/v1/module/attendance").await
    }
}
