//! REST transport for the ChurchSuite API.
//!
//! This module provides the `Dispatcher` that every module method goes
//! through, the `Envelope` it returns, and the crate-wide `ApiError`.
//!
//! Every request carries the `X-Account`, `X-Application` and `X-Auth`
//! headers. Non-2xx statuses are returned in the envelope, not raised.

pub mod client;
pub mod error;
pub mod response;

pub use client::{Auth, Dispatcher, RequestBody, RequestOptions, API_BASE_URL};
pub use error::{ApiError, Result};
pub use response::{Envelope, RawResponse};
