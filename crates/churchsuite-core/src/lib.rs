//! Typed client for the ChurchSuite REST API.
//!
//! ```no_run
//! use churchsuite_core::{create_client, ClientOptions, ContactsQuery};
//!
//! # async fn run() -> churchsuite_core::Result<()> {
//! let options = ClientOptions::new("demo", "Example", "1234567890abc");
//! let client = create_client(&options)?;
//!
//! let query = ContactsQuery { name: Some("Sam".into()), per_page: Some(10), ..Default::default() };
//! let contacts = client.client().address_book().contacts().list(&query).await?;
//! if contacts.is_success() {
//!     println!("{:?}", contacts.data.contacts);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod models;
pub mod modules;
pub mod utils;

pub use api::{ApiError, Auth, Dispatcher, Envelope, RawResponse, RequestBody, RequestOptions, Result};
pub use auth::{OAuth2, SharedToken, TokenOutcome, TokenResponse, TokenSource, TokenState};
pub use client::{create_client, AnyClient, Client, OAuthClient};
pub use config::{ClientOptions, OAuth2Options};
pub use modules::{
    AddContactsToFlow, ChildrenQuery, CommunicationArgs, ContactArgs, ContactsQuery, DonorsQuery,
    EventsQuery, GroupsQuery, RotaDatesQuery,
};
