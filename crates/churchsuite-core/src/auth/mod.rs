//! OAuth2 support for the "my" self-service endpoints.
//!
//! This module provides:
//! - `OAuth2`: authorization URL, code-for-token exchange, token get/set
//! - `TokenSource`: how a dispatcher reads the current token per call
//!
//! The token lives only in memory for the lifetime of the client.

pub mod oauth2;
pub mod token;

pub use oauth2::{OAuth2, TokenOutcome, TokenResponse, TokenState};
pub use token::{SharedToken, TokenSource};
