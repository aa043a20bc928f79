//! Shared fixtures for integration tests.

#![allow(dead_code)]

use churchsuite_core::{Client, ClientOptions, OAuth2Options, OAuthClient};
use wiremock::MockServer;

pub const ACCOUNT: &str = "demo";
pub const APPLICATION: &str = "example-app";
pub const API_KEY: &str = "api-key-123";

pub fn options(server: &MockServer) -> ClientOptions {
    ClientOptions::new(ACCOUNT, APPLICATION, API_KEY)
        .with_base_url(server.uri())
        .with_oauth_url(server.uri())
}

pub fn client(server: &MockServer) -> Client {
    Client::new(&options(server)).expect("client should build")
}

pub fn oauth_client(server: &MockServer, access_token: Option<&str>) -> OAuthClient {
    let mut oauth2 = OAuth2Options::new("client-1", "s3cret", "https://example.org/callback");
    oauth2.access_token = access_token.map(str::to_string);
    OAuthClient::new(&options(server).with_oauth2(oauth2)).expect("oauth client should build")
}

/// Query string of the only request the server received.
pub async fn single_query(server: &MockServer) -> Option<String> {
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query().map(str::to_string)
}
