mod support;

use churchsuite_core::ApiError;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_my_calls_without_token_fail_before_dispatch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/my/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = support::oauth_client(&server, None);
    let err = client.my().details().await.unwrap_err();

    assert!(matches!(err, ApiError::MissingAccessToken));
}

#[tokio::test]
async fn test_my_uses_latest_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/my/details"))
        .and(header("X-Auth", "token-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/my/details"))
        .and(header("X-Auth", "token-b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::oauth_client(&server, None);
    let my = client.my();

    client.oauth2().set_token("token-a");
    my.details().await.unwrap();
    client.oauth2().set_token("token-b");
    my.details().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let auth: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("X-Auth").unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(auth, ["token-a", "token-b"]);
}

#[tokio::test]
async fn test_my_and_primary_contexts_stay_separate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/my/children"))
        .and(header("X-Auth", "user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"children": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/whoami"))
        .and(header("X-Auth", support::API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::oauth_client(&server, Some("user-token"));
    client.my().children().await.unwrap();
    client.account().user().await.unwrap();
}

#[tokio::test]
async fn test_my_routes() {
    let server = MockServer::start().await;
    for route in ["/v1/my/details", "/v1/my/contacts", "/v1/my/children", "/v1/my/child/3"] {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("X-Account", support::ACCOUNT))
            .and(header("X-Auth", "user-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = support::oauth_client(&server, Some("user-token"));
    let my = client.my();
    my.details().await.unwrap();
    my.contacts(Some("smith")).await.unwrap();
    my.children().await.unwrap();
    my.child(3).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let contacts = requests
        .iter()
        .find(|r| r.url.path() == "/v1/my/contacts")
        .unwrap();
    assert_eq!(contacts.url.query(), Some("q=smith"));
}

#[tokio::test]
async fn test_exchanged_token_is_used_by_my() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "fresh"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/my/details"))
        .and(header("X-Auth", "fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 8, "first_name": "Ava"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::oauth_client(&server, None);
    client.oauth2().create_token(Some("code")).await.unwrap();
    let details = client.my().details().await.unwrap();

    assert_eq!(details.data.first_name.as_deref(), Some("Ava"));
}
