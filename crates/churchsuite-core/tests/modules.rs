mod support;

use chrono::NaiveDate;
use churchsuite_core::{ChildrenQuery, DonorsQuery, EventsQuery, GroupsQuery, RotaDatesQuery};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_get(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_account_and_module_info_routes() {
    let server = MockServer::start().await;
    for route in [
        "/v1/whoami",
        "/v1/profile",
        "/v1/module/attendance",
        "/v1/module/calendar",
        "/v1/module/children",
        "/v1/module/giving",
        "/v1/module/rotas",
        "/v1/module/smallgroups",
    ] {
        mount_get(&server, route).await;
    }

    let client = support::client(&server);
    client.account().user().await.unwrap();
    client.account().profile().await.unwrap();
    client.attendance().info().await.unwrap();
    client.calendar().info().await.unwrap();
    client.children().info().await.unwrap();
    client.giving().info().await.unwrap();
    client.rotas().info().await.unwrap();
    client.small_groups().info().await.unwrap();
}

#[tokio::test]
async fn test_whoami_passes_through() {
    let server = MockServer::start().await;
    let body = json!({
        "id": 3,
        "username": "sam",
        "contact_id": 12,
        "name": "Sam Smith",
        "restricted": false,
        "sites": {"1": {"id": "1", "name": "Main"}},
        "mfa_enabled": 0
    });
    Mock::given(method("GET"))
        .and(path("/v1/whoami"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = support::client(&server);
    let envelope = client.account().user().await.unwrap();

    assert_eq!(envelope.data.contact_id, Some(12));
    assert_eq!(serde_json::to_value(&envelope.data).unwrap(), body);
}

#[tokio::test]
async fn test_whoami_keeps_nulls_and_unexpected_types() {
    let server = MockServer::start().await;
    let body = json!({
        "id": "3",
        "username": "sam",
        "last_login": null,
        "contact_id": 12.5
    });
    Mock::given(method("GET"))
        .and(path("/v1/whoami"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = support::client(&server);
    let envelope = client.account().user().await.unwrap();

    assert_eq!(envelope.data.id, None);
    assert_eq!(envelope.data.extra["id"], "3");
    assert_eq!(envelope.data.last_login, None);
    assert!(envelope.data.extra["last_login"].is_null());
    assert_eq!(envelope.data.username.as_deref(), Some("sam"));
    assert_eq!(serde_json::to_value(&envelope.data).unwrap(), body);
}

#[tokio::test]
async fn test_nested_records_keep_nulls() {
    let server = MockServer::start().await;
    let body = json!({
        "pagination": {"no_results": 1, "page": 1, "per_page": null},
        "groups": [{"id": 4, "name": "Tuesday group", "location": null, "day": 2}]
    });
    Mock::given(method("GET"))
        .and(path("/v1/smallgroups/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = support::client(&server);
    let envelope = client
        .small_groups()
        .groups()
        .list(&GroupsQuery::default())
        .await
        .unwrap();

    let groups = envelope.data.groups.as_ref().unwrap();
    assert_eq!(groups[0].id, Some(4));
    assert_eq!(groups[0].day, None);
    assert_eq!(serde_json::to_value(&envelope.data).unwrap(), body);
}

#[tokio::test]
async fn test_calendar_routes() {
    let server = MockServer::start().await;
    for route in [
        "/v1/calendar/event/9",
        "/v1/calendar/events/9/tickets",
        "/v1/calendar/events/9/signups",
        "/v1/calendar/categories",
    ] {
        mount_get(&server, route).await;
    }

    let client = support::client(&server);
    let events = client.calendar().events();
    events.show(9).await.unwrap();
    events.tickets(9).await.unwrap();
    events.signups().list(9).await.unwrap();
    client.calendar().categories().await.unwrap();
}

#[tokio::test]
async fn test_list_events_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/calendar/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"events": []})))
        .mount(&server)
        .await;

    let client = support::client(&server);
    let query = EventsQuery {
        date_start: NaiveDate::from_ymd_opt(2024, 1, 1),
        query: Some("carols".into()),
        category: Some(4),
        public: Some(false),
        ..Default::default()
    };
    client.calendar().events().list(&query).await.unwrap();

    assert_eq!(
        support::single_query(&server).await.as_deref(),
        Some("date_start=2024-01-01&q=carols&category=4&public=0")
    );
}

#[tokio::test]
async fn test_signup_writes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/calendar/event/9/signups"))
        .and(body_json(json!({"contact_id": 12})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"signups": [{"id": 1}]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/calendar/event/9/signup/1"))
        .and(body_json(json!({"status": "confirmed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "status": "confirmed"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/calendar/event/9/signup/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client(&server);
    let signups = client.calendar().events().signups();
    let created = signups.create(9, &json!({"contact_id": 12})).await.unwrap();
    assert_eq!(created.data.signups.unwrap()[0].id, Some(1));

    let updated = signups.update(9, 1, &json!({"status": "confirmed"})).await.unwrap();
    assert_eq!(updated.data.status.as_deref(), Some("confirmed"));

    signups.delete(9, 1).await.unwrap();
}

#[tokio::test]
async fn test_children_routes() {
    let server = MockServer::start().await;
    for route in [
        "/v1/children/child/5",
        "/v1/children/child/5/groups",
        "/v1/children/child/5/tags",
        "/v1/children/groups",
        "/v1/children/group/2",
        "/v1/children/group/2/children",
    ] {
        mount_get(&server, route).await;
    }

    let client = support::client(&server);
    let module = client.children();
    module.children().show(5).await.unwrap();
    module.children().groups(5).await.unwrap();
    module.children().tags(5).await.unwrap();
    module.groups().list().await.unwrap();
    module.groups().show(2).await.unwrap();
    module.groups().children(2).await.unwrap();
}

#[tokio::test]
async fn test_list_children_query() {
    let server = MockServer::start().await;
    mount_get(&server, "/v1/children/children").await;

    let client = support::client(&server);
    let query = ChildrenQuery {
        query: Some("ava".into()),
        per_page: Some(25),
        ..Default::default()
    };
    client.children().children().list(&query).await.unwrap();

    assert_eq!(support::single_query(&server).await.as_deref(), Some("q=ava&per_page=25"));
}

#[tokio::test]
async fn test_giving_routes() {
    let server = MockServer::start().await;
    for route in [
        "/v1/giving/funds",
        "/v1/giving/fund/1",
        "/v1/giving/batches",
        "/v1/giving/batch/2",
        "/v1/giving/donor/3",
    ] {
        mount_get(&server, route).await;
    }

    let client = support::client(&server);
    let giving = client.giving();
    giving.funds().list().await.unwrap();
    giving.funds().show(1).await.unwrap();
    giving.batches().list().await.unwrap();
    giving.batches().show(2).await.unwrap();
    giving.donors().show(3).await.unwrap();
}

#[tokio::test]
async fn test_list_donors_query() {
    let server = MockServer::start().await;
    mount_get(&server, "/v1/giving/donors").await;

    let client = support::client(&server);
    let query = DonorsQuery {
        page: Some(3),
        ..Default::default()
    };
    client.giving().donors().list(&query).await.unwrap();

    assert_eq!(support::single_query(&server).await.as_deref(), Some("page=3"));
}

#[tokio::test]
async fn test_rotas_routes() {
    let server = MockServer::start().await;
    mount_get(&server, "/v1/rotas/rotas").await;
    mount_get(&server, "/v1/rotas/rota/4").await;
    mount_get(&server, "/v1/rotas/rota/4/dates").await;

    let client = support::client(&server);
    let rotas = client.rotas().rotas();
    rotas.list().await.unwrap();
    rotas.show(4).await.unwrap();
    let query = RotaDatesQuery {
        date_start: NaiveDate::from_ymd_opt(2024, 5, 1),
        date_end: NaiveDate::from_ymd_opt(2024, 5, 31),
    };
    rotas.dates(4, &query).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let dates = requests
        .iter()
        .find(|r| r.url.path() == "/v1/rotas/rota/4/dates")
        .unwrap();
    assert_eq!(dates.url.query(), Some("date_start=2024-05-01&date_end=2024-05-31"));
}

#[tokio::test]
async fn test_small_groups_routes() {
    let server = MockServer::start().await;
    for route in [
        "/v1/smallgroups/groups",
        "/v1/smallgroups/group/7",
        "/v1/smallgroups/group/7/members",
        "/v1/smallgroups/clusters",
        "/v1/smallgroups/labels",
    ] {
        mount_get(&server, route).await;
    }

    let client = support::client(&server);
    let groups = client.small_groups();
    let query = GroupsQuery {
        view: Some("active_future".into()),
        ..Default::default()
    };
    groups.groups().list(&query).await.unwrap();
    groups.groups().show(7).await.unwrap();
    groups.groups().members(7).await.unwrap();
    groups.clusters().await.unwrap();
    groups.labels().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("view=active_future"));
}
