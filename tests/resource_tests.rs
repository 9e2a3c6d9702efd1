//! Integration tests for the named resource accessors on `VendClient`.

use std::time::Duration;

use serde_json::json;
use vend_api::{
    ApiToken, DomainPrefix, HostUrl, ResourceError, RetryPolicy, StoreTimeZone, VendClient,
    VendConfig,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> VendClient {
    let config = VendConfig::builder()
        .token(ApiToken::new("test-token").unwrap())
        .domain_prefix(DomainPrefix::new("teststore").unwrap())
        .host(HostUrl::new(server.uri()).unwrap())
        .time_zone("+12:00".parse().unwrap())
        .retry_policy(
            RetryPolicy::new(2)
                .unwrap()
                .with_backoff(|_| Duration::ZERO),
        )
        .build()
        .unwrap();
    VendClient::new(&config).unwrap()
}

/// Serves `records` as one version page followed by an empty page.
async fn serve_single_page(server: &MockServer, resource: &str, records: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/2.0/{resource}")))
        .and(query_param("after", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": records,
            "version": { "min": 1, "max": 100 }
        })))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/2.0/{resource}")))
        .and(query_param("after", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_products_index_by_id_keeps_latest_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/products"))
        .and(query_param("after", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "p1", "name": "Tee", "price": 20.0 },
                { "id": "p2", "name": "Cap", "price": 15.0 }
            ],
            "version": { "min": 1, "max": 2 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/products"))
        .and(query_param("after", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "p1", "name": "Tee", "price": 25.0 }],
            "version": { "min": 3, "max": 3 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/products"))
        .and(query_param("after", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let products = client_for(&server).products().await.unwrap();
    let by_id = products.index_by_id();

    assert_eq!(products.len(), 3);
    assert_eq!(by_id.len(), 2);
    assert_eq!(by_id["p1"].price, Some(25.0));
    assert_eq!(by_id["p2"].name.as_deref(), Some("Cap"));
}

#[tokio::test]
async fn test_outlets_group_by_id() {
    let server = MockServer::start().await;
    serve_single_page(
        &server,
        "outlets",
        json!([
            { "id": "o1", "name": "Main" },
            { "id": "o2", "name": "Pop-up" },
            { "id": "o1", "name": "Main Street", "deleted_at": "2021-05-01T00:00:00+00:00" }
        ]),
    )
    .await;

    let outlets = client_for(&server).outlets().await.unwrap();
    let groups = outlets.group_by_id();

    assert_eq!(groups["o1"].len(), 2);
    assert_eq!(groups["o1"][1].name.as_deref(), Some("Main Street"));
    assert!(groups["o1"][1].deleted_at.is_some());
    assert_eq!(groups["o2"].len(), 1);
}

#[tokio::test]
async fn test_consignments_dates_in_store_timezone() {
    let server = MockServer::start().await;
    serve_single_page(
        &server,
        "consignments",
        json!([{
            "id": "c1",
            "type": "OUTLET",
            "status": "SENT",
            "consignment_date": "2022-07-01T00:00:00Z"
        }]),
    )
    .await;

    let client = client_for(&server);
    let consignments = client.consignments().await.unwrap();
    let date = consignments[0]
        .consignment_date_in(client.time_zone())
        .unwrap()
        .unwrap();

    assert_eq!(client.time_zone(), "+12:00".parse::<StoreTimeZone>().unwrap());
    assert_eq!(consignments[0].consignment_type.as_deref(), Some("OUTLET"));
    assert_eq!(date.to_rfc3339(), "2022-07-01T12:00:00+12:00");
}

#[tokio::test]
async fn test_registers_users_and_suppliers() {
    let server = MockServer::start().await;
    serve_single_page(&server, "registers", json!([{ "id": "r1", "name": "Till 1" }])).await;
    serve_single_page(
        &server,
        "users",
        json!([{ "id": "u1", "username": "jo", "display_name": "Jo" }]),
    )
    .await;
    serve_single_page(
        &server,
        "suppliers",
        json!([{ "id": "s1", "name": "Acme", "contact": { "email": "a@acme.test" } }]),
    )
    .await;

    let client = client_for(&server);
    let registers = client.registers().await.unwrap();
    let users = client.users().await.unwrap();
    let suppliers = client.suppliers().await.unwrap();

    assert_eq!(registers[0].name.as_deref(), Some("Till 1"));
    assert_eq!(users[0].display_name.as_deref(), Some("Jo"));
    assert_eq!(
        suppliers[0].contact.as_ref().unwrap().email.as_deref(),
        Some("a@acme.test")
    );
}

#[tokio::test]
async fn test_store_credits_follow_flake_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/store_credits"))
        .and(query_param("before", "sc2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "sc2", "balance": 5.0 }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/store_credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "sc3", "balance": 1.0 }, { "id": "sc2", "balance": 5.0 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let credits = client_for(&server).store_credits().await.unwrap();

    assert_eq!(credits.len(), 2);
    assert_eq!(credits[0].id.as_deref(), Some("sc3"));
    assert_eq!(credits.pages(), 2);
}

#[tokio::test]
async fn test_unauthorized_surfaces_as_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/2.0/users"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).users().await.unwrap_err();

    assert!(err.is_fatal());
    assert!(matches!(err, ResourceError::Http(_)));
    assert!(err.to_string().contains("API token"));
}

#[tokio::test]
async fn test_consignment_dates_follow_named_zone_daylight_saving() {
    let server = MockServer::start().await;
    serve_single_page(
        &server,
        "consignments",
        json!([
            { "id": "c1", "consignment_date": "2022-01-10T00:00:00Z" },
            { "id": "c2", "consignment_date": "2022-07-10 00:00:00" }
        ]),
    )
    .await;

    let auckland: StoreTimeZone = "Pacific/Auckland".parse().unwrap();
    let consignments = client_for(&server).consignments().await.unwrap();
    let dates: Vec<String> = consignments
        .iter()
        .map(|c| c.consignment_date_in(auckland).unwrap().unwrap().to_rfc3339())
        .collect();

    assert_eq!(
        dates,
        ["2022-01-10T13:00:00+13:00", "2022-07-10T12:00:00+12:00"]
    );
}
