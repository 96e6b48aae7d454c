//! Integration tests for the dispatch pipeline.
//!
//! These tests verify that the Dispatcher correctly:
//! - Attaches the bearer token and JSON body
//! - Surfaces API error arrays as typed aggregates
//! - Decodes the post_data echo
//! - Retries transport timeouts but never received responses

use std::time::Duration;

use rdstation_client::{ApiErrorKind, Credentials, RdError, RdSettings, RdStationClient};
use serde_json::json;
use wiremock::{
    matchers::{body_json, body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn settings_for(server: &MockServer) -> RdSettings {
    RdSettings {
        base_domain: server.uri(),
        retry_delay_seconds: 0,
        request_timeout_seconds: 1,
        ..RdSettings::default()
    }
}

async fn client_for(server: &MockServer) -> RdStationClient {
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(body_string_contains("code-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "expires_in": 3600,
            "refresh_token": "refresh-1"
        })))
        .mount(server)
        .await;

    let credentials = Credentials::new("client-id", "client-secret", "code-123");
    RdStationClient::with_settings(credentials, settings_for(server)).unwrap()
}

#[tokio::test]
async fn test_body_echo_round_trip_with_bearer_header() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let body = json!({"a": 1, "b": "x"});

    Mock::given(method("PATCH"))
        .and(path("/platform/contacts/email:contact@example.com"))
        .and(header("Authorization", "Bearer tok-1"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let echoed = client
        .upsert_contact("email", "contact@example.com", body.clone())
        .await
        .unwrap();

    assert_eq!(echoed, body);
}

#[tokio::test]
async fn test_api_errors_surface_as_aggregate() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    Mock::given(method("GET"))
        .and(path("/platform/contacts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{
                "error_type": "RESOURCE_NOT_FOUND",
                "error_message": "contact not found"
            }]
        })))
        .mount(&server)
        .await;

    let result = client.contact_by_uuid("missing").await;
    match result {
        Err(RdError::RequestFailed { errors }) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ApiErrorKind::ResourceNotFound);
            assert_eq!(errors[0].http_status, 404);
            assert_eq!(errors[0].message, "contact not found");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_multiple_validation_errors_arrive_together() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    Mock::given(method("POST"))
        .and(path("/platform/events"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [
                {"error_type": "CANNOT_BE_BLANK", "error_message": "email cannot be blank"},
                {"error_type": "VALUES_MUST_BE_LOWERCASE", "error_message": "tags must be lowercase"}
            ]
        })))
        .mount(&server)
        .await;

    let event = rdstation_client::Event::conversion(
        rdstation_client::ConversionPayload::new("signup", ""),
    );

    let result = client.send_event(&event).await;
    match result {
        Err(RdError::RequestFailed { errors }) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].kind, ApiErrorKind::CannotBeBlank);
            assert_eq!(errors[1].kind, ApiErrorKind::ValuesMustBeLowercase);
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_post_data_echo_is_decoded() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    Mock::given(method("GET"))
        .and(path("/marketing/tracking_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "post_data": "client_id=abc&client_secret=def"
        })))
        .mount(&server)
        .await;

    let value = client.tracking_code().await.unwrap();
    assert_eq!(value["post_data"]["client_id"], "abc");
    assert_eq!(value["post_data"]["client_secret"], "def");
}

#[tokio::test]
async fn test_transport_timeouts_retried_until_success() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    // Three attempts run into the 1s client timeout, the fourth succeeds.
    Mock::given(method("GET"))
        .and(path("/marketing/account_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_json(json!({"name": "too slow"})),
        )
        .up_to_n_times(3)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/marketing/account_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "acme"})))
        .mount(&server)
        .await;

    let value = client.account_info().await.unwrap();
    assert_eq!(value["name"], "acme");

    let attempts = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.url.path() == "/marketing/account_info")
        .count();
    assert_eq!(attempts, 4);
}

#[tokio::test]
async fn test_transport_exhaustion_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/marketing/account_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_json(json!({"name": "never arrives"})),
        )
        .mount(&server)
        .await;

    let settings = RdSettings {
        max_retries: 2,
        ..settings_for(&server)
    };
    let credentials = Credentials::new("client-id", "client-secret", "code-123");
    let client = RdStationClient::with_settings(credentials, settings).unwrap();

    let result = client.account_info().await;
    assert!(matches!(result, Err(RdError::Network { .. })));

    let attempts = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.url.path() == "/marketing/account_info")
        .count();
    assert_eq!(attempts, 2);
}

#[tokio::test]
async fn test_received_error_status_is_not_retried() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    Mock::given(method("GET"))
        .and(path("/marketing/account_info"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{
                "error_type": "BAD_REQUEST",
                "error_message": "822: unexpected token at 'x'"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.account_info().await;
    match result {
        Err(RdError::RequestFailed { errors }) => {
            assert_eq!(errors[0].rd_code, Some(822));
            assert_eq!(errors[0].message, "unexpected token at 'x'");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
    // expect(1): the 400 went to the decoder, not back on the wire.
}
