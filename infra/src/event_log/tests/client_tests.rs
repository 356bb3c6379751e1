//! Tests for the event-log HTTP client against a local mock server

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use qp_core::domain::value_objects::qr_event::QrEvent;
use qp_core::services::verification::EventLogTrait;
use qp_core::TokenRecord;
use qp_shared::config::EventLogConfig;

use crate::event_log::HttpEventLogClient;
use crate::InfrastructureError;

fn client_for(server: &MockServer) -> HttpEventLogClient {
    HttpEventLogClient::new(&EventLogConfig::new(format!("{}/", server.uri()))).unwrap()
}

fn sample_event() -> QrEvent {
    let issued = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
    let record = TokenRecord::issued_at(
        issued,
        "01012345678".to_string(),
        "Visitor".to_string(),
        "gate-01".to_string(),
        Duration::minutes(10),
    );
    QrEvent::from_record(&record, issued + Duration::minutes(1))
}

#[tokio::test]
async fn test_events_url_has_single_slash() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    assert_eq!(client.events_url(), format!("{}/qr-events", server.uri()));
}

#[tokio::test]
async fn test_list_counts_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/qr-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }, { "id": 2 }])))
        .expect(1)
        .mount(&server)
        .await;

    let count = client_for(&server).list_events().await.unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_list_accepts_wrapped_and_counted_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/qr-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [{}, {}, {}] })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/qr-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 7 })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.fetch_event_count().await.unwrap(), 3);
    assert_eq!(client.fetch_event_count().await.unwrap(), 7);
}

#[tokio::test]
async fn test_list_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/qr-events"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_event_count().await;
    assert!(matches!(
        result,
        Err(InfrastructureError::UpstreamStatus { status: 503 })
    ));
}

#[tokio::test]
async fn test_list_rejects_unreadable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/qr-events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_event_count().await;
    assert!(matches!(result, Err(InfrastructureError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_an_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    assert!(client.list_events().await.is_err());
}

#[tokio::test]
async fn test_submit_posts_event_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qr-events"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "client": { "device_id": "gate-01" },
            "data": {
                "phone": "01012345678",
                "purpose": "Visitor",
                "requested_at": "2025-03-01T08:31:00.000Z",
                "status": "Pending"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).submit_event(&sample_event()).await.unwrap();
}

#[tokio::test]
async fn test_submit_rejection_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qr-events"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .submit_event(&sample_event())
        .await
        .unwrap_err();
    assert!(error.contains("422"));
}
