//! Contract tests for ProviderAdapter against a mocked provider API.
//!
//! ## Endpoints Tested
//!
//! | Method | Path               | Test |
//! |--------|--------------------|------|
//! | POST   | `/entities/person` | `create_*` |
//! | GET    | `/entities`        | `list_*` |

use domain_entity::{
    EntityError, EntityPort, EntityValidator, ProviderAdapter, ProviderConfig, ProviderError,
};
use serde_json::{json, Value};
use test_utils::{EntityFixtures, ProviderFixtures};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an adapter pointed at a wiremock server.
fn test_adapter(mock_server: &MockServer) -> ProviderAdapter {
    let config = ProviderConfig::new(&mock_server.uri(), ProviderFixtures::API_KEY).unwrap();
    ProviderAdapter::new(config).unwrap()
}

// ── POST /entities/person ────────────────────────────────────────────

#[tokio::test]
async fn create_returns_body_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/entities/person"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ProviderFixtures::created_entity()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    let request = EntityValidator::validate_value(&EntityFixtures::us_person()).unwrap();

    let entity = adapter.create(&request).await.unwrap();
    assert_eq!(entity, json!({ "id": "ent_1" }));
}

#[tokio::test]
async fn create_sends_basic_auth_and_json_body() {
    let mock_server = MockServer::start().await;
    let request = EntityValidator::validate_value(&EntityFixtures::us_person()).unwrap();

    Mock::given(method("POST"))
        .and(path("/entities/person"))
        .and(header("authorization", ProviderFixtures::AUTHORIZATION))
        .and(header("content-type", ProviderAdapter::CONTENT_TYPE))
        .and(body_json(serde_json::to_value(&request).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "ent_9" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    let entity = adapter.create(&request).await.unwrap();
    assert_eq!(entity["id"], "ent_9");
}

#[tokio::test]
async fn create_maps_422_envelope_to_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/entities/person"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(ProviderFixtures::validation_error_envelope()),
        )
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    let request = EntityValidator::validate_value(&EntityFixtures::us_person()).unwrap();

    match adapter.create(&request).await.unwrap_err() {
        EntityError::Provider(err) => {
            assert_eq!(err.status_code, 422);
            assert_eq!(err.error_type, "validation_error");
            assert_eq!(err.code, "invalid_field");
            assert_eq!(err.message, "bad ssn");
            assert_eq!(
                err.documentation_url,
                "https://docs.provider.example/errors#invalid_field"
            );
            assert_eq!(err.details, "ssn failed verification");

            let parsed: ProviderError = serde_json::from_str(&err.to_string()).unwrap();
            assert_eq!(parsed, err);
        }
        other => panic!("expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn create_with_non_json_error_is_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/entities/person"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    let request = EntityValidator::validate_value(&EntityFixtures::us_person()).unwrap();

    match adapter.create(&request).await.unwrap_err() {
        EntityError::Transport(message) => assert!(message.contains("502")),
        other => panic!("expected Transport error, got: {other:?}"),
    }
}

#[tokio::test]
async fn create_maps_null_fields_to_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/entities/person"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "type": "invalid_request",
            "code": "bad",
            "message": "nope",
            "documentation_url": "https://x",
            "details": null
        })))
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    let request = EntityValidator::validate_value(&EntityFixtures::us_person()).unwrap();

    let err = adapter.create(&request).await.unwrap_err();
    let provider = err.as_provider().expect("provider error");
    assert_eq!(provider.status_code, 400);
    assert_eq!(provider.code, "bad");
    assert_eq!(provider.documentation_url, "https://x");
    assert_eq!(provider.details, Value::Null);
}

#[tokio::test]
async fn create_keeps_structured_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/entities/person"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "type": "invalid_request",
            "code": "bad",
            "message": "nope",
            "documentation_url": null,
            "details": { "field": "ssn" }
        })))
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    let request = EntityValidator::validate_value(&EntityFixtures::us_person()).unwrap();

    match adapter.create(&request).await.unwrap_err() {
        EntityError::Provider(err) => {
            assert_eq!(err.documentation_url, "");
            assert_eq!(err.details, json!({ "field": "ssn" }));

            let parsed: ProviderError = serde_json::from_str(&err.to_string()).unwrap();
            assert_eq!(parsed, err);
        }
        other => panic!("expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn create_with_non_object_json_error_is_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/entities/person"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!(["boom"])))
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    let request = EntityValidator::validate_value(&EntityFixtures::us_person()).unwrap();

    assert!(matches!(adapter.create(&request).await, Err(EntityError::Transport(_))));
}

// ── GET /entities ────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_page_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entities"))
        .and(header("authorization", ProviderFixtures::AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(ProviderFixtures::entity_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    let listing = adapter.list_entities().await.unwrap();

    assert_eq!(listing, ProviderFixtures::entity_page());
    assert_eq!(listing["has_more"], false);
}

#[tokio::test]
async fn list_returns_bare_array_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "ent_7" }])))
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    assert_eq!(adapter.list().await.unwrap(), json!([{ "id": "ent_7" }]));
}

#[tokio::test]
async fn list_maps_401_to_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entities"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(ProviderFixtures::unauthorized_envelope()),
        )
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    let err = adapter.list().await.unwrap_err();
    let provider = err.as_provider().expect("provider error");
    assert_eq!(provider.status_code, 401);
    assert_eq!(provider.code, "unauthorized");
}

#[tokio::test]
async fn list_does_not_check_success_body_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 3 })))
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    assert_eq!(adapter.list().await.unwrap(), json!({ "total": 3 }));
}

#[tokio::test]
async fn list_with_non_json_success_body_is_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entities"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let adapter = test_adapter(&mock_server);
    assert!(matches!(adapter.list().await, Err(EntityError::Transport(_))));
}

// ── Transport failures ───────────────────────────────────────────────

#[tokio::test]
async fn connection_refused_is_transport() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let config = ProviderConfig::new(&uri, ProviderFixtures::API_KEY).unwrap();
    let adapter = ProviderAdapter::new(config).unwrap();

    match adapter.list().await.unwrap_err() {
        EntityError::Transport(message) => assert!(message.starts_with("GET /entities")),
        other => panic!("expected Transport error, got: {other:?}"),
    }
}

#[tokio::test]
async fn timeout_is_transport() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entities"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = ProviderConfig::new(&mock_server.uri(), ProviderFixtures::API_KEY)
        .unwrap()
        .with_timeout(1);
    let adapter = ProviderAdapter::new(config).unwrap();

    assert!(matches!(adapter.list().await, Err(EntityError::Transport(_))));
}
