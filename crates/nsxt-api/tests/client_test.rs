#![allow(clippy::unwrap_used)]
// Integration tests for `NsxClient` using wiremock.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nsxt_api::{BasicAuth, Error, NsxClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, NsxClient) {
    let server = MockServer::start().await;
    let client = NsxClient::with_client(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Switching profiles ──────────────────────────────────────────────

#[tokio::test]
async fn test_get_switching_profile() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/switching-profiles/f313290b-eba8-4262-bd93-fab5026e9495"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "f313290b-eba8-4262-bd93-fab5026e9495",
            "display_name": "nsx-default-qos-switching-profile",
            "resource_type": "QosSwitchingProfile",
            "system_owned": true,
            "_revision": 0
        })))
        .mount(&server)
        .await;

    let profile = client
        .get_switching_profile("f313290b-eba8-4262-bd93-fab5026e9495")
        .await
        .unwrap();

    assert!(profile.system_owned);
    assert_eq!(profile.resource_type.as_deref(), Some("QosSwitchingProfile"));
    assert_eq!(profile.revision, Some(0));
}

#[tokio::test]
async fn test_get_switching_profile_id_is_a_path_segment() {
    let (server, client) = setup().await;

    for (encoded, id) in [("qos%20web", "qos web"), ("qos+web", "qos+web")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/switching-profiles/{encoded}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "resource_type": "QosSwitchingProfile",
                "system_owned": true
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    assert_eq!(client.get_switching_profile("qos web").await.unwrap().id, "qos web");
    assert_eq!(client.get_switching_profile("qos+web").await.unwrap().id, "qos+web");
}

#[tokio::test]
async fn test_get_switching_profile_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/switching-profiles/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "httpStatus": "NOT_FOUND",
            "error_code": 202,
            "module_name": "common-services",
            "error_message": "The requested object : missing could not be found."
        })))
        .mount(&server)
        .await;

    let err = client.get_switching_profile("missing").await.unwrap_err();

    assert!(err.is_not_found(), "expected 404, got: {err:?}");
    assert_eq!(err.api_error_code(), Some(202));
    match err {
        Error::Api { ref message, .. } => assert!(message.contains("could not be found")),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Node ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_read_node_properties() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/node"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "node_version": "2.5.1.0.0.15314288",
            "product_version": "2.5.1.0.0.15314292",
            "hostname": "nsxmgr-01",
            "timezone": "UTC"
        })))
        .mount(&server)
        .await;

    let node = client.read_node_properties().await.unwrap();

    assert_eq!(node.node_version, "2.5.1.0.0.15314288");
    assert_eq!(node.hostname.as_deref(), Some("nsxmgr-01"));
    assert_eq!(node.extra.get("timezone"), Some(&json!("UTC")));
}

#[tokio::test]
async fn test_basic_auth_header_is_sent() {
    let server = MockServer::start().await;
    let auth = BasicAuth::new("admin", SecretString::from("secret".to_string()));
    let client = NsxClient::new(&server.uri(), auth, &TransportConfig::default()).unwrap();

    // base64("admin:secret")
    Mock::given(method("GET"))
        .and(path("/api/v1/node"))
        .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"node_version": "3.0.0"})))
        .mount(&server)
        .await;

    let node = client.read_node_properties().await.unwrap();
    assert_eq!(node.node_version, "3.0.0");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error_code": 403,
            "error_message": "The credentials were incorrect or the account specified has been locked."
        })))
        .mount(&server)
        .await;

    let result = client.read_node_properties().await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(message.contains("credentials"), "got: {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/node"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.read_node_properties().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => assert!(body.contains("maintenance")),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_becomes_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/node"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let err = client.read_node_properties().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    match err {
        Error::Api { message, error_code, .. } => {
            assert_eq!(message, "internal failure");
            assert_eq!(error_code, None);
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
