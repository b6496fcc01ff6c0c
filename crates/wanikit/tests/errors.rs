//! Tests for response classification and error mapping.

mod common;

use common::{setup_mock_server, test_client};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use wanikit::resources::{summary, user};
use wanikit::{Error, StatusCode};

#[tokio::test]
async fn test_unauthorized_surfaces_server_message() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "error": "Unauthorized. Nice try."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client.send(&user::Me, None).await.unwrap_err();

    match error {
        Error::Api { code, message } => {
            assert_eq!(code, 401);
            assert_eq!(message.as_deref(), Some("Unauthorized. Nice try."));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_known_failure_without_json_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/summary"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client.send(&summary::Get, None).await.unwrap_err();

    assert!(matches!(
        error,
        Error::Status(StatusCode::InternalServerError)
    ));
}

#[tokio::test]
async fn test_unknown_status_is_incompatible() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/summary"))
        .respond_with(ResponseTemplate::new(418))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client.send(&summary::Get, None).await.unwrap_err();

    assert!(matches!(error, Error::IncompatibleResponse(418)));
}

#[tokio::test]
async fn test_rate_limit_headers_become_typed_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/summary"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Ratelimit-Limit", "60")
                .insert_header("Ratelimit-Remaining", "0")
                .insert_header("Ratelimit-Reset", "1674005273"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client.send(&summary::Get, None).await.unwrap_err();

    match error {
        Error::RateLimitExceeded(limits) => {
            assert_eq!(limits.limit, 60);
            assert_eq!(limits.remaining, 0);
            assert_eq!(limits.reset.timestamp(), 1_674_005_273);
        }
        other => panic!("expected rate limit error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_modified_without_body_is_empty_response() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/summary"))
        .respond_with(ResponseTemplate::new(304))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client.send(&summary::Get, None).await.unwrap_err();

    assert!(matches!(error, Error::EmptyResponse));
}

#[tokio::test]
async fn test_success_with_mismatched_schema_is_a_json_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client.send(&user::Me, None).await.unwrap_err();

    assert!(matches!(error, Error::Json(_)));
}
