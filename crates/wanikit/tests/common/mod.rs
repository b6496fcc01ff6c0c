//! Common test utilities for WaniKani API tests.

use serde_json::{Value, json};
use wiremock::MockServer;

use wanikit::Client;

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a client pointed at the mock server, with a token configured.
pub fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .token("test-token")
        .build()
}

/// Build a collection envelope around the given entries.
#[allow(dead_code)] // Not all test files use this
pub fn collection_json(path: &str, data: Vec<Value>, next_url: Option<&str>) -> Value {
    json!({
        "object": "collection",
        "url": format!("https://api.wanikani.com/v2/{path}"),
        "pages": {
            "per_page": 500,
            "next_url": next_url,
            "previous_url": null
        },
        "total_count": data.len(),
        "data_updated_at": "2023-01-17T21:07:53.000Z",
        "data": data
    })
}

/// Build an assignment envelope.
#[allow(dead_code)] // Not all test files use this
pub fn assignment_json(id: u64, subject_id: u64, srs_stage: u32) -> Value {
    json!({
        "id": id,
        "object": "assignment",
        "url": format!("https://api.wanikani.com/v2/assignments/{id}"),
        "data_updated_at": "2017-10-30T01:51:10.438Z",
        "data": {
            "created_at": "2017-09-05T23:38:10.695Z",
            "subject_id": subject_id,
            "subject_type": "kanji",
            "srs_stage": srs_stage,
            "unlocked_at": "2017-09-05T23:38:10.695Z",
            "started_at": "2017-09-05T23:41:28.980Z",
            "passed_at": "2017-09-07T17:14:14.491Z",
            "burned_at": null,
            "available_at": "2018-02-27T00:00:00.000Z",
            "resurrected_at": null,
            "hidden": false
        }
    })
}
