//! Tests for user endpoints.

mod common;

use common::{setup_mock_server, test_client};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use wanikit::models::SubscriptionKind;
use wanikit::resources::user;

fn user_json() -> serde_json::Value {
    json!({
        "object": "user",
        "url": "https://api.wanikani.com/v2/user",
        "data_updated_at": "2018-04-06T14:26:53.022Z",
        "data": {
            "id": "5a6a5234-a392-4a87-8f3f-33342afe8a42",
            "username": "example_user",
            "level": 5,
            "profile_url": "https://www.wanikani.com/users/example_user",
            "started_at": "2012-05-11T00:52:18.958Z",
            "current_vacation_started_at": null,
            "subscription": {
                "active": true,
                "type": "recurring",
                "max_level_granted": 60,
                "period_ends_at": "2018-12-11T13:32:19.485Z"
            },
            "preferences": {
                "default_voice_actor_id": 1,
                "lessons_autoplay_audio": false,
                "lessons_batch_size": 10,
                "lessons_presentation_order": "ascending_level_then_subject",
                "reviews_autoplay_audio": false,
                "reviews_display_srs_indicator": true
            }
        }
    })
}

#[tokio::test]
async fn test_get_user() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client.send(&user::Me, None).await.unwrap();

    assert_eq!(response.data.data.username, "example_user");
    assert_eq!(response.data.data.level, 5);
    assert_eq!(
        response.data.data.subscription.kind,
        SubscriptionKind::Recurring
    );
}

#[tokio::test]
async fn test_update_user_preferences() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/v2/user"))
        .and(body_json(json!({
            "user": {
                "preferences": {
                    "lessons_batch_size": 3,
                    "reviews_autoplay_audio": true
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let update = user::Update::new()
        .lessons_batch_size(3)
        .reviews_autoplay_audio(true);
    let response = client.send(&update, None).await.unwrap();

    assert_eq!(response.data.data.username, "example_user");
}
