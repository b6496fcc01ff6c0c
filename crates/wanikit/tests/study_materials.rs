//! Tests for study material endpoints.

mod common;

use common::{setup_mock_server, test_client};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use wanikit::resources::study_materials;

fn study_material_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "object": "study_material",
        "url": format!("https://api.wanikani.com/v2/study_materials/{id}"),
        "data_updated_at": "2017-09-30T01:42:13.453Z",
        "data": {
            "created_at": "2017-09-30T01:42:13.453Z",
            "subject_id": 241,
            "subject_type": "radical",
            "meaning_note": "I like turtles",
            "reading_note": null,
            "meaning_synonyms": ["burn"],
            "hidden": false
        }
    })
}

#[tokio::test]
async fn test_create_study_material() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/study_materials"))
        .and(body_json(json!({
            "study_material": {
                "subject_id": 241,
                "meaning_note": "I like turtles",
                "meaning_synonyms": ["burn"]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(study_material_json(65231)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let create = study_materials::Create::new(241)
        .meaning_note("I like turtles")
        .meaning_synonyms(&["burn"]);
    let response = client.send(&create, None).await.unwrap();

    assert_eq!(response.data.data.subject_id, 241);
    assert_eq!(response.data.data.meaning_synonyms, vec!["burn"]);
    assert!(response.data.data.reading_note.is_none());
}

#[tokio::test]
async fn test_update_study_material() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/v2/study_materials/65231"))
        .and(body_json(json!({
            "study_material": {"meaning_note": "actually I prefer tortoises"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(study_material_json(65231)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let update = study_materials::Update::new(65231).meaning_note("actually I prefer tortoises");
    let response = client.send(&update, None).await.unwrap();

    assert_eq!(response.data.id, 65231);
}
