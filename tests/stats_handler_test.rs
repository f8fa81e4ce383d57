//! Integration tests for statistics and prediction endpoints

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use setlist_manager::db::StorageDocument;
use setlist_manager::handlers;
use setlist_manager::state::AppState;
use setlist_manager::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .nest("/api", handlers::api_routes())
        .with_state(state.clone())
}

async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, parse_json_response(response).await)
}

/// Three past shows: s1 played twice, s2 once, one slot each.
fn history() -> StorageDocument {
    StorageDocument {
        members: vec![
            test_member("1", "ミント"),
            test_member("2", "ソム"),
            test_member("4", "ナナ"),
            test_member("5", "パイ"),
        ],
        songs: vec![test_song("s1", &["1", "2", "3"]), test_song("s2", &["4", "5"])],
        events: vec![
            test_event("e1", "2024-01-15", &["1", "2"]),
            test_event("e2", "2024-02-20", &["1"]),
            test_event("e3", "2024-03-10", &["5"]),
            test_event("e4", "2024-06-30", &["1", "2", "3", "4"]),
            test_event("e5", "2024-07-20", &[]),
        ],
        setlists: vec![
            test_setlist("sl1", "e1", &[("s1", &["1", "2"])]),
            test_setlist("sl2", "e2", &[("s1", &["1"])]),
            test_setlist("sl3", "e3", &[("s2", &["5"])]),
        ],
    }
}

#[tokio::test]
async fn test_stats_on_empty_store() {
    let state = setup_test_app_state();

    let (status, body) = get_json(create_test_router(&state), "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["summary"],
        json!({
            "totalSetlists": 0,
            "totalSongs": 0,
            "totalMembers": 0,
            "highAdoptionSongs": 0
        })
    );
    assert_eq!(body["songs"], json!([]));
    assert_eq!(body["members"], json!([]));
}

#[tokio::test]
async fn test_stats_song_adoption() {
    let state = setup_seeded_app_state(history()).await;

    let (_, body) = get_json(create_test_router(&state), "/api/stats").await;

    assert_eq!(
        body["songs"],
        json!([
            { "songId": "s1", "title": "ソング s1", "performances": 2, "adoptionRate": 66.7 },
            { "songId": "s2", "title": "ソング s2", "performances": 1, "adoptionRate": 33.3 }
        ])
    );
    assert_eq!(body["summary"]["totalSetlists"], 3);
    assert_eq!(body["summary"]["highAdoptionSongs"], 1);
}

#[tokio::test]
async fn test_stats_member_participation_ranked_by_rate() {
    let state = setup_seeded_app_state(history()).await;

    let (_, body) = get_json(create_test_router(&state), "/api/stats").await;

    let members = body["members"].as_array().unwrap();
    let ranked: Vec<(&str, f64)> = members
        .iter()
        .map(|m| {
            (
                m["memberId"].as_str().unwrap(),
                m["participationRate"].as_f64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        ranked,
        vec![("1", 66.7), ("2", 33.3), ("5", 33.3), ("4", 0.0)]
    );
    assert_eq!(members[0]["name"], "ミント");
    assert_eq!(members[0]["participationCount"], 2);
}

#[tokio::test]
async fn test_prediction_without_event_is_null() {
    let state = setup_seeded_app_state(history()).await;
    let app = create_test_router(&state);

    for uri in ["/api/prediction", "/api/prediction?eventId=", "/api/prediction?eventId=e404"] {
        let (status, body) = get_json(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, Value::Null, "{}", uri);
    }
}

#[tokio::test]
async fn test_prediction_for_event() {
    let state = setup_seeded_app_state(history()).await;

    let (status, body) =
        get_json(create_test_router(&state), "/api/prediction?eventId=e4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"]["id"], "e4");

    // s2 has only one of its two default members attending
    let predictions = body["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 1);
    let top = &predictions[0];
    assert_eq!(top["songId"], "s1");
    assert_eq!(top["availableMembers"], json!(["1", "2", "3"]));
    assert_eq!(top["availabilityRate"], 100.0);
    assert_eq!(top["adoptionRate"], 66.7);
    assert!((top["predictionScore"].as_f64().unwrap() - 0.9).abs() < 1e-9);
}

#[tokio::test]
async fn test_prediction_with_no_viable_song_is_empty() {
    let state = setup_seeded_app_state(history()).await;

    let (_, body) = get_json(create_test_router(&state), "/api/prediction?eventId=e5").await;

    assert_eq!(body["event"]["id"], "e5");
    assert_eq!(body["predictions"], json!([]));
}

#[tokio::test]
async fn test_prediction_limit_is_clamped() {
    let mut doc = history();
    doc.events.push(test_event("e6", "2024-08-01", &["1", "2", "3", "4", "5"]));
    let state = setup_seeded_app_state(doc).await;
    let app = create_test_router(&state);

    let (_, body) = get_json(app.clone(), "/api/prediction?eventId=e6&limit=1").await;
    assert_eq!(body["predictions"].as_array().unwrap().len(), 1);
    assert_eq!(body["predictions"][0]["songId"], "s1");

    let (_, body) = get_json(app, "/api/prediction?eventId=e6&limit=0").await;
    assert_eq!(body["predictions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_prediction_rejects_negative_limit() {
    let state = setup_seeded_app_state(history()).await;

    let (status, body) =
        get_json(create_test_router(&state), "/api/prediction?eventId=e4&limit=-1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Malformed query string");
    assert!(body["details"].is_string());
}
