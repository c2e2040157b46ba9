//! HTTP-level integration tests for events and participation.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_auth, post_json_auth, register_user};
use sqlx::PgPool;

/// Create an event through the API and return its id.
async fn create_event(app: &axum::Router, token: &str, title: &str) -> i64 {
    let body = serde_json::json!({
        "title": title,
        "description": "Board games in the student lounge",
        "event_date": "2026-09-12",
        "event_time": "18:30:00",
        "location": "Student Lounge B",
    });
    let response = post_json_auth(app, "/api/v1/events", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_list_events(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, token) = register_user(&app, "a@x.com", "Alice").await;

    let event_id = create_event(&app, &token, "Game Night").await;

    let response = get_auth(&app, "/api/v1/events", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["id"], event_id);
    assert_eq!(json["data"][0]["title"], "Game Night");
    assert_eq!(json["data"][0]["creator_id"], user_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn events_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(&app, "/api/v1/events").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Joining twice yields success then ALREADY_JOINED, and exactly one
/// participation row exists afterwards.
#[sqlx::test(migrations = "../../db/migrations")]
async fn join_twice_is_benign_conflict_with_single_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_creator, creator_token) = register_user(&app, "a@x.com", "Alice").await;
    let (user_id, token) = register_user(&app, "b@x.com", "Bob").await;

    let event_id = create_event(&app, &creator_token, "Game Night").await;

    let response = post_auth(&app, &format!("/api/v1/events/{event_id}/join"), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["event_id"], event_id);
    assert_eq!(json["user_id"], user_id);

    let response = post_auth(&app, &format!("/api/v1/events/{event_id}/join"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ALREADY_JOINED");

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM event_participants WHERE event_id = $1 AND user_id = $2",
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn join_nonexistent_event_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_id, token) = register_user(&app, "a@x.com", "Alice").await;

    let response = post_auth(&app, "/api/v1/events/999999/join", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_detail_reports_participant_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_creator, creator_token) = register_user(&app, "a@x.com", "Alice").await;
    let (_bob, bob_token) = register_user(&app, "b@x.com", "Bob").await;

    let event_id = create_event(&app, &creator_token, "Game Night").await;
    post_auth(&app, &format!("/api/v1/events/{event_id}/join"), &bob_token).await;

    let response = get_auth(&app, &format!("/api/v1/events/{event_id}"), &creator_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Game Night");
    assert_eq!(json["participant_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_event_rejects_blank_title(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_id, token) = register_user(&app, "a@x.com", "Alice").await;

    let body = serde_json::json!({
        "title": "   ",
        "event_date": "2026-09-12",
        "event_time": "18:30:00",
        "location": "Anywhere",
    });
    let response = post_json_auth(&app, "/api/v1/events", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
