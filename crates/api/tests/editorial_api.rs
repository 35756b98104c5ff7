//! HTTP-level integration tests for the `/editorial` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_user, get, post_auth, post_json, post_json_auth,
    put_json_auth, token_for,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use viz_db::models::user::User;

/// Create an editorial through the API and return its JSON (`data`).
async fn create_editorial(pool: &PgPool, author: &User, body: Value) -> Value {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/editorial/create",
        body,
        &token_for(author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

fn two_pages() -> Value {
    json!([{ "background": "#000" }, { "background": "#fff", "items": [] }])
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_defaults_to_draft(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let editorial = create_editorial(
        &pool,
        &author,
        json!({ "title": "  Spring lookbook ", "pages": two_pages() }),
    )
    .await;

    assert_eq!(editorial["title"], "Spring lookbook");
    assert_eq!(editorial["isDraft"], true);
    assert!(editorial["publishedAt"].is_null());
    assert_eq!(editorial["pages"], two_pages());
    assert_eq!(editorial["userId"], author.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_non_draft_is_published(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let editorial = create_editorial(
        &pool,
        &author,
        json!({ "title": "Live", "pages": [], "isDraft": false }),
    )
    .await;
    assert_eq!(editorial["isDraft"], false);
    assert!(editorial["publishedAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_missing_fields_returns_400(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let token = token_for(&author);

    for body in [
        json!({ "pages": [] }),
        json!({ "title": "No pages" }),
        json!({ "title": "   ", "pages": [] }),
    ] {
        let response = post_json_auth(
            build_test_app(pool.clone()),
            "/api/v1/editorial/create",
            body,
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_requires_session(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/editorial/create",
        json!({ "title": "Anon", "pages": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_preserves_other_fields(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let editorial = create_editorial(
        &pool,
        &author,
        json!({ "title": "Before", "pages": two_pages() }),
    )
    .await;
    let id = editorial["id"].as_i64().unwrap();

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/editorial/{id}"),
        json!({ "title": "After" }),
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "After");
    assert_eq!(json["data"]["pages"], two_pages());
    assert_eq!(json["data"]["isDraft"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_by_non_owner_returns_403(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let other = create_user(&pool, "cy").await;
    let editorial =
        create_editorial(&pool, &author, json!({ "title": "Mine", "pages": [] })).await;
    let id = editorial["id"].as_i64().unwrap();

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/editorial/{id}"),
        json!({ "title": "Yours now" }),
        &token_for(&other),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_auth(
        build_test_app(pool),
        &format!("/api/v1/editorial/{id}/publish"),
        &token_for(&other),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_editorial_returns_404(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let response = put_json_auth(
        build_test_app(pool),
        "/api/v1/editorial/987654",
        json!({ "title": "Ghost" }),
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_publish_twice_overwrites_timestamp(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let token = token_for(&author);
    let editorial =
        create_editorial(&pool, &author, json!({ "title": "Issue 1", "pages": [] })).await;
    let id = editorial["id"].as_i64().unwrap();
    let uri = format!("/api/v1/editorial/{id}/publish");

    let first = post_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first = body_json(first).await;
    assert_eq!(first["data"]["isDraft"], false);
    let first_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(first["data"]["publishedAt"].clone()).unwrap();

    let second = post_auth(build_test_app(pool), &uri, &token).await;
    assert_eq!(second.status(), StatusCode::OK);
    let second = body_json(second).await;
    assert_eq!(second["data"]["isDraft"], false);
    let second_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(second["data"]["publishedAt"].clone()).unwrap();
    assert!(second_at >= first_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_published_editorial_cannot_return_to_draft(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let token = token_for(&author);
    let editorial = create_editorial(
        &pool,
        &author,
        json!({ "title": "Out", "pages": [], "isDraft": false }),
    )
    .await;
    let id = editorial["id"].as_i64().unwrap();

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/editorial/{id}"),
        json!({ "isDraft": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_leaving_draft_stamps_published_at(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let editorial =
        create_editorial(&pool, &author, json!({ "title": "Draft", "pages": [] })).await;
    let id = editorial["id"].as_i64().unwrap();

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/editorial/{id}"),
        json!({ "isDraft": false }),
        &token_for(&author),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["isDraft"], false);
    assert!(json["data"]["publishedAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_and_feed_are_public(pool: PgPool) {
    let author = create_user(&pool, "ari").await;
    let draft = create_editorial(&pool, &author, json!({ "title": "Wip", "pages": [] })).await;
    let live = create_editorial(
        &pool,
        &author,
        json!({ "title": "Live", "pages": [], "isDraft": false }),
    )
    .await;

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/editorial/{}", draft["id"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["username"], "ari");

    let response = get(build_test_app(pool.clone()), "/api/v1/editorial/feed").await;
    let json = body_json(response).await;
    let feed = json["data"].as_array().unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["id"], live["id"]);

    let response = get(build_test_app(pool), "/api/v1/editorial/555555").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
