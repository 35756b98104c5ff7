//! HTTP-level integration tests for the `/admin` moderation endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_admin, create_content_with_region, create_user, get_auth,
    put_json_auth, token_for,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_require_admin_role(pool: PgPool) {
    let user = create_user(&pool, "ari").await;
    let response = get_auth(
        build_test_app(pool),
        "/api/v1/admin/content",
        &token_for(&user),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reject_content_logs_activity_and_filters(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let owner = create_user(&pool, "bea").await;
    let kept = create_content_with_region(&pool, &owner, "Kept").await;
    let pulled = create_content_with_region(&pool, &owner, "Pulled").await;
    let token = token_for(&admin);

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/content/{}/approve", pulled["id"]),
        json!({ "approved": false, "reason": "Spam" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["isApproved"], false);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/content?status=PENDING",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["id"], pulled["id"]);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/content?status=APPROVED&type=PHOTO",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["id"], kept["id"]);

    let response = get_auth(build_test_app(pool), "/api/v1/admin/logs", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    let logs = json["data"]["items"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["action"], "CONTENT_REJECTED");
    assert_eq!(logs[0]["targetType"], "CONTENT");
    assert_eq!(logs[0]["targetId"], pulled["id"]);
    assert_eq!(logs[0]["details"]["reason"], "Spam");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_feature_toggle_stamps_and_clears(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let owner = create_user(&pool, "bea").await;
    let content = create_content_with_region(&pool, &owner, "Star").await;
    let token = token_for(&admin);
    let uri = format!("/api/v1/admin/content/{}/feature", content["id"]);

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &uri,
        json!({ "featured": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["isFeatured"], true);
    assert!(json["data"]["featuredAt"].is_string());

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &uri,
        json!({ "featured": false }),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["isFeatured"], false);
    assert!(json["data"]["featuredAt"].is_null());

    let missing = put_json_auth(
        build_test_app(pool),
        "/api/v1/admin/content/777777/feature",
        json!({ "featured": true }),
        &token,
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_toggle_fields_return_400(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let owner = create_user(&pool, "bea").await;
    let content = create_content_with_region(&pool, &owner, "Star").await;
    let token = token_for(&admin);

    for (uri, body) in [
        (format!("/api/v1/admin/content/{}/approve", content["id"]), json!({})),
        (format!("/api/v1/admin/content/{}/feature", content["id"]), json!({})),
        (format!("/api/v1/admin/users/{}/ban", owner.id), json!({})),
        (format!("/api/v1/admin/users/{}/suspend", owner.id), json!({})),
        (format!("/api/v1/admin/users/{}/role", owner.id), json!({})),
        (
            format!("/api/v1/admin/users/{}/role", owner.id),
            json!({ "role": "OWNER" }),
        ),
        (
            format!("/api/v1/admin/users/{}/suspend", owner.id),
            json!({ "suspend": true, "days": 0 }),
        ),
        (
            format!("/api/v1/admin/content/{}/approve", content["id"]),
            json!({ "approved": "yes" }),
        ),
    ] {
        let response = put_json_auth(build_test_app(pool.clone()), &uri, body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_filter_returns_400(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let response = get_auth(
        build_test_app(pool),
        "/api/v1/admin/content?featured=SOMETIMES",
        &token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ban_blocks_sessions_and_unban_restores(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let user = create_user(&pool, "ari").await;
    let admin_token = token_for(&admin);
    let user_token = token_for(&user);
    let uri = format!("/api/v1/admin/users/{}/ban", user.id);

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &uri,
        json!({ "ban": true, "reason": "Harassment" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["isBanned"], true);

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/viz-list", &user_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &uri,
        json!({ "ban": false }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/viz-list", &user_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(build_test_app(pool), "/api/v1/admin/logs", &admin_token).await;
    let json = body_json(response).await;
    let actions: Vec<&str> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["action"].as_str().unwrap())
        .collect();
    assert_eq!(actions, vec!["USER_UNBANNED", "USER_BANNED"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admins_cannot_be_banned(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let other_admin = create_admin(&pool, "mod2").await;

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/admin/users/{}/ban", other_admin.id),
        json!({ "ban": true }),
        &token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// User management
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_timed_suspension_blocks_then_lift_restores(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let user = create_user(&pool, "ari").await;
    let admin_token = token_for(&admin);
    let user_token = token_for(&user);
    let uri = format!("/api/v1/admin/users/{}/suspend", user.id);

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &uri,
        json!({ "suspend": true, "days": 7, "reason": "Cooling off" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["isSuspended"], true);
    let until: DateTime<Utc> =
        serde_json::from_value(json["data"]["suspendedUntil"].clone()).unwrap();
    let hours_left = (until - Utc::now()).num_hours();
    assert!((167..=168).contains(&hours_left));

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/viz-list", &user_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Account is suspended until"));

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &uri,
        json!({ "suspend": false }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["isSuspended"], false);
    assert!(json["data"]["suspendedUntil"].is_null());

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/viz-list", &user_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(
        build_test_app(pool),
        "/api/v1/admin/logs?action=suspend",
        &admin_token,
    )
    .await;
    let json = body_json(response).await;
    let logs = json["data"]["items"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["action"], "USER_UNSUSPENDED");
    assert_eq!(logs[1]["action"], "USER_SUSPENDED");
    assert_eq!(logs[1]["details"]["days"], 7);
    assert_eq!(logs[1]["details"]["reason"], "Cooling off");
    assert_eq!(logs[1]["details"]["username"], "ari");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_open_ended_suspension_has_no_end(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let user = create_user(&pool, "ari").await;

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/users/{}/suspend", user.id),
        json!({ "suspend": true }),
        &token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["suspendedUntil"].is_null());

    let response = get_auth(build_test_app(pool), "/api/v1/viz-list", &token_for(&user)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Account is suspended");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admins_cannot_be_suspended(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let other_admin = create_admin(&pool, "mod2").await;

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/admin/users/{}/suspend", other_admin.id),
        json!({ "suspend": true, "days": 3 }),
        &token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_user_returns_404(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let token = token_for(&admin);

    for (uri, body) in [
        ("/api/v1/admin/users/999999/suspend", json!({ "suspend": true })),
        ("/api/v1/admin/users/999999/role", json!({ "role": "MODERATOR" })),
        ("/api/v1/admin/users/999999/ban", json!({ "ban": true })),
    ] {
        let response = put_json_auth(build_test_app(pool.clone()), uri, body, &token).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_change_grants_admin_and_is_logged(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let user = create_user(&pool, "ari").await;
    let admin_token = token_for(&admin);

    // Not an admin yet.
    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/users",
        &token_for(&user),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/users/{}/role", user.id),
        json!({ "role": "ADMIN" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["role"], "ADMIN");

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/users",
        &token_for(&user),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/admin/logs?targetType=USER&userId={}", admin.id),
        &admin_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    let entry = &json["data"]["items"][0];
    assert_eq!(entry["action"], "USER_ROLE_CHANGED");
    assert_eq!(entry["targetId"], user.id);
    assert_eq!(entry["details"]["previousRole"], "USER");
    assert_eq!(entry["details"]["newRole"], "ADMIN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_listing_filters_and_counts(pool: PgPool) {
    let admin = create_admin(&pool, "mod").await;
    let ari = create_user(&pool, "ari").await;
    let bea = create_user(&pool, "bea").await;
    create_content_with_region(&pool, &bea, "One").await;
    create_content_with_region(&pool, &bea, "Two").await;
    let token = token_for(&admin);

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/users/{}/ban", ari.id),
        json!({ "ban": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/admin/users", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 3);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/users?search=BE",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    let row = &json["data"]["items"][0];
    assert_eq!(row["id"], bea.id);
    assert_eq!(row["contentCount"], 2);
    assert_eq!(row["editorialCount"], 0);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/users?status=BANNED",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["id"], ari.id);

    let response = get_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/users?status=ACTIVE&role=USER",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["id"], bea.id);

    let response = get_auth(
        build_test_app(pool),
        "/api/v1/admin/users?status=LURKING",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
