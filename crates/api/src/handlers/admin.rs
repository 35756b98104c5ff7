//! Moderation handlers. Every route here requires the `ADMIN` role.
//!
//! Each state change writes an `admin_activity_logs` row. Log writes are
//! best effort: a failure is reported via tracing and never fails the request.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use viz_core::account::{parse_standing_filter, suspension_end};
use viz_core::content::{parse_featured_filter, parse_status_filter, parse_type_filter};
use viz_core::error::CoreError;
use viz_core::moderation::{
    approval_action, ban_action, feature_action, suspend_action, ACTION_USER_ROLE_CHANGED,
    DEFAULT_REASON, TARGET_CONTENT, TARGET_USER,
};
use viz_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use viz_core::roles::{parse_role_filter, validate_role, ROLE_ADMIN};
use viz_core::types::DbId;
use viz_db::models::admin_activity_log::{AdminActivityLogFilter, CreateAdminActivityLog};
use viz_db::models::content::{ContentFilter, ContentWithOwner};
use viz_db::models::user::UserFilter;
use viz_db::repositories::{AdminActivityLogRepo, ContentRepo, UserRepo};
use viz_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{AdminContentParams, AdminLogParams, AdminUserParams};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Request body for `PUT /admin/content/{id}/approve`.
#[derive(Debug, Deserialize)]
pub struct ApproveContentRequest {
    pub approved: Option<bool>,
    pub reason: Option<String>,
}

/// Request body for `PUT /admin/content/{id}/feature`.
#[derive(Debug, Deserialize)]
pub struct FeatureContentRequest {
    pub featured: Option<bool>,
}

/// Request body for `PUT /admin/users/{id}/ban`.
#[derive(Debug, Deserialize)]
pub struct BanUserRequest {
    pub ban: Option<bool>,
    pub reason: Option<String>,
}

/// Request body for `PUT /admin/users/{id}/suspend`.
#[derive(Debug, Deserialize)]
pub struct SuspendUserRequest {
    pub suspend: Option<bool>,
    /// Length of a timed suspension. Omitted means open-ended.
    pub days: Option<i64>,
    pub reason: Option<String>,
}

/// Request body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: Option<String>,
}

/// Append an activity log row, logging instead of failing on error.
async fn record_activity(pool: &DbPool, entry: CreateAdminActivityLog) {
    if let Err(e) = AdminActivityLogRepo::create(pool, &entry).await {
        tracing::warn!(
            error = %e,
            action = %entry.action,
            target_id = ?entry.target_id,
            "Failed to write admin activity log"
        );
    }
}

fn content_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Content",
        id,
    })
}

fn user_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

/// Treat blank query values as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// GET /api/v1/admin/content?type=&status=&featured=&limit=&offset=
pub async fn list_content(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<AdminContentParams>,
) -> AppResult<impl IntoResponse> {
    let filter = ContentFilter {
        media_type: parse_type_filter(params.media_type.as_deref())?,
        is_approved: parse_status_filter(params.status.as_deref())?,
        is_featured: parse_featured_filter(params.featured.as_deref())?,
    };
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);

    let rows = ContentRepo::list_filtered(&state.pool, &filter, limit, offset).await?;
    let total = ContentRepo::count_filtered(&state.pool, &filter).await?;

    Ok(Json(DataResponse {
        data: PageResponse {
            items: rows.into_iter().map(ContentWithOwner::from).collect(),
            total,
        },
    }))
}

/// PUT /api/v1/admin/content/{id}/approve
pub async fn approve_content(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ApproveContentRequest>,
) -> AppResult<impl IntoResponse> {
    let approved = input
        .approved
        .ok_or_else(|| AppError::BadRequest("Approval status required".into()))?;

    let content = ContentRepo::set_approved(&state.pool, id, approved)
        .await?
        .ok_or_else(|| content_not_found(id))?;

    record_activity(
        &state.pool,
        CreateAdminActivityLog {
            user_id: admin.user_id,
            action: approval_action(approved).to_string(),
            target_type: Some(TARGET_CONTENT.to_string()),
            target_id: Some(id),
            details: Some(json!({
                "reason": input.reason.as_deref().unwrap_or(DEFAULT_REASON),
                "contentOwnerId": content.user_id,
            })),
        },
    )
    .await;

    tracing::info!(admin_id = admin.user_id, content_id = id, approved, "Content moderated");

    Ok(Json(DataResponse { data: content }))
}

/// PUT /api/v1/admin/content/{id}/feature
pub async fn feature_content(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<FeatureContentRequest>,
) -> AppResult<impl IntoResponse> {
    let featured = input
        .featured
        .ok_or_else(|| AppError::BadRequest("Featured status required".into()))?;

    let content = ContentRepo::set_featured(&state.pool, id, featured)
        .await?
        .ok_or_else(|| content_not_found(id))?;

    record_activity(
        &state.pool,
        CreateAdminActivityLog {
            user_id: admin.user_id,
            action: feature_action(featured).to_string(),
            target_type: Some(TARGET_CONTENT.to_string()),
            target_id: Some(id),
            details: Some(json!({ "contentOwnerId": content.user_id })),
        },
    )
    .await;

    tracing::info!(admin_id = admin.user_id, content_id = id, featured, "Content featured");

    Ok(Json(DataResponse { data: content }))
}

/// PUT /api/v1/admin/users/{id}/ban
///
/// Ban or unban a user. Admin accounts cannot be banned.
pub async fn ban_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<BanUserRequest>,
) -> AppResult<impl IntoResponse> {
    let ban = input
        .ban
        .ok_or_else(|| AppError::BadRequest("Ban status required".into()))?;

    let target = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    if target.role == ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot ban admin users".into(),
        )));
    }

    let user = UserRepo::set_banned(&state.pool, id, ban)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    record_activity(
        &state.pool,
        CreateAdminActivityLog {
            user_id: admin.user_id,
            action: ban_action(ban).to_string(),
            target_type: Some(TARGET_USER.to_string()),
            target_id: Some(id),
            details: Some(json!({
                "reason": input.reason.as_deref().unwrap_or(DEFAULT_REASON),
            })),
        },
    )
    .await;

    tracing::info!(admin_id = admin.user_id, target_user_id = id, ban, "User ban updated");

    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/admin/users/{id}/suspend
///
/// Suspend a user for `days` days (open-ended when omitted) or lift a
/// suspension. Admin accounts cannot be suspended.
pub async fn suspend_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<SuspendUserRequest>,
) -> AppResult<impl IntoResponse> {
    let suspend = input
        .suspend
        .ok_or_else(|| AppError::BadRequest("Suspend status required".into()))?;
    let until = if suspend {
        suspension_end(Utc::now(), input.days)?
    } else {
        None
    };

    let target = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    if target.role == ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot suspend admin users".into(),
        )));
    }

    let user = UserRepo::set_suspended(&state.pool, id, suspend, until)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    record_activity(
        &state.pool,
        CreateAdminActivityLog {
            user_id: admin.user_id,
            action: suspend_action(suspend).to_string(),
            target_type: Some(TARGET_USER.to_string()),
            target_id: Some(id),
            details: Some(json!({
                "username": target.username,
                "reason": input.reason.as_deref().unwrap_or(DEFAULT_REASON),
                "days": input.days.filter(|_| suspend),
                "suspendedUntil": until,
            })),
        },
    )
    .await;

    tracing::info!(
        admin_id = admin.user_id,
        target_user_id = id,
        suspend,
        suspended_until = ?until,
        "User suspension updated"
    );

    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/admin/users/{id}/role
pub async fn change_role(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ChangeRoleRequest>,
) -> AppResult<impl IntoResponse> {
    let role = input
        .role
        .ok_or_else(|| AppError::BadRequest("Role required".into()))?;
    validate_role(&role)?;

    let target = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    let user = UserRepo::set_role(&state.pool, id, &role)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    record_activity(
        &state.pool,
        CreateAdminActivityLog {
            user_id: admin.user_id,
            action: ACTION_USER_ROLE_CHANGED.to_string(),
            target_type: Some(TARGET_USER.to_string()),
            target_id: Some(id),
            details: Some(json!({
                "username": target.username,
                "previousRole": target.role,
                "newRole": role,
            })),
        },
    )
    .await;

    tracing::info!(
        admin_id = admin.user_id,
        target_user_id = id,
        role = %user.role,
        "User role changed"
    );

    Ok(Json(DataResponse { data: user }))
}

/// GET /api/v1/admin/users?search=&role=&status=&limit=&offset=
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<AdminUserParams>,
) -> AppResult<impl IntoResponse> {
    let standing = parse_standing_filter(params.status.as_deref())?;
    let filter = UserFilter {
        search: non_blank(params.search),
        role: parse_role_filter(params.role.as_deref())?,
        is_banned: standing.is_banned,
        is_suspended: standing.is_suspended,
    };
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);

    let items = UserRepo::list_filtered(&state.pool, &filter, limit, offset).await?;
    let total = UserRepo::count_filtered(&state.pool, &filter).await?;

    Ok(Json(DataResponse {
        data: PageResponse { items, total },
    }))
}

/// GET /api/v1/admin/logs?action=&targetType=&userId=&limit=&offset=
///
/// Activity log, newest first. `action` matches case-insensitively on a
/// substring.
pub async fn list_logs(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<AdminLogParams>,
) -> AppResult<impl IntoResponse> {
    let filter = AdminActivityLogFilter {
        action: non_blank(params.action),
        target_type: non_blank(params.target_type),
        user_id: params.user_id,
    };
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);

    let items = AdminActivityLogRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = AdminActivityLogRepo::count(&state.pool, &filter).await?;

    Ok(Json(DataResponse {
        data: PageResponse { items, total },
    }))
}
