//! Handlers for quotable-region approval requests.
//!
//! A requester asks a content creator for permission to reuse a region;
//! the creator approves or rejects it exactly once.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use viz_core::approval::{validate_transition, STATUS_APPROVED, STATUS_REJECTED};
use viz_core::error::CoreError;
use viz_core::types::DbId;
use viz_db::models::approval_request::{
    ApprovalRequestDetail, ApprovalRequestRow, CreateApprovalRequest, SubmitApprovalRequest,
};
use viz_db::repositories::{ApprovalRequestRepo, ContentRepo};
use viz_db::DbPool;

use crate::error::{AppError, AppResult, DUPLICATE_REQUEST_MESSAGE};
use crate::extract::{AppJson, AppPath};
use crate::handlers::content::{ensure_region_exists, load_content};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/approval/request
///
/// Ask the content's creator for permission to reuse it (or one region of
/// it). Only one pending request may exist per (requester, content, region).
pub async fn request_approval(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<SubmitApprovalRequest>,
) -> AppResult<impl IntoResponse> {
    let content_id = input
        .content_id
        .ok_or_else(|| AppError::BadRequest("Content ID required".into()))?;

    let content = load_content(&state.pool, content_id).await?.content;
    ensure_region_exists(content_id, content.regions(), input.quotable_region_id)?;

    if ApprovalRequestRepo::find_pending(
        &state.pool,
        auth.user_id,
        content_id,
        input.quotable_region_id,
    )
    .await?
    .is_some()
    {
        return Err(AppError::BadRequest(DUPLICATE_REQUEST_MESSAGE.into()));
    }

    let create = CreateApprovalRequest {
        requester_id: auth.user_id,
        creator_id: content.user_id,
        content_id,
        quotable_region_id: input.quotable_region_id,
    };
    let request = ApprovalRequestRepo::create(&state.pool, &create).await?;

    tracing::info!(
        request_id = request.id,
        requester_id = auth.user_id,
        creator_id = content.user_id,
        content_id,
        region_id = ?input.quotable_region_id,
        "Approval requested"
    );

    let detail = ApprovalRequestDetail::new(
        ApprovalRequestRow {
            request,
            requester_username: auth.username,
        },
        content,
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/approval/pending
///
/// Pending requests addressed to the caller, newest first.
pub async fn list_pending(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = ApprovalRequestRepo::list_pending_for_creator(&state.pool, auth.user_id).await?;
    let data = attach_content(&state.pool, rows).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/approval/sent
///
/// Every request the caller has submitted, any status, newest first.
pub async fn list_sent(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = ApprovalRequestRepo::list_for_requester(&state.pool, auth.user_id).await?;
    let data = attach_content(&state.pool, rows).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/approval/{id}/approve
pub async fn approve_request(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    resolve_request(&state, &auth, id, STATUS_APPROVED).await
}

/// PUT /api/v1/approval/{id}/reject
pub async fn reject_request(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    resolve_request(&state, &auth, id, STATUS_REJECTED).await
}

/// Shared approve/reject flow. Only the addressed creator may resolve, and
/// only while the request is still pending.
async fn resolve_request(
    state: &AppState,
    auth: &AuthUser,
    id: DbId,
    status: &str,
) -> AppResult<impl IntoResponse> {
    let existing = ApprovalRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ApprovalRequest",
            id,
        }))?;

    if existing.creator_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the content creator can resolve this request".into(),
        )));
    }
    validate_transition(&existing.status, status)?;

    // Lost a race with a concurrent resolution.
    let updated = ApprovalRequestRepo::resolve(&state.pool, id, status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict("Request is no longer pending".into()))
        })?;

    tracing::info!(
        request_id = id,
        creator_id = auth.user_id,
        status = %updated.status,
        "Approval request resolved"
    );

    Ok(Json(DataResponse { data: updated }))
}

/// Join each request row with the content it references.
///
/// Rows whose content disappeared between the two queries are dropped.
async fn attach_content(
    pool: &DbPool,
    rows: Vec<ApprovalRequestRow>,
) -> AppResult<Vec<ApprovalRequestDetail>> {
    let mut ids: Vec<DbId> = rows.iter().map(|r| r.request.content_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let contents: HashMap<DbId, _> = ContentRepo::find_by_ids(pool, &ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let content = contents.get(&row.request.content_id)?.clone();
            Some(ApprovalRequestDetail::new(row, content))
        })
        .collect())
}
