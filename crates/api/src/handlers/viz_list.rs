//! Handlers for the caller's Viz.List of saved content and regions.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use viz_core::error::CoreError;
use viz_core::types::DbId;
use viz_db::models::content::ContentWithOwner;
use viz_db::models::viz_list::{AddToVizList, VizListEntry};
use viz_db::repositories::{ContentRepo, VizListRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::content::{ensure_region_exists, load_content};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

/// POST /api/v1/viz-list/add
///
/// Save content (optionally a single region of it). Saving the same
/// (content, region) pair twice returns the existing entry with 200
/// instead of 201.
pub async fn add_to_viz_list(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<AddToVizList>,
) -> AppResult<impl IntoResponse> {
    let content_id = input
        .content_id
        .ok_or_else(|| AppError::BadRequest("Content ID required".into()))?;

    let content = load_content(&state.pool, content_id).await?;
    ensure_region_exists(
        content_id,
        content.content.regions(),
        input.quotable_region_id,
    )?;

    let inserted = VizListRepo::insert_if_absent(
        &state.pool,
        auth.user_id,
        content_id,
        input.quotable_region_id,
    )
    .await?;

    let (status, item) = match inserted {
        Some(item) => {
            tracing::info!(
                user_id = auth.user_id,
                item_id = item.id,
                content_id,
                region_id = ?input.quotable_region_id,
                "Added to Viz.List"
            );
            (StatusCode::CREATED, item)
        }
        None => {
            let existing = VizListRepo::find_by_tuple(
                &state.pool,
                auth.user_id,
                content_id,
                input.quotable_region_id,
            )
            .await?
            .ok_or_else(|| {
                AppError::InternalError("Saved item vanished after conflicting insert".into())
            })?;
            (StatusCode::OK, existing)
        }
    };

    Ok((
        status,
        Json(DataResponse {
            data: VizListEntry { item, content },
        }),
    ))
}

/// DELETE /api/v1/viz-list/{id}
pub async fn remove_from_viz_list(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = VizListRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "VizListItem",
            id,
        }))?;

    if item.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not your Viz.List item".into(),
        )));
    }

    let deleted = VizListRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "VizListItem",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, item_id = id, "Removed from Viz.List");

    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/v1/viz-list
///
/// The caller's saved items, newest first, each with its content.
pub async fn list_viz_list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = VizListRepo::list_for_user(&state.pool, auth.user_id).await?;

    let mut ids: Vec<DbId> = items.iter().map(|i| i.content_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let contents: HashMap<DbId, ContentWithOwner> =
        ContentRepo::find_with_owner_by_ids(&state.pool, &ids)
            .await?
            .into_iter()
            .map(|row| (row.content.id, ContentWithOwner::from(row)))
            .collect();

    let entries: Vec<VizListEntry> = items
        .into_iter()
        .filter_map(|item| {
            let content = contents.get(&item.content_id)?.clone();
            Some(VizListEntry { item, content })
        })
        .collect();

    Ok(Json(DataResponse { data: entries }))
}
