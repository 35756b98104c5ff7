//! Handlers for multi-page editorials.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use viz_core::editorial::{validate_draft_change, validate_title};
use viz_core::error::CoreError;
use viz_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use viz_core::types::DbId;
use viz_db::models::editorial::{
    CreateEditorial, CreateEditorialRequest, Editorial, EditorialWithOwner, UpdateEditorial,
};
use viz_db::repositories::EditorialRepo;
use viz_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Editorial",
        id,
    })
}

/// Load an editorial and check that `auth` owns it.
async fn load_owned(pool: &DbPool, auth: &AuthUser, id: DbId) -> AppResult<Editorial> {
    let editorial = EditorialRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if editorial.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can modify this editorial".into(),
        )));
    }
    Ok(editorial)
}

/// POST /api/v1/editorial/create
///
/// `isDraft` defaults to `true`; a non-draft create is published at once.
pub async fn create_editorial(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEditorialRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(title), Some(pages)) = (input.title, input.pages) else {
        return Err(AppError::BadRequest("Missing required fields".into()));
    };
    let title = validate_title(&title)?;

    let create = CreateEditorial {
        user_id: auth.user_id,
        title,
        pages,
        is_draft: input.is_draft.unwrap_or(true),
    };
    let editorial = EditorialRepo::create(&state.pool, &create).await?;

    tracing::info!(
        user_id = auth.user_id,
        editorial_id = editorial.id,
        is_draft = editorial.is_draft,
        "Editorial created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: editorial })))
}

/// PUT /api/v1/editorial/{id}
///
/// Partial update by the author. A published editorial stays published.
pub async fn update_editorial(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(mut input): AppJson<UpdateEditorial>,
) -> AppResult<impl IntoResponse> {
    let existing = load_owned(&state.pool, &auth, id).await?;

    if let Some(title) = input.title.as_deref() {
        input.title = Some(validate_title(title)?);
    }
    validate_draft_change(!existing.is_draft, input.is_draft)?;

    let editorial = EditorialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        user_id = auth.user_id,
        editorial_id = id,
        is_draft = editorial.is_draft,
        "Editorial updated"
    );

    Ok(Json(DataResponse { data: editorial }))
}

/// POST /api/v1/editorial/{id}/publish
pub async fn publish_editorial(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    load_owned(&state.pool, &auth, id).await?;

    let editorial = EditorialRepo::publish(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(user_id = auth.user_id, editorial_id = id, "Editorial published");

    Ok(Json(DataResponse { data: editorial }))
}

/// GET /api/v1/editorial/{id}
pub async fn get_editorial(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let editorial = EditorialRepo::find_with_owner(&state.pool, id)
        .await?
        .map(EditorialWithOwner::from)
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: editorial }))
}

/// GET /api/v1/editorial/feed
///
/// Published editorials, most recently published first.
pub async fn editorial_feed(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);
    let rows = EditorialRepo::feed(&state.pool, limit, offset).await?;
    let items: Vec<EditorialWithOwner> = rows.into_iter().map(EditorialWithOwner::from).collect();
    Ok(Json(DataResponse { data: items }))
}
