//! Handlers for content upload and quotable-region lookup.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use viz_core::content::{normalize_hashtags, validate_caption, validate_media_type};
use viz_core::error::CoreError;
use viz_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use viz_core::quotable_region::{build_regions, find_region, QuotableRegion};
use viz_core::types::{DbId, RegionId};
use viz_db::models::content::{
    ContentWithOwner, CreateContent, RegionLookupParams, UploadContentRequest,
};
use viz_db::models::user::UserSummary;
use viz_db::repositories::ContentRepo;
use viz_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load content with its owner, or 404.
pub(crate) async fn load_content(pool: &DbPool, content_id: DbId) -> AppResult<ContentWithOwner> {
    ContentRepo::find_with_owner(pool, content_id)
        .await?
        .map(ContentWithOwner::from)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id: content_id,
        }))
}

/// Ensure `region_id` (when given) names a region of the content item.
pub(crate) fn ensure_region_exists(
    content_id: DbId,
    regions: &[QuotableRegion],
    region_id: Option<RegionId>,
) -> AppResult<()> {
    match region_id {
        Some(region_id) if find_region(regions, region_id).is_none() => {
            Err(AppError::Core(CoreError::RegionNotFound {
                content_id,
                region_id,
            }))
        }
        _ => Ok(()),
    }
}

/// Validate an upload body and persist it. `require_regions` rejects bodies
/// without at least one region.
async fn create_content(
    state: &AppState,
    auth: &AuthUser,
    input: UploadContentRequest,
    require_regions: bool,
) -> AppResult<ContentWithOwner> {
    let media_type = input
        .media_type
        .ok_or_else(|| AppError::BadRequest("Media type required".into()))?;
    let media_url = input
        .media_url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Media URL required".into()))?;
    validate_media_type(&media_type)?;
    validate_caption(input.caption.as_deref())?;

    if require_regions && input.quotable_regions.is_empty() {
        return Err(AppError::BadRequest(
            "At least one quotable region required".into(),
        ));
    }
    let regions = build_regions(input.quotable_regions)?;

    let create = CreateContent {
        user_id: auth.user_id,
        media_type,
        media_url,
        caption: input.caption,
        hashtags: normalize_hashtags(&input.hashtags),
        quotable_regions: regions,
    };
    let content = ContentRepo::create(&state.pool, &create).await?;

    tracing::info!(
        user_id = auth.user_id,
        content_id = content.id,
        regions = content.regions().len(),
        "Content created"
    );

    Ok(ContentWithOwner {
        user: UserSummary {
            id: auth.user_id,
            username: auth.username.clone(),
        },
        content,
    })
}

/// POST /api/v1/content/upload
///
/// Publish a plain media item. Any regions in the body are validated and
/// stored as well.
pub async fn upload_content(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<UploadContentRequest>,
) -> AppResult<impl IntoResponse> {
    let content = create_content(&state, &auth, input, false).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: content })))
}

/// POST /api/v1/content/quotable-region
///
/// Publish a media item together with one or more drawn quotable regions.
pub async fn create_quotable_content(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<UploadContentRequest>,
) -> AppResult<impl IntoResponse> {
    let content = create_content(&state, &auth, input, true).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: content })))
}

/// GET /api/v1/content/quotable-region?contentId=
pub async fn list_regions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RegionLookupParams>,
) -> AppResult<impl IntoResponse> {
    let content_id = params
        .content_id
        .ok_or_else(|| AppError::BadRequest("Content ID required".into()))?;
    let content = load_content(&state.pool, content_id).await?;
    Ok(Json(DataResponse {
        data: content.content.quotable_regions.0,
    }))
}

/// GET /api/v1/content/{id}
pub async fn get_content(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let content = load_content(&state.pool, id).await?;
    Ok(Json(DataResponse { data: content }))
}

/// GET /api/v1/content/feed
///
/// Approved content, newest first.
pub async fn content_feed(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);
    let rows = ContentRepo::feed(&state.pool, limit, offset).await?;
    let items: Vec<ContentWithOwner> = rows.into_iter().map(ContentWithOwner::from).collect();
    Ok(Json(DataResponse { data: items }))
}
