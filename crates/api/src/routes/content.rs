use axum::routing::{get, post};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content routes, nested under `/content`.
///
/// ```text
/// POST   /upload              upload_content
/// POST   /quotable-region     create_quotable_content
/// GET    /quotable-region     list_regions (?contentId=)
/// GET    /feed                content_feed
/// GET    /{id}                get_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(content::upload_content))
        .route(
            "/quotable-region",
            post(content::create_quotable_content).get(content::list_regions),
        )
        .route("/feed", get(content::content_feed))
        .route("/{id}", get(content::get_content))
}
