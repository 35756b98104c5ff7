use axum::routing::{get, post};
use axum::Router;

use crate::handlers::editorial;
use crate::state::AppState;

/// Editorial routes, nested under `/editorial`.
///
/// ```text
/// POST   /create              create_editorial
/// GET    /feed                editorial_feed
/// GET    /{id}                get_editorial
/// PUT    /{id}                update_editorial
/// POST   /{id}/publish        publish_editorial
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(editorial::create_editorial))
        .route("/feed", get(editorial::editorial_feed))
        .route(
            "/{id}",
            get(editorial::get_editorial).put(editorial::update_editorial),
        )
        .route("/{id}/publish", post(editorial::publish_editorial))
}
