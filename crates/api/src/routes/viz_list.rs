use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::viz_list;
use crate::state::AppState;

/// Viz.List routes, nested under `/viz-list`.
///
/// ```text
/// GET    /                    list_viz_list
/// POST   /add                 add_to_viz_list
/// DELETE /{id}                remove_from_viz_list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(viz_list::list_viz_list))
        .route("/add", post(viz_list::add_to_viz_list))
        .route("/{id}", delete(viz_list::remove_from_viz_list))
}
