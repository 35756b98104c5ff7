use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::approval;
use crate::state::AppState;

/// Approval request routes, nested under `/approval`.
///
/// ```text
/// POST   /request             request_approval
/// GET    /pending             list_pending
/// GET    /sent                list_sent
/// PUT    /{id}/approve        approve_request
/// PUT    /{id}/reject         reject_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/request", post(approval::request_approval))
        .route("/pending", get(approval::list_pending))
        .route("/sent", get(approval::list_sent))
        .route("/{id}/approve", put(approval::approve_request))
        .route("/{id}/reject", put(approval::reject_request))
}
