use axum::routing::{get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Moderation routes, nested under `/admin`. All require the `ADMIN` role.
///
/// ```text
/// GET    /content                 list_content
/// PUT    /content/{id}/approve    approve_content
/// PUT    /content/{id}/feature    feature_content
/// GET    /users                   list_users
/// PUT    /users/{id}/ban          ban_user
/// PUT    /users/{id}/suspend      suspend_user
/// PUT    /users/{id}/role         change_role
/// GET    /logs                    list_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/content", get(admin::list_content))
        .route("/content/{id}/approve", put(admin::approve_content))
        .route("/content/{id}/feature", put(admin::feature_content))
        .route("/users", get(admin::list_users))
        .route("/users/{id}/ban", put(admin::ban_user))
        .route("/users/{id}/suspend", put(admin::suspend_user))
        .route("/users/{id}/role", put(admin::change_role))
        .route("/logs", get(admin::list_logs))
}
