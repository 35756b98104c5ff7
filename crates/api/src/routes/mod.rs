pub mod admin;
pub mod approval;
pub mod content;
pub mod editorial;
pub mod health;
pub mod viz_list;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content/upload                      upload plain media (POST)
/// /content/quotable-region             create with regions (POST), list regions (GET)
/// /content/feed                        approved content (public)
/// /content/{id}                        get content (public)
///
/// /approval/request                    submit a request (POST)
/// /approval/pending                    requests addressed to me
/// /approval/sent                       requests I submitted
/// /approval/{id}/approve               approve (PUT, creator only)
/// /approval/{id}/reject                reject (PUT, creator only)
///
/// /viz-list                            my saved items
/// /viz-list/add                        save content or a region (POST)
/// /viz-list/{id}                       remove (DELETE, owner only)
///
/// /editorial/create                    create (POST)
/// /editorial/feed                      published editorials (public)
/// /editorial/{id}                      get (public), update (PUT, author only)
/// /editorial/{id}/publish              publish (POST, author only)
///
/// /admin/content                       moderation listing (admin only)
/// /admin/content/{id}/approve          approve / reject (PUT)
/// /admin/content/{id}/feature          feature / unfeature (PUT)
/// /admin/users                         user listing
/// /admin/users/{id}/ban                ban / unban (PUT)
/// /admin/users/{id}/suspend            suspend / lift (PUT)
/// /admin/users/{id}/role               change role (PUT)
/// /admin/logs                          activity log
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/content", content::router())
        .nest("/approval", approval::router())
        .nest("/viz-list", viz_list::router())
        .nest("/editorial", editorial::router())
        .nest("/admin", admin::router())
}
