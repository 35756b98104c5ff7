//! Shared query parameter types for API handlers.

use serde::Deserialize;
use viz_core::types::DbId;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the handlers via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for the admin content listing.
#[derive(Debug, Default, Deserialize)]
pub struct AdminContentParams {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub status: Option<String>,
    pub featured: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for the admin user listing.
#[derive(Debug, Default, Deserialize)]
pub struct AdminUserParams {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for the activity log listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLogParams {
    pub action: Option<String>,
    pub target_type: Option<String>,
    pub user_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
