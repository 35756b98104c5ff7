//! Admin activity log rows.

use serde::Serialize;
use sqlx::FromRow;
use viz_core::types::{DbId, Timestamp};

/// A row from the `admin_activity_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminActivityLog {
    pub id: DbId,
    pub user_id: DbId,
    pub action: String,
    pub target_type: Option<String>,
    pub target_id: Option<DbId>,
    pub details: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for recording a moderation action.
#[derive(Debug, Clone)]
pub struct CreateAdminActivityLog {
    pub user_id: DbId,
    pub action: String,
    pub target_type: Option<String>,
    pub target_id: Option<DbId>,
    pub details: Option<serde_json::Value>,
}

/// Filters for the activity log listing.
#[derive(Debug, Clone, Default)]
pub struct AdminActivityLogFilter {
    /// Case-insensitive substring of the action name.
    pub action: Option<String>,
    pub target_type: Option<String>,
    /// Acting admin.
    pub user_id: Option<DbId>,
}
