//! User rows. Accounts are provisioned by the external session service.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use viz_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_suspended: bool,
    pub suspended_until: Option<Timestamp>,
    pub is_banned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public identity embedded in other responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub username: String,
}

/// DTO for inserting a user (used by provisioning and tests).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub role: String,
}

/// A user row with activity counts, for the admin user listing.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListRow {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub user: User,
    pub content_count: i64,
    pub editorial_count: i64,
}

/// Filters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Case-insensitive substring of username or email.
    pub search: Option<String>,
    pub role: Option<String>,
    pub is_banned: Option<bool>,
    pub is_suspended: Option<bool>,
}
