//! Editorial rows and their request/response shapes.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use viz_core::types::{DbId, Timestamp};

use crate::models::user::UserSummary;

/// A row from the `editorials` table.
///
/// Each page is an opaque canvas snapshot produced by the composer.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Editorial {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub pages: Json<Vec<serde_json::Value>>,
    pub is_draft: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An editorial joined with its owner's username.
#[derive(Debug, Clone, FromRow)]
pub struct EditorialOwnerRow {
    #[sqlx(flatten)]
    pub editorial: Editorial,
    pub owner_username: String,
}

/// An editorial with the owner's public identity.
#[derive(Debug, Clone, Serialize)]
pub struct EditorialWithOwner {
    #[serde(flatten)]
    pub editorial: Editorial,
    pub user: UserSummary,
}

impl From<EditorialOwnerRow> for EditorialWithOwner {
    fn from(row: EditorialOwnerRow) -> Self {
        let user = UserSummary {
            id: row.editorial.user_id,
            username: row.owner_username,
        };
        Self {
            editorial: row.editorial,
            user,
        }
    }
}

/// Request body for `POST /editorial/create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEditorialRequest {
    pub title: Option<String>,
    pub pages: Option<Vec<serde_json::Value>>,
    pub is_draft: Option<bool>,
}

/// Request body for `PUT /editorial/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEditorial {
    pub title: Option<String>,
    pub pages: Option<Vec<serde_json::Value>>,
    pub is_draft: Option<bool>,
}

/// Validated insert for a new editorial.
#[derive(Debug, Clone)]
pub struct CreateEditorial {
    pub user_id: DbId,
    pub title: String,
    pub pages: Vec<serde_json::Value>,
    pub is_draft: bool,
}
