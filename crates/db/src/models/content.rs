//! Content rows and their request/response shapes.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use viz_core::quotable_region::{NewQuotableRegion, QuotableRegion};
use viz_core::types::{DbId, Timestamp};

use crate::models::user::UserSummary;

/// A row from the `contents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: DbId,
    pub user_id: DbId,
    pub media_type: String,
    pub media_url: String,
    pub caption: Option<String>,
    pub hashtags: Vec<String>,
    pub quotable_regions: Json<Vec<QuotableRegion>>,
    pub is_approved: bool,
    pub is_featured: bool,
    pub featured_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Content {
    pub fn regions(&self) -> &[QuotableRegion] {
        &self.quotable_regions.0
    }
}

/// A content row joined with its owner's username.
#[derive(Debug, Clone, FromRow)]
pub struct ContentOwnerRow {
    #[sqlx(flatten)]
    pub content: Content,
    pub owner_username: String,
}

/// Content together with the owner's public identity.
#[derive(Debug, Clone, Serialize)]
pub struct ContentWithOwner {
    #[serde(flatten)]
    pub content: Content,
    pub user: UserSummary,
}

impl From<ContentOwnerRow> for ContentWithOwner {
    fn from(row: ContentOwnerRow) -> Self {
        let user = UserSummary {
            id: row.content.user_id,
            username: row.owner_username,
        };
        Self {
            content: row.content,
            user,
        }
    }
}

/// Validated insert for a new content row.
#[derive(Debug, Clone)]
pub struct CreateContent {
    pub user_id: DbId,
    pub media_type: String,
    pub media_url: String,
    pub caption: Option<String>,
    pub hashtags: Vec<String>,
    pub quotable_regions: Vec<QuotableRegion>,
}

/// Request body for `POST /content/upload` and `POST /content/quotable-region`.
///
/// Fields are optional so that missing values produce a 400 from the
/// handler rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadContentRequest {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub caption: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub quotable_regions: Vec<NewQuotableRegion>,
}

/// Query params for `GET /content/quotable-region`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionLookupParams {
    pub content_id: Option<DbId>,
}

/// Filters for the admin content listing.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub media_type: Option<String>,
    pub is_approved: Option<bool>,
    pub is_featured: Option<bool>,
}
