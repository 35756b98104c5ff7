//! Viz.List (saved item) rows and their request/response shapes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use viz_core::types::{DbId, RegionId, Timestamp};

use crate::models::content::ContentWithOwner;

/// A row from the `viz_list_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VizListItem {
    pub id: DbId,
    pub user_id: DbId,
    pub content_id: DbId,
    pub quotable_region_id: Option<RegionId>,
    pub created_at: Timestamp,
}

/// A saved item with the full content it points at.
#[derive(Debug, Clone, Serialize)]
pub struct VizListEntry {
    #[serde(flatten)]
    pub item: VizListItem,
    pub content: ContentWithOwner,
}

/// Request body for `POST /viz-list/add`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToVizList {
    pub content_id: Option<DbId>,
    pub quotable_region_id: Option<RegionId>,
}
