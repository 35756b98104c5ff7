//! Approval request rows and their request/response shapes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use viz_core::types::{DbId, RegionId, Timestamp};

use crate::models::content::Content;
use crate::models::user::UserSummary;

/// A row from the `approval_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub id: DbId,
    pub requester_id: DbId,
    pub creator_id: DbId,
    pub content_id: DbId,
    pub quotable_region_id: Option<RegionId>,
    pub status: String,
    pub resolved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An approval request joined with its requester's username.
#[derive(Debug, Clone, FromRow)]
pub struct ApprovalRequestRow {
    #[sqlx(flatten)]
    pub request: ApprovalRequest,
    pub requester_username: String,
}

/// An approval request with the requester identity and referenced content.
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalRequestDetail {
    #[serde(flatten)]
    pub request: ApprovalRequest,
    pub requester: UserSummary,
    pub content: Content,
}

impl ApprovalRequestDetail {
    pub fn new(row: ApprovalRequestRow, content: Content) -> Self {
        let requester = UserSummary {
            id: row.request.requester_id,
            username: row.requester_username,
        };
        Self {
            request: row.request,
            requester,
            content,
        }
    }
}

/// DTO for inserting a new approval request.
///
/// `creator_id` is always taken from the content's owner, never from the caller.
#[derive(Debug, Clone)]
pub struct CreateApprovalRequest {
    pub requester_id: DbId,
    pub creator_id: DbId,
    pub content_id: DbId,
    pub quotable_region_id: Option<RegionId>,
}

/// Request body for `POST /approval/request`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApprovalRequest {
    pub content_id: Option<DbId>,
    pub quotable_region_id: Option<RegionId>,
}
