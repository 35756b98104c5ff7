//! Repository for the `approval_requests` table.
//!
//! At most one `PENDING` request may exist per (requester, content, region);
//! the `uq_approval_requests_pending` partial index backs the handler's
//! pre-insert check.

use sqlx::PgPool;
use viz_core::approval::STATUS_PENDING;
use viz_core::types::{DbId, RegionId};

use crate::models::approval_request::{
    ApprovalRequest, ApprovalRequestRow, CreateApprovalRequest,
};

/// Name of the partial unique index guarding pending duplicates.
pub const PENDING_UNIQUE_INDEX: &str = "uq_approval_requests_pending";

/// Column list for approval_requests queries.
const COLUMNS: &str = "id, requester_id, creator_id, content_id, quotable_region_id, \
    status, resolved_at, created_at, updated_at";

/// Same columns qualified with the `ar` alias, plus the requester's username.
const REQUESTER_COLUMNS: &str = "ar.id, ar.requester_id, ar.creator_id, ar.content_id, \
    ar.quotable_region_id, ar.status, ar.resolved_at, ar.created_at, ar.updated_at, \
    u.username AS requester_username";

/// Provides CRUD operations for approval requests.
pub struct ApprovalRequestRepo;

impl ApprovalRequestRepo {
    /// Insert a new `PENDING` request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApprovalRequest,
    ) -> Result<ApprovalRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO approval_requests
                (requester_id, creator_id, content_id, quotable_region_id, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApprovalRequest>(&query)
            .bind(input.requester_id)
            .bind(input.creator_id)
            .bind(input.content_id)
            .bind(input.quotable_region_id)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Find a request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ApprovalRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM approval_requests WHERE id = $1");
        sqlx::query_as::<_, ApprovalRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the pending request for an exact (requester, content, region)
    /// tuple. A `None` region only matches requests without a region.
    pub async fn find_pending(
        pool: &PgPool,
        requester_id: DbId,
        content_id: DbId,
        quotable_region_id: Option<RegionId>,
    ) -> Result<Option<ApprovalRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM approval_requests
             WHERE requester_id = $1
               AND content_id = $2
               AND quotable_region_id IS NOT DISTINCT FROM $3
               AND status = $4
             LIMIT 1"
        );
        sqlx::query_as::<_, ApprovalRequest>(&query)
            .bind(requester_id)
            .bind(content_id)
            .bind(quotable_region_id)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }

    /// Move a `PENDING` request to `status` and stamp `resolved_at`.
    ///
    /// Returns `None` when the request does not exist or is no longer
    /// pending, so two concurrent resolutions cannot both succeed.
    pub async fn resolve(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<ApprovalRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE approval_requests SET status = $2, resolved_at = NOW()
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApprovalRequest>(&query)
            .bind(id)
            .bind(status)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }

    /// Pending requests addressed to `creator_id`, newest first.
    pub async fn list_pending_for_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<Vec<ApprovalRequestRow>, sqlx::Error> {
        let query = format!(
            "SELECT {REQUESTER_COLUMNS}
             FROM approval_requests ar
             JOIN users u ON u.id = ar.requester_id
             WHERE ar.creator_id = $1 AND ar.status = $2
             ORDER BY ar.created_at DESC, ar.id DESC"
        );
        sqlx::query_as::<_, ApprovalRequestRow>(&query)
            .bind(creator_id)
            .bind(STATUS_PENDING)
            .fetch_all(pool)
            .await
    }

    /// Every request submitted by `requester_id`, any status, newest first.
    pub async fn list_for_requester(
        pool: &PgPool,
        requester_id: DbId,
    ) -> Result<Vec<ApprovalRequestRow>, sqlx::Error> {
        let query = format!(
            "SELECT {REQUESTER_COLUMNS}
             FROM approval_requests ar
             JOIN users u ON u.id = ar.requester_id
             WHERE ar.requester_id = $1
             ORDER BY ar.created_at DESC, ar.id DESC"
        );
        sqlx::query_as::<_, ApprovalRequestRow>(&query)
            .bind(requester_id)
            .fetch_all(pool)
            .await
    }
}
