//! Repository for the `contents` table.
//!
//! Quotable regions live in the `quotable_regions` JSONB column and are
//! written once, on insert.

use sqlx::types::Json;
use sqlx::PgPool;
use viz_core::types::DbId;

use crate::models::content::{Content, ContentFilter, ContentOwnerRow, CreateContent};

/// Column list for contents queries.
const COLUMNS: &str = "id, user_id, media_type, media_url, caption, hashtags, \
    quotable_regions, is_approved, is_featured, featured_at, created_at, updated_at";

/// Same columns qualified with the `c` alias, plus the owner's username.
const OWNER_COLUMNS: &str = "c.id, c.user_id, c.media_type, c.media_url, c.caption, \
    c.hashtags, c.quotable_regions, c.is_approved, c.is_featured, c.featured_at, \
    c.created_at, c.updated_at, u.username AS owner_username";

/// Provides CRUD operations for content.
pub struct ContentRepo;

impl ContentRepo {
    /// Insert a new content row with its regions, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContent) -> Result<Content, sqlx::Error> {
        let query = format!(
            "INSERT INTO contents
                (user_id, media_type, media_url, caption, hashtags, quotable_regions)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(input.user_id)
            .bind(&input.media_type)
            .bind(&input.media_url)
            .bind(&input.caption)
            .bind(&input.hashtags)
            .bind(Json(&input.quotable_regions))
            .fetch_one(pool)
            .await
    }

    /// Find a content row by its ID, joined with the owner's username.
    pub async fn find_with_owner(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContentOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM contents c
             JOIN users u ON u.id = c.user_id
             WHERE c.id = $1"
        );
        sqlx::query_as::<_, ContentOwnerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch several content rows at once. Order is unspecified.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Content>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents WHERE id = ANY($1)");
        sqlx::query_as::<_, Content>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Fetch several content rows with owners at once. Order is unspecified.
    pub async fn find_with_owner_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<ContentOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM contents c
             JOIN users u ON u.id = c.user_id
             WHERE c.id = ANY($1)"
        );
        sqlx::query_as::<_, ContentOwnerRow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Public feed: approved content, newest first.
    pub async fn feed(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContentOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM contents c
             JOIN users u ON u.id = c.user_id
             WHERE c.is_approved = TRUE
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ContentOwnerRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Moderation listing with optional type / approval / featured filters.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &ContentFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContentOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM contents c
             JOIN users u ON u.id = c.user_id
             WHERE ($1::TEXT IS NULL OR c.media_type = $1)
               AND ($2::BOOL IS NULL OR c.is_approved = $2)
               AND ($3::BOOL IS NULL OR c.is_featured = $3)
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, ContentOwnerRow>(&query)
            .bind(&filter.media_type)
            .bind(filter.is_approved)
            .bind(filter.is_featured)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count rows matching the moderation filters.
    pub async fn count_filtered(pool: &PgPool, filter: &ContentFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM contents
             WHERE ($1::TEXT IS NULL OR media_type = $1)
               AND ($2::BOOL IS NULL OR is_approved = $2)
               AND ($3::BOOL IS NULL OR is_featured = $3)",
        )
        .bind(&filter.media_type)
        .bind(filter.is_approved)
        .bind(filter.is_featured)
        .fetch_one(pool)
        .await
    }

    /// Set the moderation approval flag.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_approved(
        pool: &PgPool,
        id: DbId,
        is_approved: bool,
    ) -> Result<Option<Content>, sqlx::Error> {
        let query = format!(
            "UPDATE contents SET is_approved = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .bind(is_approved)
            .fetch_optional(pool)
            .await
    }

    /// Feature or unfeature content. `featured_at` is stamped on feature and
    /// cleared on unfeature.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_featured(
        pool: &PgPool,
        id: DbId,
        is_featured: bool,
    ) -> Result<Option<Content>, sqlx::Error> {
        let query = format!(
            "UPDATE contents SET
                is_featured = $2,
                featured_at = CASE WHEN $2 THEN NOW() ELSE NULL END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .bind(is_featured)
            .fetch_optional(pool)
            .await
    }
}
