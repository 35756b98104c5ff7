//! Repository for the `viz_list_items` table.

use sqlx::PgPool;
use viz_core::types::{DbId, RegionId};

use crate::models::viz_list::VizListItem;

/// Column list for viz_list_items queries.
const COLUMNS: &str = "id, user_id, content_id, quotable_region_id, created_at";

/// Provides CRUD operations for saved items.
pub struct VizListRepo;

impl VizListRepo {
    /// Insert a saved item unless the exact (user, content, region) tuple is
    /// already stored.
    ///
    /// Returns `None` when the tuple already exists; the caller then reads
    /// the existing row with [`VizListRepo::find_by_tuple`].
    pub async fn insert_if_absent(
        pool: &PgPool,
        user_id: DbId,
        content_id: DbId,
        quotable_region_id: Option<RegionId>,
    ) -> Result<Option<VizListItem>, sqlx::Error> {
        let query = format!(
            "INSERT INTO viz_list_items (user_id, content_id, quotable_region_id)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_viz_list_items_user_content_region DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VizListItem>(&query)
            .bind(user_id)
            .bind(content_id)
            .bind(quotable_region_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the saved item for an exact (user, content, region) tuple.
    pub async fn find_by_tuple(
        pool: &PgPool,
        user_id: DbId,
        content_id: DbId,
        quotable_region_id: Option<RegionId>,
    ) -> Result<Option<VizListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM viz_list_items
             WHERE user_id = $1
               AND content_id = $2
               AND quotable_region_id IS NOT DISTINCT FROM $3"
        );
        sqlx::query_as::<_, VizListItem>(&query)
            .bind(user_id)
            .bind(content_id)
            .bind(quotable_region_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a saved item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VizListItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM viz_list_items WHERE id = $1");
        sqlx::query_as::<_, VizListItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a saved item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM viz_list_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All saved items owned by `user_id`, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<VizListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM viz_list_items
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, VizListItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
