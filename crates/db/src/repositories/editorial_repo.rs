//! Repository for the `editorials` table.

use sqlx::types::Json;
use sqlx::PgPool;
use viz_core::types::DbId;

use crate::models::editorial::{CreateEditorial, Editorial, EditorialOwnerRow, UpdateEditorial};

/// Column list for editorials queries.
const COLUMNS: &str = "id, user_id, title, pages, is_draft, published_at, created_at, updated_at";

/// Same columns qualified with the `e` alias, plus the owner's username.
const OWNER_COLUMNS: &str = "e.id, e.user_id, e.title, e.pages, e.is_draft, e.published_at, \
    e.created_at, e.updated_at, u.username AS owner_username";

/// Provides CRUD operations for editorials.
pub struct EditorialRepo;

impl EditorialRepo {
    /// Insert a new editorial. Non-draft inserts are stamped as published.
    pub async fn create(pool: &PgPool, input: &CreateEditorial) -> Result<Editorial, sqlx::Error> {
        let query = format!(
            "INSERT INTO editorials (user_id, title, pages, is_draft, published_at)
             VALUES ($1, $2, $3, $4, CASE WHEN $4 THEN NULL ELSE NOW() END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Editorial>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(Json(&input.pages))
            .bind(input.is_draft)
            .fetch_one(pool)
            .await
    }

    /// Find an editorial by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Editorial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM editorials WHERE id = $1");
        sqlx::query_as::<_, Editorial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an editorial by its ID, joined with the owner's username.
    pub async fn find_with_owner(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EditorialOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM editorials e
             JOIN users u ON u.id = e.user_id
             WHERE e.id = $1"
        );
        sqlx::query_as::<_, EditorialOwnerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an editorial. Only non-`None` fields in `input` are applied.
    ///
    /// Leaving draft mode stamps `published_at` if it was never set.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEditorial,
    ) -> Result<Option<Editorial>, sqlx::Error> {
        let query = format!(
            "UPDATE editorials SET
                title = COALESCE($2, title),
                pages = COALESCE($3, pages),
                is_draft = COALESCE($4, is_draft),
                published_at = CASE
                    WHEN $4 = FALSE AND published_at IS NULL THEN NOW()
                    ELSE published_at
                END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Editorial>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.pages.as_ref().map(Json))
            .bind(input.is_draft)
            .fetch_optional(pool)
            .await
    }

    /// Mark an editorial as published and (re)stamp `published_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<Option<Editorial>, sqlx::Error> {
        let query = format!(
            "UPDATE editorials SET is_draft = FALSE, published_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Editorial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Published editorials, most recently published first.
    pub async fn feed(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<EditorialOwnerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNER_COLUMNS}
             FROM editorials e
             JOIN users u ON u.id = e.user_id
             WHERE e.is_draft = FALSE AND e.published_at IS NOT NULL
             ORDER BY e.published_at DESC, e.id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, EditorialOwnerRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
