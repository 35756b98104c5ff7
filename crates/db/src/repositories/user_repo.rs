//! Repository for the `users` table.

use sqlx::PgPool;
use viz_core::types::{DbId, Timestamp};

use crate::models::user::{CreateUser, User, UserFilter, UserListRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, role, is_suspended, suspended_until, is_banned, \
    created_at, updated_at";

/// Same columns qualified with the `u` alias.
const ALIASED_COLUMNS: &str = "u.id, u.username, u.email, u.role, u.is_suspended, \
    u.suspended_until, u.is_banned, u.created_at, u.updated_at";

/// Shared WHERE clause for the admin listing. `$1` search, `$2` role,
/// `$3` banned, `$4` suspended.
const FILTER_CLAUSE: &str = "($1::TEXT IS NULL
        OR u.username ILIKE '%' || $1 || '%'
        OR u.email ILIKE '%' || $1 || '%')
    AND ($2::TEXT IS NULL OR u.role = $2)
    AND ($3::BOOL IS NULL OR u.is_banned = $3)
    AND ($4::BOOL IS NULL OR u.is_suspended = $4)";

/// Account reads, provisioning inserts and moderation updates.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Admin listing, newest accounts first, with content and editorial
    /// counts.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &UserFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UserListRow>, sqlx::Error> {
        let query = format!(
            "SELECT {ALIASED_COLUMNS},
                (SELECT COUNT(*) FROM contents c WHERE c.user_id = u.id) AS content_count,
                (SELECT COUNT(*) FROM editorials e WHERE e.user_id = u.id) AS editorial_count
             FROM users u
             WHERE {FILTER_CLAUSE}
             ORDER BY u.created_at DESC, u.id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, UserListRow>(&query)
            .bind(&filter.search)
            .bind(&filter.role)
            .bind(filter.is_banned)
            .bind(filter.is_suspended)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count users matching the admin listing filters.
    pub async fn count_filtered(pool: &PgPool, filter: &UserFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM users u WHERE {FILTER_CLAUSE}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.search)
            .bind(&filter.role)
            .bind(filter.is_banned)
            .bind(filter.is_suspended)
            .fetch_one(pool)
            .await
    }

    /// Ban or unban an account. Banning also clears any suspension.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_banned(
        pool: &PgPool,
        id: DbId,
        is_banned: bool,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET is_banned = $2, is_suspended = FALSE, suspended_until = NULL
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(is_banned)
            .fetch_optional(pool)
            .await
    }

    /// Suspend an account until `until` (open-ended when `None`), or lift a
    /// suspension. Lifting always clears `suspended_until`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_suspended(
        pool: &PgPool,
        id: DbId,
        is_suspended: bool,
        until: Option<Timestamp>,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                is_suspended = $2,
                suspended_until = CASE WHEN $2 THEN $3::TIMESTAMPTZ ELSE NULL END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(is_suspended)
            .bind(until)
            .fetch_optional(pool)
            .await
    }

    /// Lift a timed suspension whose end has passed.
    ///
    /// Returns `None` while the suspension is still running or open-ended.
    /// An account that a concurrent request already lifted is returned as is.
    pub async fn lift_expired_suspension(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET is_suspended = FALSE, suspended_until = NULL
             WHERE id = $1 AND (NOT is_suspended OR suspended_until <= NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Change an account's role.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_role(
        pool: &PgPool,
        id: DbId,
        role: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET role = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(role)
            .fetch_optional(pool)
            .await
    }
}
