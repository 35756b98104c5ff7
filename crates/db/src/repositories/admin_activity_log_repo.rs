//! Repository for the `admin_activity_logs` table.

use sqlx::PgPool;

use crate::models::admin_activity_log::{
    AdminActivityLog, AdminActivityLogFilter, CreateAdminActivityLog,
};

/// Column list for admin_activity_logs queries.
const COLUMNS: &str = "id, user_id, action, target_type, target_id, details, created_at";

/// `$1` action substring, `$2` target type, `$3` acting admin.
const FILTER_CLAUSE: &str = "($1::TEXT IS NULL OR action ILIKE '%' || $1 || '%')
    AND ($2::TEXT IS NULL OR target_type = $2)
    AND ($3::BIGINT IS NULL OR user_id = $3)";

/// Append-only access to the moderation trail.
pub struct AdminActivityLogRepo;

impl AdminActivityLogRepo {
    /// Record a moderation action, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdminActivityLog,
    ) -> Result<AdminActivityLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_activity_logs (user_id, action, target_type, target_id, details)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminActivityLog>(&query)
            .bind(input.user_id)
            .bind(&input.action)
            .bind(&input.target_type)
            .bind(input.target_id)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    /// Newest entries first, optionally filtered.
    pub async fn list(
        pool: &PgPool,
        filter: &AdminActivityLogFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AdminActivityLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_activity_logs
             WHERE {FILTER_CLAUSE}
             ORDER BY created_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, AdminActivityLog>(&query)
            .bind(&filter.action)
            .bind(&filter.target_type)
            .bind(filter.user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count entries matching the filters.
    pub async fn count(
        pool: &PgPool,
        filter: &AdminActivityLogFilter,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM admin_activity_logs WHERE {FILTER_CLAUSE}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.action)
            .bind(&filter.target_type)
            .bind(filter.user_id)
            .fetch_one(pool)
            .await
    }
}
