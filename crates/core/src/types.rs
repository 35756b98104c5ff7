/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Quotable regions are embedded in their content row and keyed by UUID.
pub type RegionId = uuid::Uuid;
