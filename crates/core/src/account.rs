//! Account standing: suspension windows and the admin status filter.
//!
//! A suspension either runs until `suspended_until` or, when that is
//! `NULL`, until an admin lifts it. Expired suspensions are lifted lazily
//! the next time the account authenticates.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Longest timed suspension, in days.
pub const MAX_SUSPENSION_DAYS: i64 = 3_650;

/// Compute when a suspension starting at `now` ends.
///
/// `None` days means an open-ended suspension.
pub fn suspension_end(now: Timestamp, days: Option<i64>) -> Result<Option<Timestamp>, CoreError> {
    match days {
        None => Ok(None),
        Some(d) if (1..=MAX_SUSPENSION_DAYS).contains(&d) => Ok(Some(now + Duration::days(d))),
        Some(d) => Err(CoreError::Validation(format!(
            "Suspension days must be between 1 and {MAX_SUSPENSION_DAYS}, got {d}"
        ))),
    }
}

/// Whether a timed suspension has run out at `now`. Open-ended
/// suspensions never expire on their own.
pub fn suspension_expired(suspended_until: Option<Timestamp>, now: Timestamp) -> bool {
    matches!(suspended_until, Some(until) if until <= now)
}

/// Predicate on `users.is_banned` / `users.is_suspended` for the admin
/// user listing. `None` fields are not filtered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandingFilter {
    pub is_banned: Option<bool>,
    pub is_suspended: Option<bool>,
}

/// Parse the admin `status` filter (`ALL`, `ACTIVE`, `BANNED`, `SUSPENDED`).
pub fn parse_standing_filter(value: Option<&str>) -> Result<StandingFilter, CoreError> {
    match value.unwrap_or("ALL") {
        "ALL" => Ok(StandingFilter::default()),
        "ACTIVE" => Ok(StandingFilter {
            is_banned: Some(false),
            is_suspended: Some(false),
        }),
        "BANNED" => Ok(StandingFilter {
            is_banned: Some(true),
            is_suspended: None,
        }),
        "SUSPENDED" => Ok(StandingFilter {
            is_banned: None,
            is_suspended: Some(true),
        }),
        other => Err(CoreError::Validation(format!(
            "Invalid status filter '{other}'. Must be one of: ALL, ACTIVE, BANNED, SUSPENDED"
        ))),
    }
}
