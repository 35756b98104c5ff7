//! Approval request statuses and the transition rule between them.
//!
//! A request is created `PENDING` and may move exactly once, to either
//! `APPROVED` or `REJECTED`. Resolved requests never change again.

use crate::error::CoreError;

/// Awaiting a decision from the content's creator.
pub const STATUS_PENDING: &str = "PENDING";

/// The creator allowed the requester to reuse the region.
pub const STATUS_APPROVED: &str = "APPROVED";

/// The creator declined the request.
pub const STATUS_REJECTED: &str = "REJECTED";

/// Check that a request currently in `from` may move to `to`.
///
/// Returns `Conflict` when the request was already resolved and
/// `Validation` when `to` is not a terminal status.
pub fn validate_transition(from: &str, to: &str) -> Result<(), CoreError> {
    if to != STATUS_APPROVED && to != STATUS_REJECTED {
        return Err(CoreError::Validation(format!(
            "Cannot transition an approval request to '{to}'"
        )));
    }
    if from != STATUS_PENDING {
        return Err(CoreError::Conflict(format!("Request is already {from}")));
    }
    Ok(())
}
