//! Role names stored in `users.role`.
//!
//! These must match the CHECK constraint in `20260301000001_create_users.sql`.

use crate::error::CoreError;

pub const ROLE_USER: &str = "USER";
pub const ROLE_MODERATOR: &str = "MODERATOR";
pub const ROLE_ADMIN: &str = "ADMIN";

/// All valid role values.
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_MODERATOR, ROLE_ADMIN];

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

/// Parse the admin `role` filter (`ALL` or a role name).
pub fn parse_role_filter(value: Option<&str>) -> Result<Option<String>, CoreError> {
    match value.unwrap_or("ALL") {
        "ALL" => Ok(None),
        other => {
            validate_role(other)?;
            Ok(Some(other.to_string()))
        }
    }
}
