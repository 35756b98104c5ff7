//! Editorial title rules and the draft/published transition.
//!
//! Pages are opaque canvas snapshots; the server only requires that the
//! array is present.

use crate::error::CoreError;

/// Longest accepted editorial title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Validate and trim an editorial title.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation(
            "Editorial title must not be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Editorial title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(title.to_string())
}

/// Check a requested `is_draft` change against the current state.
///
/// A published editorial cannot go back to being a draft.
pub fn validate_draft_change(is_published: bool, requested: Option<bool>) -> Result<(), CoreError> {
    if is_published && requested == Some(true) {
        return Err(CoreError::Validation(
            "A published editorial cannot be returned to draft".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(validate_title("  Summer issue ").unwrap(), "Summer issue");
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title(" \t").is_err());
    }

    #[test]
    fn test_overlong_title_rejected() {
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN)).is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn test_draft_changes() {
        assert!(validate_draft_change(false, Some(true)).is_ok());
        assert!(validate_draft_change(false, Some(false)).is_ok());
        assert!(validate_draft_change(true, Some(false)).is_ok());
        assert!(validate_draft_change(true, None).is_ok());
        assert!(validate_draft_change(true, Some(true)).is_err());
    }
}
