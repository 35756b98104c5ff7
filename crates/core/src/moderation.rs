//! Admin activity log vocabulary.

pub const ACTION_CONTENT_APPROVED: &str = "CONTENT_APPROVED";
pub const ACTION_CONTENT_REJECTED: &str = "CONTENT_REJECTED";
pub const ACTION_CONTENT_FEATURED: &str = "CONTENT_FEATURED";
pub const ACTION_CONTENT_UNFEATURED: &str = "CONTENT_UNFEATURED";
pub const ACTION_USER_BANNED: &str = "USER_BANNED";
pub const ACTION_USER_UNBANNED: &str = "USER_UNBANNED";
pub const ACTION_USER_SUSPENDED: &str = "USER_SUSPENDED";
pub const ACTION_USER_UNSUSPENDED: &str = "USER_UNSUSPENDED";
pub const ACTION_USER_ROLE_CHANGED: &str = "USER_ROLE_CHANGED";

pub const TARGET_CONTENT: &str = "CONTENT";
pub const TARGET_USER: &str = "USER";

/// Reason recorded when a moderator does not give one.
pub const DEFAULT_REASON: &str = "No reason provided";

/// Pick the log action for an approval toggle.
pub fn approval_action(approved: bool) -> &'static str {
    if approved {
        ACTION_CONTENT_APPROVED
    } else {
        ACTION_CONTENT_REJECTED
    }
}

/// Pick the log action for a feature toggle.
pub fn feature_action(featured: bool) -> &'static str {
    if featured {
        ACTION_CONTENT_FEATURED
    } else {
        ACTION_CONTENT_UNFEATURED
    }
}

/// Pick the log action for a ban toggle.
pub fn ban_action(banned: bool) -> &'static str {
    if banned {
        ACTION_USER_BANNED
    } else {
        ACTION_USER_UNBANNED
    }
}

/// Pick the log action for a suspension toggle.
pub fn suspend_action(suspended: bool) -> &'static str {
    if suspended {
        ACTION_USER_SUSPENDED
    } else {
        ACTION_USER_UNSUSPENDED
    }
}
