//! Content media types, hashtag normalization, and moderation filters.

use crate::error::CoreError;

pub const MEDIA_TYPE_PHOTO: &str = "PHOTO";
pub const MEDIA_TYPE_VIDEO: &str = "VIDEO";

/// All valid media type values.
pub const VALID_MEDIA_TYPES: &[&str] = &[MEDIA_TYPE_PHOTO, MEDIA_TYPE_VIDEO];

/// Longest accepted caption, in characters.
pub const MAX_CAPTION_LEN: usize = 2_200;

/// Validate that a media type string is one of the accepted values.
pub fn validate_media_type(media_type: &str) -> Result<(), CoreError> {
    if VALID_MEDIA_TYPES.contains(&media_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid media type '{media_type}'. Must be one of: {}",
            VALID_MEDIA_TYPES.join(", ")
        )))
    }
}

/// Validate an optional caption's length.
pub fn validate_caption(caption: Option<&str>) -> Result<(), CoreError> {
    match caption {
        Some(c) if c.chars().count() > MAX_CAPTION_LEN => Err(CoreError::Validation(format!(
            "Caption must be at most {MAX_CAPTION_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// Trim hashtags, strip a leading `#`, drop empties and duplicates while
/// keeping first-seen order.
pub fn normalize_hashtags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().trim_start_matches('#').trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

/// Parse the admin `status` filter (`ALL`, `APPROVED`, `PENDING`) into an
/// `is_approved` predicate.
pub fn parse_status_filter(value: Option<&str>) -> Result<Option<bool>, CoreError> {
    match value.unwrap_or("ALL") {
        "ALL" => Ok(None),
        "APPROVED" => Ok(Some(true)),
        "PENDING" => Ok(Some(false)),
        other => Err(CoreError::Validation(format!(
            "Invalid status filter '{other}'. Must be one of: ALL, APPROVED, PENDING"
        ))),
    }
}

/// Parse the admin `featured` filter (`ALL`, `FEATURED`, `NOT_FEATURED`)
/// into an `is_featured` predicate.
pub fn parse_featured_filter(value: Option<&str>) -> Result<Option<bool>, CoreError> {
    match value.unwrap_or("ALL") {
        "ALL" => Ok(None),
        "FEATURED" => Ok(Some(true)),
        "NOT_FEATURED" => Ok(Some(false)),
        other => Err(CoreError::Validation(format!(
            "Invalid featured filter '{other}'. Must be one of: ALL, FEATURED, NOT_FEATURED"
        ))),
    }
}

/// Parse the admin `type` filter (`ALL` or a media type).
pub fn parse_type_filter(value: Option<&str>) -> Result<Option<String>, CoreError> {
    match value.unwrap_or("ALL") {
        "ALL" => Ok(None),
        other => {
            validate_media_type(other)?;
            Ok(Some(other.to_string()))
        }
    }
}
