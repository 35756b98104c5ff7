//! Quotable regions: user-drawn polygons on a media item that other users
//! may ask to reuse.
//!
//! Regions are embedded in their content row as a JSON array and are never
//! edited after the content is created. Each one is addressable by its UUID.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::CoreError;
use crate::types::RegionId;

/// Maximum number of whitespace-separated words in a region title.
pub const MAX_TITLE_WORDS: usize = 20;

/// Minimum number of vertices for a closed polygon.
pub const MIN_POINTS: usize = 3;

/// A vertex in media-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Reuse policy attached to a region by its creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalType {
    /// Reuse needs an explicit sign-off from the creator.
    #[default]
    CreatorApprovalRequired,
    /// Referencing, editing and reposting are pre-authorized.
    ReferenceEditRepostApproved,
}

/// A region as stored in `contents.quotable_regions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotableRegion {
    pub id: RegionId,
    pub title: String,
    pub points: Vec<Point>,
    pub approval_type: ApprovalType,
}

/// A region submitted alongside new content. The id is optional because
/// the drawing client may or may not have assigned one already.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewQuotableRegion {
    pub id: Option<RegionId>,
    #[validate(length(min = 1, max = 500, message = "Region title must not be empty"))]
    pub title: String,
    #[validate(length(min = 3, message = "A region needs at least 3 points"))]
    pub points: Vec<Point>,
    #[serde(default)]
    pub approval_type: ApprovalType,
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Twice the signed area of the polygon (shoelace formula).
pub fn doubled_signed_area(points: &[Point]) -> f64 {
    if points.len() < MIN_POINTS {
        return 0.0;
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum()
}

/// Validate a single submitted region.
pub fn validate_region(input: &NewQuotableRegion) -> Result<(), CoreError> {
    input.validate()?;

    let title = input.title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation(
            "Region title must not be empty".to_string(),
        ));
    }
    let words = word_count(title);
    if words > MAX_TITLE_WORDS {
        return Err(CoreError::Validation(format!(
            "Region title must be {MAX_TITLE_WORDS} words or less (got {words})"
        )));
    }

    if input
        .points
        .iter()
        .any(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(CoreError::Validation(
            "Region points must have finite coordinates".to_string(),
        ));
    }
    if doubled_signed_area(&input.points) == 0.0 {
        return Err(CoreError::Validation(
            "Region points must enclose an area".to_string(),
        ));
    }
    Ok(())
}

/// Validate all submitted regions for one content item and assign ids to
/// the ones that arrived without one.
///
/// Region ids must be unique within the content item.
pub fn build_regions(inputs: Vec<NewQuotableRegion>) -> Result<Vec<QuotableRegion>, CoreError> {
    let mut seen = HashSet::with_capacity(inputs.len());
    let mut regions = Vec::with_capacity(inputs.len());

    for input in inputs {
        validate_region(&input)?;
        let id = input.id.unwrap_or_else(Uuid::new_v4);
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "Duplicate quotable region id {id}"
            )));
        }
        regions.push(QuotableRegion {
            id,
            title: input.title.trim().to_string(),
            points: input.points,
            approval_type: input.approval_type,
        });
    }
    Ok(regions)
}

/// Look up a region by id.
pub fn find_region(regions: &[QuotableRegion], id: RegionId) -> Option<&QuotableRegion> {
    regions.iter().find(|r| r.id == id)
}
