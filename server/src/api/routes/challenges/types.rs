//! Challenge API request/response types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::data::types::{ChallengeRow, Difficulty, ProgressRow};

pub const MAX_TAGS: usize = 20;
pub const MAX_TAG_LENGTH: usize = 50;

/// Validator for the tags list
fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS {
        return Err(ValidationError::new("tags_too_many")
            .with_message(format!("At most {} tags allowed", MAX_TAGS).into()));
    }
    for tag in tags {
        if tag.is_empty() || tag.len() > MAX_TAG_LENGTH {
            return Err(ValidationError::new("tag_length").with_message(
                format!("Tags must be 1-{} characters", MAX_TAG_LENGTH).into(),
            ));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChallengeRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 10000, message = "Description must be 1-10000 characters"))]
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,
    #[validate(length(max = 2048, message = "Link must be at most 2048 characters"))]
    pub link: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChallengeDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_by: String,
    pub created_at: i64,
}

impl From<ChallengeRow> for ChallengeDto {
    fn from(row: ChallengeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            difficulty: row.difficulty,
            tags: row.tags,
            link: row.link,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RateChallengeRequest {
    /// Star rating, whole numbers 1 through 5
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingResponse {
    pub rating: i64,
    pub rated_at: i64,
}

/// Aggregate rating for a challenge
///
/// `user_rating` is always null here; callers fetch their own rating from
/// the authenticated endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChallengeRatingResponse {
    pub average: f64,
    pub total: i64,
    pub user_rating: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserRatingResponse {
    /// The caller's rating, or null when unrated (never 0)
    pub rating: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MarkSolvedRequest {
    pub solved: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgressDto {
    pub id: String,
    pub challenge_id: String,
    pub solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved_at: Option<i64>,
}

impl From<ProgressRow> for ProgressDto {
    fn from(row: ProgressRow) -> Self {
        Self {
            id: row.id,
            challenge_id: row.challenge_id,
            solved: row.solved,
            solved_at: row.solved_at,
        }
    }
}
