//! Shared data types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Challenge difficulty level
///
/// Stored as lowercase TEXT, constrained by a CHECK in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User row from the users table
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: String,
    /// Identity subject from the external provider (unique)
    pub subject: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Challenge row from the challenges table
///
/// Challenges are immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub created_by: String,
    pub created_at: i64,
}

/// Progress row from the progress table
///
/// One row per (user_subject, challenge_id) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRow {
    pub id: String,
    pub user_subject: String,
    pub challenge_id: String,
    pub solved: bool,
    pub solved_at: Option<i64>,
}

/// Rating row from the ratings table
///
/// One row per (challenge_id, user_subject) pair; rating is 1..=5.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRow {
    pub id: String,
    pub challenge_id: String,
    pub user_subject: String,
    pub rating: i64,
    pub rated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Medium).unwrap(),
            "\"medium\""
        );
        let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_rejects_unknown() {
        assert!(serde_json::from_str::<Difficulty>("\"extreme\"").is_err());
        assert!(serde_json::from_str::<Difficulty>("\"Easy\"").is_err());
    }

    #[test]
    fn test_difficulty_as_str() {
        assert_eq!(Difficulty::Easy.as_str(), "easy");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
