//! Challenge repository for SQLite operations
//!
//! Tags are stored as a JSON array in a TEXT column.

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::types::{ChallengeRow, Difficulty};
use crate::utils::time::epoch_ms;

/// Create a new challenge with a generated CUID2 ID
pub async fn create_challenge(
    pool: &SqlitePool,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    tags: &[String],
    link: Option<&str>,
    created_by: &str,
) -> Result<ChallengeRow, SqliteError> {
    let id = cuid2::create_id();
    let now = epoch_ms();
    let tags_json = serde_json::to_string(tags)?;

    sqlx::query(
        r#"
        INSERT INTO challenges (id, title, description, difficulty, tags, link, created_by, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(title)
    .bind(description)
    .bind(difficulty)
    .bind(&tags_json)
    .bind(link)
    .bind(created_by)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(ChallengeRow {
        id,
        title: title.to_string(),
        description: description.to_string(),
        difficulty,
        tags: tags.to_vec(),
        link: link.map(String::from),
        created_by: created_by.to_string(),
        created_at: now,
    })
}

/// List all challenges, newest first
pub async fn list_challenges(pool: &SqlitePool) -> Result<Vec<ChallengeRow>, SqliteError> {
    let rows: Vec<ChallengeTuple> = sqlx::query_as(
        r#"
        SELECT id, title, description, difficulty, tags, link, created_by, created_at
        FROM challenges
        ORDER BY created_at DESC, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(row_to_challenge).collect()
}

/// Get a challenge by ID
pub async fn get_challenge(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<ChallengeRow>, SqliteError> {
    let row: Option<ChallengeTuple> = sqlx::query_as(
        r#"
        SELECT id, title, description, difficulty, tags, link, created_by, created_at
        FROM challenges
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(row_to_challenge).transpose()
}

type ChallengeTuple = (
    String,
    String,
    String,
    Difficulty,
    String,
    Option<String>,
    String,
    i64,
);

fn row_to_challenge(
    (id, title, description, difficulty, tags_json, link, created_by, created_at): ChallengeTuple,
) -> Result<ChallengeRow, SqliteError> {
    let tags: Vec<String> = serde_json::from_str(&tags_json)?;
    Ok(ChallengeRow {
        id,
        title,
        description,
        difficulty,
        tags,
        link,
        created_by,
        created_at,
    })
}
