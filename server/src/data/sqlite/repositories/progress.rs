//! Progress repository for SQLite operations

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::types::ProgressRow;
use crate::utils::time::epoch_ms;

/// Upsert a user's solved state for a challenge
///
/// The UNIQUE(user_subject, challenge_id) constraint plus ON CONFLICT makes
/// this atomic; repeated calls never create a second row. `solved_at` is set
/// to now when solved, cleared when unsolved.
pub async fn mark_solved(
    pool: &SqlitePool,
    user_subject: &str,
    challenge_id: &str,
    solved: bool,
) -> Result<ProgressRow, SqliteError> {
    let id = cuid2::create_id();
    let solved_at = solved.then(epoch_ms);

    let row = sqlx::query_as::<_, (String, String, String, bool, Option<i64>)>(
        r#"
        INSERT INTO progress (id, user_subject, challenge_id, solved, solved_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(user_subject, challenge_id) DO UPDATE SET
            solved = excluded.solved,
            solved_at = excluded.solved_at
        RETURNING id, user_subject, challenge_id, solved, solved_at
        "#,
    )
    .bind(&id)
    .bind(user_subject)
    .bind(challenge_id)
    .bind(solved)
    .bind(solved_at)
    .fetch_one(pool)
    .await?;

    Ok(row_to_progress(row))
}

/// List all progress rows for a user
pub async fn get_user_progress(
    pool: &SqlitePool,
    user_subject: &str,
) -> Result<Vec<ProgressRow>, SqliteError> {
    let rows = sqlx::query_as::<_, (String, String, String, bool, Option<i64>)>(
        r#"
        SELECT id, user_subject, challenge_id, solved, solved_at
        FROM progress
        WHERE user_subject = ?
        "#,
    )
    .bind(user_subject)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_progress).collect())
}

fn row_to_progress(
    (id, user_subject, challenge_id, solved, solved_at): (String, String, String, bool, Option<i64>),
) -> ProgressRow {
    ProgressRow {
        id,
        user_subject,
        challenge_id,
        solved,
        solved_at,
    }
}
