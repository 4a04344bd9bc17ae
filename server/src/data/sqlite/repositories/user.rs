//! User repository for SQLite operations

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::types::UserRow;
use crate::utils::time::epoch_ms;

/// Upsert a user by identity subject
///
/// Creates the row on first sync; later syncs refresh the profile fields and
/// `updated_at` while keeping the original id and `created_at`.
pub async fn sync_user(
    pool: &SqlitePool,
    subject: &str,
    email: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
    image_url: Option<&str>,
) -> Result<UserRow, SqliteError> {
    let id = cuid2::create_id();
    let now = epoch_ms();

    let row = sqlx::query_as::<_, (String, String, String, Option<String>, Option<String>, Option<String>, i64, i64)>(
        r#"
        INSERT INTO users (id, subject, email, first_name, last_name, image_url, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(subject) DO UPDATE SET
            email = excluded.email,
            first_name = excluded.first_name,
            last_name = excluded.last_name,
            image_url = excluded.image_url,
            updated_at = excluded.updated_at
        RETURNING id, subject, email, first_name, last_name, image_url, created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(subject)
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .bind(image_url)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row_to_user(row))
}

/// Get a user by identity subject
pub async fn get_by_subject(
    pool: &SqlitePool,
    subject: &str,
) -> Result<Option<UserRow>, SqliteError> {
    let row = sqlx::query_as::<_, (String, String, String, Option<String>, Option<String>, Option<String>, i64, i64)>(
        "SELECT id, subject, email, first_name, last_name, image_url, created_at, updated_at FROM users WHERE subject = ?",
    )
    .bind(subject)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(row_to_user))
}

type UserTuple = (
    String,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    i64,
    i64,
);

fn row_to_user(
    (id, subject, email, first_name, last_name, image_url, created_at, updated_at): UserTuple,
) -> UserRow {
    UserRow {
        id,
        subject,
        email,
        first_name,
        last_name,
        image_url,
        created_at,
        updated_at,
    }
}
