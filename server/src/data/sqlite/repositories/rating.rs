//! Rating repository for SQLite operations
//!
//! Ratings are 1..=5 stars, one per (challenge_id, user_subject) pair.
//! Range checks happen in the API layer before any write; the schema CHECK
//! is a second line of enforcement.

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::types::RatingRow;
use crate::utils::time::epoch_ms;

/// Aggregate rating for a challenge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingAggregate {
    /// Mean rating rounded to one decimal place; 0.0 when no ratings exist
    pub average: f64,
    pub total: i64,
}

/// Upsert the caller's rating for a challenge
///
/// A re-rating replaces the previous value and refreshes `rated_at`.
pub async fn rate_challenge(
    pool: &SqlitePool,
    challenge_id: &str,
    user_subject: &str,
    rating: i64,
) -> Result<RatingRow, SqliteError> {
    let id = cuid2::create_id();
    let now = epoch_ms();

    let row = sqlx::query_as::<_, (String, String, String, i64, i64)>(
        r#"
        INSERT INTO ratings (id, challenge_id, user_subject, rating, rated_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(challenge_id, user_subject) DO UPDATE SET
            rating = excluded.rating,
            rated_at = excluded.rated_at
        RETURNING id, challenge_id, user_subject, rating, rated_at
        "#,
    )
    .bind(&id)
    .bind(challenge_id)
    .bind(user_subject)
    .bind(rating)
    .bind(now)
    .fetch_one(pool)
    .await?;

    let (id, challenge_id, user_subject, rating, rated_at) = row;
    Ok(RatingRow {
        id,
        challenge_id,
        user_subject,
        rating,
        rated_at,
    })
}

/// Aggregate rating for a challenge
///
/// Returns average 0.0 and total 0 when the challenge has no ratings.
/// The average is rounded to one decimal place.
pub async fn get_challenge_rating(
    pool: &SqlitePool,
    challenge_id: &str,
) -> Result<RatingAggregate, SqliteError> {
    let (avg, total): (Option<f64>, i64) =
        sqlx::query_as("SELECT AVG(rating), COUNT(*) FROM ratings WHERE challenge_id = ?")
            .bind(challenge_id)
            .fetch_one(pool)
            .await?;

    let average = avg.map(|a| (a * 10.0).round() / 10.0).unwrap_or(0.0);

    Ok(RatingAggregate { average, total })
}

/// The caller's own rating for a challenge, if any
///
/// None means unrated; never 0.
pub async fn get_user_rating(
    pool: &SqlitePool,
    challenge_id: &str,
    user_subject: &str,
) -> Result<Option<i64>, SqliteError> {
    let rating: Option<i64> = sqlx::query_scalar(
        "SELECT rating FROM ratings WHERE challenge_id = ? AND user_subject = ?",
    )
    .bind(challenge_id)
    .bind(user_subject)
    .fetch_optional(pool)
    .await?;

    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test_pool() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        sqlx::query(crate::data::sqlite::schema::SCHEMA)
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    async fn insert_challenge(pool: &SqlitePool, id: &str) {
        sqlx::query(
            "INSERT INTO challenges (id, title, description, difficulty, tags, created_by, created_at)
             VALUES (?, 't', 'd', 'easy', '[]', 'seed', 0)",
        )
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_aggregate_empty() {
        let pool = setup_test_pool().await;
        insert_challenge(&pool, "ch-1").await;

        let agg = get_challenge_rating(&pool, "ch-1").await.unwrap();
        assert_eq!(agg.average, 0.0);
        assert_eq!(agg.total, 0);
    }

    #[tokio::test]
    async fn test_aggregate_average_rounded_to_one_decimal() {
        let pool = setup_test_pool().await;
        insert_challenge(&pool, "ch-1").await;

        rate_challenge(&pool, "ch-1", "alice", 4).await.unwrap();
        rate_challenge(&pool, "ch-1", "bob", 5).await.unwrap();

        let agg = get_challenge_rating(&pool, "ch-1").await.unwrap();
        assert_eq!(agg.average, 4.5);
        assert_eq!(agg.total, 2);

        // 11 / 3 = 3.666... rounds to 3.7
        rate_challenge(&pool, "ch-1", "carol", 2).await.unwrap();
        let agg = get_challenge_rating(&pool, "ch-1").await.unwrap();
        assert_eq!(agg.average, 3.7);
        assert_eq!(agg.total, 3);
    }

    #[tokio::test]
    async fn test_rerating_replaces_not_duplicates() {
        let pool = setup_test_pool().await;
        insert_challenge(&pool, "ch-1").await;

        let first = rate_challenge(&pool, "ch-1", "alice", 2).await.unwrap();
        let second = rate_challenge(&pool, "ch-1", "alice", 5).await.unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.rating, 5);

        let agg = get_challenge_rating(&pool, "ch-1").await.unwrap();
        assert_eq!(agg.total, 1);
        assert_eq!(agg.average, 5.0);
    }

    #[tokio::test]
    async fn test_user_rating_none_when_unrated() {
        let pool = setup_test_pool().await;
        insert_challenge(&pool, "ch-1").await;

        rate_challenge(&pool, "ch-1", "bob", 3).await.unwrap();

        // Alice never rated: None, not 0
        let rating = get_user_rating(&pool, "ch-1", "alice").await.unwrap();
        assert_eq!(rating, None);

        let rating = get_user_rating(&pool, "ch-1", "bob").await.unwrap();
        assert_eq!(rating, Some(3));
    }

    #[tokio::test]
    async fn test_ratings_scoped_per_challenge() {
        let pool = setup_test_pool().await;
        insert_challenge(&pool, "ch-1").await;
        insert_challenge(&pool, "ch-2").await;

        rate_challenge(&pool, "ch-1", "alice", 1).await.unwrap();
        rate_challenge(&pool, "ch-2", "alice", 5).await.unwrap();

        let agg1 = get_challenge_rating(&pool, "ch-1").await.unwrap();
        let agg2 = get_challenge_rating(&pool, "ch-2").await.unwrap();
        assert_eq!(agg1.average, 1.0);
        assert_eq!(agg2.average, 5.0);
    }

    #[tokio::test]
    async fn test_schema_rejects_out_of_range_rating() {
        let pool = setup_test_pool().await;
        insert_challenge(&pool, "ch-1").await;

        let result = rate_challenge(&pool, "ch-1", "alice", 6).await;
        assert!(result.is_err());

        let result = rate_challenge(&pool, "ch-1", "alice", 0).await;
        assert!(result.is_err());

        // Nothing written
        let agg = get_challenge_rating(&pool, "ch-1").await.unwrap();
        assert_eq!(agg.total, 0);
    }
}
