//! Bulk challenge seeding from a JSON file

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::data::sqlite::repositories::challenge;
use crate::data::types::Difficulty;

/// One challenge entry in a seed file
#[derive(Debug, Deserialize)]
pub struct SeedChallenge {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Insert challenges from a JSON array file
///
/// Returns the number of challenges inserted. Entries are inserted in file
/// order; a failure aborts the run, keeping already inserted rows.
pub async fn seed_from_file(pool: &SqlitePool, path: &Path, created_by: &str) -> Result<usize> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    let entries: Vec<SeedChallenge> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;

    tracing::debug!(count = entries.len(), "Seeding challenges");

    for entry in &entries {
        challenge::create_challenge(
            pool,
            &entry.title,
            &entry.description,
            entry.difficulty,
            &entry.tags,
            entry.link.as_deref(),
            created_by,
        )
        .await
        .with_context(|| format!("Failed to insert challenge: {}", entry.title))?;
    }

    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    async fn setup_test_pool() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        sqlx::query(crate::data::sqlite::schema::SCHEMA)
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    fn write_seed_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_seed_inserts_challenges() {
        let pool = setup_test_pool().await;
        let file = write_seed_file(
            r#"[
                {"title": "Two Sum", "description": "d1", "difficulty": "easy",
                 "tags": ["arrays"], "link": "https://example.com/1"},
                {"title": "LRU Cache", "description": "d2", "difficulty": "medium"}
            ]"#,
        );

        let count = seed_from_file(&pool, file.path(), "seed").await.unwrap();
        assert_eq!(count, 2);

        let all = challenge::list_challenges(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|c| c.created_by == "seed"));
    }

    #[tokio::test]
    async fn test_seed_rejects_invalid_difficulty() {
        let pool = setup_test_pool().await;
        let file = write_seed_file(
            r#"[{"title": "Bad", "description": "d", "difficulty": "extreme"}]"#,
        );

        assert!(seed_from_file(&pool, file.path(), "seed").await.is_err());
    }

    #[tokio::test]
    async fn test_seed_missing_file() {
        let pool = setup_test_pool().await;
        let result = seed_from_file(&pool, Path::new("/nonexistent/seed.json"), "seed").await;
        assert!(result.is_err());
    }
}
