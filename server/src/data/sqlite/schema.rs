//! SQLite schema definitions
//!
//! Initial schema with all tables. No migrations needed for first version.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema SQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success INTEGER NOT NULL DEFAULT 1
);

-- =============================================================================
-- 1. Users (provisioned from the identity provider via sync)
-- =============================================================================
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    subject TEXT NOT NULL UNIQUE CHECK(length(subject) >= 1 AND length(subject) <= 256),
    email TEXT NOT NULL CHECK(length(email) >= 3),
    first_name TEXT CHECK(first_name IS NULL OR length(first_name) <= 100),
    last_name TEXT CHECK(last_name IS NULL OR length(last_name) <= 100),
    image_url TEXT,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

-- =============================================================================
-- 2. Challenges (immutable after creation)
-- =============================================================================
CREATE TABLE IF NOT EXISTS challenges (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL CHECK(length(title) >= 1),
    description TEXT NOT NULL,
    difficulty TEXT NOT NULL CHECK(difficulty IN ('easy', 'medium', 'hard')),
    tags TEXT NOT NULL DEFAULT '[]',
    link TEXT,
    created_by TEXT NOT NULL,
    created_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_challenges_created_at ON challenges(created_at);

-- =============================================================================
-- 3. Progress (one row per user/challenge pair)
-- =============================================================================
CREATE TABLE IF NOT EXISTS progress (
    id TEXT PRIMARY KEY,
    user_subject TEXT NOT NULL,
    challenge_id TEXT NOT NULL REFERENCES challenges(id) ON DELETE CASCADE,
    solved INTEGER NOT NULL DEFAULT 0,
    solved_at INTEGER,
    UNIQUE(user_subject, challenge_id)
);

CREATE INDEX IF NOT EXISTS idx_progress_user ON progress(user_subject);

-- =============================================================================
-- 4. Ratings (one row per challenge/user pair, 1-5 stars)
-- =============================================================================
CREATE TABLE IF NOT EXISTS ratings (
    id TEXT PRIMARY KEY,
    challenge_id TEXT NOT NULL REFERENCES challenges(id) ON DELETE CASCADE,
    user_subject TEXT NOT NULL,
    rating INTEGER NOT NULL CHECK(rating >= 1 AND rating <= 5),
    rated_at INTEGER NOT NULL,
    UNIQUE(challenge_id, user_subject)
);

CREATE INDEX IF NOT EXISTS idx_ratings_challenge ON ratings(challenge_id);
"#;
