//! SQLite repositories
//!
//! Free async functions over a `SqlitePool`. All composite-key writes use
//! atomic `INSERT ... ON CONFLICT ... DO UPDATE` upserts so concurrent
//! requests cannot create duplicate rows.

pub mod challenge;
pub mod progress;
pub mod rating;
pub mod user;
