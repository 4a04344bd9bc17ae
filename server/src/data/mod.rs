//! Data storage layer
//!
//! - `sqlite` - embedded transactional database (schema, migrations, repositories)
//! - `types` - row types shared between repositories and the API layer

pub mod sqlite;
pub mod types;

pub use sqlite::SqliteService;
