// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "CodeFun";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "codefun";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".codefun";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "codefun.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "CODEFUN_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "CODEFUN_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "CODEFUN_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "CODEFUN_LOG";

// =============================================================================
// Environment Variables - Auth
// =============================================================================

/// Environment variable for the identity-token verification secret
pub const ENV_AUTH_SECRET: &str = "CODEFUN_AUTH_SECRET";

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "CODEFUN_DATA_DIR";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5980;

/// Default request body limit in bytes
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// Auth
// =============================================================================

/// Subject assigned to every request in --no-auth mode
pub const DEFAULT_SUBJECT: &str = "local";

/// Lifetime of tokens minted by `codefun system token`
pub const DEV_TOKEN_TTL_DAYS: u64 = 30;

// =============================================================================
// SQLite
// =============================================================================

/// Database file name inside the sqlite data subdirectory
pub const SQLITE_DB_FILENAME: &str = "codefun.db";

/// Maximum pooled connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// Busy timeout before a locked write fails
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 5;

/// Page cache size pragma (negative = KiB)
pub const SQLITE_CACHE_SIZE: &str = "-64000";

/// WAL autocheckpoint pragma (pages)
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// Interval between background WAL checkpoints
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Shutdown
// =============================================================================

/// How long to wait for background tasks before giving up
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 10;
