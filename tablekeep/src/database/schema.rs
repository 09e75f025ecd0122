//! Database schema definitions and SQL constants.
//!
//! The store mirrors browser local storage: a single `storage` table of
//! string keys and string values. Reservations live as one JSON array under
//! one key.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the key-value storage table.
///
/// `updated_at` records the Unix time of the last write to the key.
pub const CREATE_STORAGE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS storage (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to read one value.
pub const SELECT_ITEM: &str = "SELECT value FROM storage WHERE key = ?";

/// SQL statement to write one value, replacing any previous one.
pub const UPSERT_ITEM: &str = r"
    INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
";

/// SQL statement to delete one key.
pub const DELETE_ITEM: &str = "DELETE FROM storage WHERE key = ?";

/// SQL statement to list all keys.
pub const LIST_KEYS: &str = "SELECT key FROM storage ORDER BY key";
