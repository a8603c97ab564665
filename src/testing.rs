//! Test utilities for store setup.
//!
//! Provides helpers that reuse authoritative schema initialization,
//! eliminating schema duplication in test code.

use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

/// Test environment with a store database using the authoritative schema.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Store connection with the full schema applied
    pub conn: Connection,
}

impl TestEnv {
    /// Create a test environment with an initialized store.
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let db_path = temp.path().join("booster.db");
        let conn = Connection::open(&db_path)?;
        crate::store::schema::run_migrations(&conn)?;

        Ok(Self { temp, conn })
    }

    /// Get the temporary directory path for creating test files.
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}
