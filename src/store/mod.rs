pub mod cards;
pub mod categories;
pub mod kv;
pub mod schema;
pub mod sessions;
pub mod settings;

use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::DEFAULT_CATEGORIES;
use crate::domain::Category;

// Re-export all public items from submodules
pub use cards::*;
pub use categories::*;
pub use kv::*;
pub use schema::run_migrations;
pub use sessions::*;
pub use settings::*;

pub type DbPool = Arc<Mutex<Connection>>;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
    /// Log the error at warn level and return the default
    fn log_warn_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn log_warn_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                T::default()
            }
        }
    }
}

/// Error returned when the store lock cannot be acquired
#[derive(Debug)]
pub struct DbLockError;

impl std::fmt::Display for DbLockError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Store unavailable")
  }
}

impl std::error::Error for DbLockError {}

/// Try to acquire the store lock, returning an error if poisoned
pub fn try_lock(pool: &DbPool) -> std::result::Result<MutexGuard<'_, Connection>, DbLockError> {
  pool.lock().map_err(|_: PoisonError<_>| {
    eprintln!("ERROR: Store mutex poisoned - a thread panicked while holding the lock");
    DbLockError
  })
}

pub fn init_store(path: &Path) -> Result<DbPool> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).ok();
  }

  // Create backup before migrations if database exists
  if path.exists() {
    let backup_path = path.with_extension("db.backup");
    if let Err(e) = std::fs::copy(path, &backup_path) {
      eprintln!("Warning: Could not create database backup: {}", e);
    }
  }

  let conn = Connection::open(path)?;
  run_migrations(&conn)?;
  Ok(Arc::new(Mutex::new(conn)))
}

/// Create the starter categories on first launch only
pub fn seed_default_categories(conn: &Connection) -> Result<()> {
  let existing = load_categories(conn)?;
  if !existing.is_empty() {
    return Ok(());
  }

  let categories = DEFAULT_CATEGORIES
    .iter()
    .map(|(name, color)| Category::new(name.to_string(), color.to_string()))
    .collect::<Vec<_>>();
  save_categories(conn, &categories)
}

/// Wipe all learning data (cards, categories, sessions). Settings survive.
pub fn reset_all(conn: &Connection) -> Result<()> {
  conn.execute("DELETE FROM store", [])?;
  Ok(())
}
