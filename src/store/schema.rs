use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Whole collections are stored as JSON blobs under a string key;
  // reads of a missing key yield the empty collection, writes replace
  // the value wholesale.
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS store (
      key TEXT PRIMARY KEY,
      value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS settings (
      key TEXT PRIMARY KEY,
      value TEXT NOT NULL
    );

    -- Default settings
    INSERT OR IGNORE INTO settings (key, value) VALUES ('daily_goal', '20');
    INSERT OR IGNORE INTO settings (key, value) VALUES ('shuffle_enabled', 'false');
    "#,
  )?;

  Ok(())
}
