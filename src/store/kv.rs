//! Key-value access to serialized collections.
//!
//! The persistence collaborator is deliberately dumb: a string key maps to
//! one JSON document holding a whole collection. There is no partial
//! update; callers read, modify in memory, and write back.

use rusqlite::{Connection, Result, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Store key for the card collection
pub const CARDS_KEY: &str = "flashcards";

/// Store key for the category collection
pub const CATEGORIES_KEY: &str = "categories";

/// Store key for the per-day study session records
pub const SESSIONS_KEY: &str = "studySessions";

/// Read a whole collection. A missing key yields the empty collection;
/// an unreadable value is logged and treated the same way.
pub fn read_collection<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Vec<T>> {
    let mut stmt = conn.prepare("SELECT value FROM store WHERE key = ?1")?;
    let mut rows = stmt.query(params![key])?;

    let Some(row) = rows.next()? else {
        return Ok(Vec::new());
    };

    let raw: String = row.get(0)?;
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::warn!("Discarding unreadable collection '{}': {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Replace a collection wholesale
pub fn write_collection<T: Serialize>(conn: &Connection, key: &str, items: &[T]) -> Result<()> {
    let raw = serde_json::to_string(items)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    conn.execute(
        "INSERT OR REPLACE INTO store (key, value) VALUES (?1, ?2)",
        params![key, raw],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEnv;

    #[test]
    fn test_read_missing_key_returns_empty() {
        let env = TestEnv::new().unwrap();
        let items: Vec<String> = read_collection(&env.conn, "nothing-here").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_write_replaces_wholesale() {
        let env = TestEnv::new().unwrap();
        write_collection(&env.conn, "words", &["a".to_string(), "b".to_string()]).unwrap();
        write_collection(&env.conn, "words", &["c".to_string()]).unwrap();

        let items: Vec<String> = read_collection(&env.conn, "words").unwrap();
        assert_eq!(items, vec!["c".to_string()]);
    }

    #[test]
    fn test_unreadable_value_treated_as_empty() {
        let env = TestEnv::new().unwrap();
        env.conn
            .execute(
                "INSERT INTO store (key, value) VALUES ('bad', 'not json')",
                [],
            )
            .unwrap();

        let items: Vec<String> = read_collection(&env.conn, "bad").unwrap();
        assert!(items.is_empty());
    }
}
