//! User settings

use rusqlite::{Connection, Result, params};

use crate::config::DEFAULT_DAILY_GOAL;

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
    let mut rows = stmt.query(params![key])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row.get(0)?))
    } else {
        Ok(None)
    }
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_daily_goal(conn: &Connection) -> Result<i64> {
    get_setting(conn, "daily_goal")
        .map(|v| v.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_DAILY_GOAL))
}

pub fn set_daily_goal(conn: &Connection, goal: i64) -> Result<()> {
    set_setting(conn, "daily_goal", &goal.to_string())
}

pub fn get_shuffle_enabled(conn: &Connection) -> Result<bool> {
    get_setting(conn, "shuffle_enabled").map(|v| v.as_deref() == Some("true"))
}

pub fn set_shuffle_enabled(conn: &Connection, enabled: bool) -> Result<()> {
    set_setting(conn, "shuffle_enabled", if enabled { "true" } else { "false" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEnv;

    #[test]
    fn test_daily_goal_default() {
        let env = TestEnv::new().unwrap();
        assert_eq!(get_daily_goal(&env.conn).unwrap(), DEFAULT_DAILY_GOAL);
    }

    #[test]
    fn test_daily_goal_roundtrip() {
        let env = TestEnv::new().unwrap();
        set_daily_goal(&env.conn, 35).unwrap();
        assert_eq!(get_daily_goal(&env.conn).unwrap(), 35);
    }

    #[test]
    fn test_shuffle_enabled_default_off() {
        let env = TestEnv::new().unwrap();
        assert!(!get_shuffle_enabled(&env.conn).unwrap());
    }

    #[test]
    fn test_shuffle_enabled_roundtrip() {
        let env = TestEnv::new().unwrap();
        set_shuffle_enabled(&env.conn, true).unwrap();
        assert!(get_shuffle_enabled(&env.conn).unwrap());
        set_shuffle_enabled(&env.conn, false).unwrap();
        assert!(!get_shuffle_enabled(&env.conn).unwrap());
    }
}
