//! Application configuration constants.
//!
//! This module centralizes all configurable values that were previously
//! hardcoded throughout the codebase.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Database Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(db) = config.database {
                if let Some(path) = db.path {
                    tracing::info!("Using database from config.toml: {}", path);
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 2: .env DATABASE_PATH
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from(crate::paths::db_path());
    tracing::info!("Using default database path: {}", default.display());
    default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

// ==================== Study Configuration ====================

/// Minutes credited to the daily session record when a study session
/// finishes. A coarse estimate, not measured wall-clock.
pub const SESSION_TIME_INCREMENT_MINUTES: i64 = 10;

/// Default daily goal (cards per day) before the user changes it
pub const DEFAULT_DAILY_GOAL: i64 = 20;

/// Days shown in the progress screen's daily breakdown
pub const DAILY_BREAKDOWN_DAYS: usize = 7;

// ==================== Seed Categories ====================

/// Categories created on first launch so a new deck has somewhere to go
pub const DEFAULT_CATEGORIES: [(&str, &str); 6] = [
    ("Basic Verbs", "#3B82F6"),
    ("Daily Conversation", "#10B981"),
    ("Grammar", "#F59E0B"),
    ("TOEIC", "#EF4444"),
    ("Business English", "#8B5CF6"),
    ("Travel English", "#06B6D4"),
];
