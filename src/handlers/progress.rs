//! Progress screen aggregates

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Local;
use serde::Serialize;

use crate::config::DAILY_BREAKDOWN_DAYS;
use crate::stats::{self, CategoryProgress, DailyProgress, UserStats};
use crate::store::{self, DbPool, LogOnError, try_lock};

use super::store_error;

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
  pub stats: UserStats,
  /// Last seven days, oldest first
  pub daily: Vec<DailyProgress>,
  pub categories: Vec<CategoryProgress>,
}

/// GET /progress
pub async fn progress(State(pool): State<DbPool>) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let cards = store::load_cards(&conn).log_warn_default("Failed to load cards");
  let sessions = store::load_sessions(&conn).log_warn_default("Failed to load sessions");
  let categories = store::load_categories(&conn).log_warn_default("Failed to load categories");
  let today = Local::now().date_naive();

  let response = ProgressResponse {
    stats: stats::user_stats(&cards, &sessions, today),
    daily: stats::daily_breakdown(&sessions, today, DAILY_BREAKDOWN_DAYS),
    categories: stats::category_progress(&cards, &categories),
  };

  Json(response).into_response()
}
