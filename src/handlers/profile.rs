//! Profile actions: CSV export, data reset, settings

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::export::cards_to_csv;
use crate::store::{self, DbPool, LogOnError, try_lock};

use super::store_error;

/// GET /export/csv - download the whole deck
pub async fn export_csv(State(pool): State<DbPool>) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let cards = store::load_cards(&conn).log_warn_default("Failed to load cards");
  let body = cards_to_csv(&cards);

  (
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
      (
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"cards.csv\"",
      ),
    ],
    body,
  )
    .into_response()
}

/// POST /reset - wipe all learning data, then restore the starter
/// categories so the app is back in its first-launch state
pub async fn reset_data(State(pool): State<DbPool>) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  if store::reset_all(&conn).log_warn("Failed to reset store").is_none() {
    return store_error();
  }
  if store::seed_default_categories(&conn)
    .log_warn("Failed to reseed categories")
    .is_none()
  {
    return store_error();
  }

  tracing::info!("All learning data reset");
  Json(serde_json::json!({ "status": "reset" })).into_response()
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
  pub daily_goal: i64,
  pub shuffle_enabled: bool,
}

/// GET /settings
pub async fn get_settings(State(pool): State<DbPool>) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let response = SettingsResponse {
    daily_goal: store::get_daily_goal(&conn).log_warn_default("Failed to read daily goal"),
    shuffle_enabled: store::get_shuffle_enabled(&conn)
      .log_warn_default("Failed to read shuffle setting"),
  };
  Json(response).into_response()
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
  pub daily_goal: Option<i64>,
  pub shuffle_enabled: Option<bool>,
}

/// PUT /settings - partial update, returns the resulting settings
pub async fn update_settings(
  State(pool): State<DbPool>,
  Json(request): Json<UpdateSettingsRequest>,
) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  if let Some(goal) = request.daily_goal {
    if store::set_daily_goal(&conn, goal)
      .log_warn("Failed to set daily goal")
      .is_none()
    {
      return store_error();
    }
  }
  if let Some(enabled) = request.shuffle_enabled {
    if store::set_shuffle_enabled(&conn, enabled)
      .log_warn("Failed to set shuffle setting")
      .is_none()
    {
      return store_error();
    }
  }

  let response = SettingsResponse {
    daily_goal: store::get_daily_goal(&conn).log_warn_default("Failed to read daily goal"),
    shuffle_enabled: store::get_shuffle_enabled(&conn)
      .log_warn_default("Failed to read shuffle setting"),
  };
  Json(response).into_response()
}
