pub mod cards;
pub mod profile;
pub mod progress;
pub mod review;
pub mod study;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router, extract::State};
use chrono::Local;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::selection::{StudyPool, due_cards};
use crate::stats;
use crate::store::{self, DbPool, LogOnError, try_lock};

/// 500 response used when the store mutex is unavailable
pub(crate) fn store_error() -> Response {
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(serde_json::json!({
      "error": "Store unavailable. Please retry."
    })),
  )
    .into_response()
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
  pub total_cards: i64,
  pub learned_cards: i64,
  pub due_count: i64,
  pub streak_days: i64,
  pub daily_goal: i64,
  pub today_studied: i64,
  pub today_correct: i64,
}

/// GET / - home screen numbers
pub async fn index(State(pool): State<DbPool>) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let cards = store::load_cards(&conn).log_warn_default("Failed to load cards");
  let sessions = store::load_sessions(&conn).log_warn_default("Failed to load sessions");
  let today = Local::now().date_naive();
  let today_session = sessions.iter().find(|s| s.date == today);

  let response = DashboardResponse {
    total_cards: cards.len() as i64,
    learned_cards: cards.iter().filter(|c| c.is_learned).count() as i64,
    due_count: due_cards(&cards, StudyPool::Study).len() as i64,
    streak_days: stats::streak_days(&sessions, today),
    daily_goal: store::get_daily_goal(&conn).log_warn_default("Failed to read daily goal"),
    today_studied: today_session.map(|s| s.studied_count).unwrap_or(0),
    today_correct: today_session.map(|s| s.correct_count).unwrap_or(0),
  };

  Json(response).into_response()
}

pub fn router(pool: DbPool) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/cards", get(cards::list_cards).post(cards::create_card))
    .route(
      "/categories",
      get(cards::list_categories).post(cards::create_category),
    )
    .route("/study/next", get(study::study_next))
    .route("/study/answer", post(study::submit_answer))
    .route("/study/finish", post(study::finish_study_session))
    .route("/review/cards", get(review::review_cards))
    .route("/progress", get(progress::progress))
    .route("/export/csv", get(profile::export_csv))
    .route("/reset", post(profile::reset_data))
    .route(
      "/settings",
      get(profile::get_settings).put(profile::update_settings),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(pool)
}
