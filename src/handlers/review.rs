//! Review flow: surface previously-missed cards by pool

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::Card;
use crate::selection::{StudyPool, due_cards, due_cards_shuffled};
use crate::store::{self, DbPool, LogOnError, try_lock};

use super::store_error;

#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
  /// "wrong" (default), "difficult" or "all"
  pub mode: Option<String>,
  /// Overrides the stored shuffle setting when present
  pub shuffle: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ReviewCardsResponse {
  pub mode: &'static str,
  pub cards: Vec<Card>,
  pub count: usize,
}

/// GET /review/cards?mode=wrong|difficult|all
pub async fn review_cards(
  State(pool): State<DbPool>,
  Query(query): Query<ReviewQuery>,
) -> impl IntoResponse {
  let mode = match query.mode.as_deref() {
    None => StudyPool::Wrong,
    Some(raw) => match StudyPool::from_str(raw) {
      Some(mode) => mode,
      None => {
        return (
          StatusCode::UNPROCESSABLE_ENTITY,
          Json(serde_json::json!({ "error": "Unknown review mode." })),
        )
          .into_response();
      }
    },
  };

  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let all = store::load_cards(&conn).log_warn_default("Failed to load cards");
  let shuffle = match query.shuffle {
    Some(explicit) => explicit,
    None => store::get_shuffle_enabled(&conn).log_warn_default("Failed to read shuffle setting"),
  };

  let cards = if shuffle {
    due_cards_shuffled(&all, mode)
  } else {
    due_cards(&all, mode)
  };

  let count = cards.len();
  Json(ReviewCardsResponse {
    mode: mode.as_str(),
    cards,
    count,
  })
  .into_response()
}
