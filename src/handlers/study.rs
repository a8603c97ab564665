//! Study flow: serve the next unlearned card, apply answers, close out
//! the session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::domain::{Card, StudySession};
use crate::review::process_answer;
use crate::selection::{StudyPool, due_cards, due_cards_shuffled};
use crate::store::{self, DbPool, LogOnError, try_lock};

use super::store_error;

fn study_queue(conn: &rusqlite::Connection, cards: &[Card]) -> Vec<Card> {
  let shuffle = store::get_shuffle_enabled(conn).log_warn_default("Failed to read shuffle setting");
  if shuffle {
    due_cards_shuffled(cards, StudyPool::Study)
  } else {
    due_cards(cards, StudyPool::Study)
  }
}

#[derive(Debug, Serialize)]
pub struct StudyNextResponse {
  pub card: Option<Card>,
  pub remaining: usize,
}

/// GET /study/next
pub async fn study_next(State(pool): State<DbPool>) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let cards = store::load_cards(&conn).log_warn_default("Failed to load cards");
  let queue = study_queue(&conn, &cards);

  let response = StudyNextResponse {
    remaining: queue.len(),
    card: queue.into_iter().next(),
  };
  Json(response).into_response()
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
  pub card_id: String,
  pub correct: bool,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
  /// The answered card after processing
  pub card: Card,
  /// Today's session record after this answer
  pub session: StudySession,
  /// Next card to show, excluding the one just answered
  pub next: Option<Card>,
  pub remaining: usize,
}

/// POST /study/answer
pub async fn submit_answer(
  State(pool): State<DbPool>,
  Json(request): Json<AnswerRequest>,
) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let card = match store::get_card_by_id(&conn, &request.card_id) {
    Ok(Some(card)) => card,
    Ok(None) => {
      return (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Card not found." })),
      )
        .into_response();
    }
    Err(_) => return store_error(),
  };

  let updated = process_answer(&card, request.correct);
  if store::put_card(&conn, &updated)
    .log_warn("Failed to save reviewed card")
    .is_none()
  {
    return store_error();
  }

  let today = Local::now().date_naive();
  let session = match store::record_answer(&conn, today, request.correct)
    .log_warn("Failed to record answer")
  {
    Some(session) => session,
    None => return store_error(),
  };

  // A wrong answer keeps the card in the queue; skip past it so the
  // client moves on the way the card-by-card screen does.
  let cards = store::load_cards(&conn).log_warn_default("Failed to load cards");
  let queue = study_queue(&conn, &cards);
  let remaining = queue.len();
  let next = queue.into_iter().find(|c| c.id != updated.id);

  Json(AnswerResponse {
    card: updated,
    session,
    next,
    remaining,
  })
  .into_response()
}

#[derive(Debug, Serialize)]
pub struct FinishSessionResponse {
  pub session: StudySession,
}

/// POST /study/finish - credit the per-session time estimate
pub async fn finish_study_session(State(pool): State<DbPool>) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let today = Local::now().date_naive();
  match store::finish_session(&conn, today).log_warn("Failed to finish session") {
    Some(session) => Json(FinishSessionResponse { session }).into_response(),
    None => store_error(),
  }
}
