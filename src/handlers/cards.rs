//! Card and category creation and listing

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::{Card, Category, Difficulty};
use crate::selection::cards_by_category;
use crate::store::{self, DbPool, LogOnError, try_lock};
use crate::validation;

use super::store_error;

#[derive(Debug, Deserialize)]
pub struct CardsQuery {
  pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CardListResponse {
  pub cards: Vec<Card>,
  pub count: usize,
}

/// GET /cards - the whole deck, optionally narrowed to one category
pub async fn list_cards(
  State(pool): State<DbPool>,
  Query(query): Query<CardsQuery>,
) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let all = store::load_cards(&conn).log_warn_default("Failed to load cards");
  let cards = match query.category {
    Some(category) => cards_by_category(&all, &category),
    None => all,
  };

  let count = cards.len();
  Json(CardListResponse { cards, count }).into_response()
}

#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
  pub front: String,
  pub back: String,
  pub category: String,
  pub memo: Option<String>,
  #[serde(default)]
  pub difficulty: Difficulty,
}

/// POST /cards
pub async fn create_card(
  State(pool): State<DbPool>,
  Json(request): Json<CreateCardRequest>,
) -> impl IntoResponse {
  if let Err(message) = validation::validate_card_input(&request.front, &request.back) {
    return (
      StatusCode::UNPROCESSABLE_ENTITY,
      Json(serde_json::json!({ "error": message })),
    )
      .into_response();
  }

  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let card = Card::new(
    request.front,
    request.back,
    request.category,
    request.memo,
    request.difficulty,
  );

  if store::put_card(&conn, &card)
    .log_warn("Failed to save card")
    .is_none()
  {
    return store_error();
  }

  (StatusCode::CREATED, Json(card)).into_response()
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
  pub categories: Vec<Category>,
}

/// GET /categories
pub async fn list_categories(State(pool): State<DbPool>) -> impl IntoResponse {
  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let categories = store::load_categories(&conn).log_warn_default("Failed to load categories");
  Json(CategoryListResponse { categories }).into_response()
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
  pub name: String,
  #[serde(default = "default_category_color")]
  pub color: String,
}

fn default_category_color() -> String {
  "#3B82F6".to_string()
}

/// POST /categories
pub async fn create_category(
  State(pool): State<DbPool>,
  Json(request): Json<CreateCategoryRequest>,
) -> impl IntoResponse {
  if let Err(message) = validation::validate_category_name(&request.name) {
    return (
      StatusCode::UNPROCESSABLE_ENTITY,
      Json(serde_json::json!({ "error": message })),
    )
      .into_response();
  }

  let conn = match try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return store_error(),
  };

  let category = Category::new(request.name, request.color);
  if store::add_category(&conn, &category)
    .log_warn("Failed to save category")
    .is_none()
  {
    return store_error();
  }

  (StatusCode::CREATED, Json(category)).into_response()
}
