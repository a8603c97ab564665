use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-assigned difficulty tag. Cosmetic plus review filtering; it is
/// never derived from answer history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Easy,
  #[default]
  Medium,
  Hard,
}

impl Difficulty {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "easy" => Some(Self::Easy),
      "medium" => Some(Self::Medium),
      "hard" => Some(Self::Hard),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Medium => "medium",
      Self::Hard => "hard",
    }
  }
}

/// A front/back learning unit with its mastery state.
///
/// `wrong_count` and `is_learned` are mutated only by the answer processor;
/// everything else is set at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
  pub id: String,
  pub front: String,
  pub back: String,
  /// Category display name, denormalized - not a foreign key
  pub category: String,
  pub memo: Option<String>,
  pub difficulty: Difficulty,
  pub wrong_count: i64,
  pub is_learned: bool,
  pub last_reviewed_at: Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
}

impl Card {
  pub fn new(
    front: String,
    back: String,
    category: String,
    memo: Option<String>,
    difficulty: Difficulty,
  ) -> Self {
    Self {
      id: generate_id(),
      front,
      back,
      category,
      memo,
      difficulty,
      wrong_count: 0,
      is_learned: false,
      last_reviewed_at: None,
      created_at: Utc::now(),
    }
  }
}

/// Category tag for grouping cards. Name uniqueness is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
  pub id: String,
  pub name: String,
  /// Hex color used by the client, e.g. "#3B82F6"
  pub color: String,
}

impl Category {
  pub fn new(name: String, color: String) -> Self {
    Self {
      id: generate_id(),
      name,
      color,
    }
  }
}

/// Opaque identifier: creation time in millis plus a random suffix.
pub fn generate_id() -> String {
  let millis = Utc::now().timestamp_millis();
  let suffix: u32 = rand::random();
  format!("{:x}{:08x}", millis, suffix)
}

#[cfg(test)]
mod tests {
  use super::*;

  // Difficulty tests

  #[test]
  fn test_difficulty_from_str_easy() {
    assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
  }

  #[test]
  fn test_difficulty_from_str_medium() {
    assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Medium));
  }

  #[test]
  fn test_difficulty_from_str_hard() {
    assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
  }

  #[test]
  fn test_difficulty_from_str_invalid() {
    assert_eq!(Difficulty::from_str("invalid"), None);
    assert_eq!(Difficulty::from_str(""), None);
    assert_eq!(Difficulty::from_str("HARD"), None);
  }

  #[test]
  fn test_difficulty_default_is_medium() {
    assert_eq!(Difficulty::default(), Difficulty::Medium);
  }

  #[test]
  fn test_difficulty_as_str_roundtrip() {
    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
      assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
    }
  }

  #[test]
  fn test_difficulty_serde() {
    let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
    assert_eq!(d, Difficulty::Hard);
    assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
  }

  // Card constructor tests

  #[test]
  fn test_card_new_defaults() {
    let card = Card::new(
      "accomplish".to_string(),
      "to achieve, to complete".to_string(),
      "Basic Verbs".to_string(),
      Some("think of 'achievement'".to_string()),
      Difficulty::Hard,
    );

    assert!(!card.id.is_empty());
    assert_eq!(card.front, "accomplish");
    assert_eq!(card.back, "to achieve, to complete");
    assert_eq!(card.category, "Basic Verbs");
    assert_eq!(card.memo, Some("think of 'achievement'".to_string()));
    assert_eq!(card.difficulty, Difficulty::Hard);
    assert_eq!(card.wrong_count, 0);
    assert!(!card.is_learned);
    assert!(card.last_reviewed_at.is_none());
  }

  #[test]
  fn test_card_new_no_memo() {
    let card = Card::new(
      "cat".to_string(),
      "a small animal".to_string(),
      "Daily Conversation".to_string(),
      None,
      Difficulty::Medium,
    );
    assert!(card.memo.is_none());
  }

  #[test]
  fn test_generate_id_unique() {
    let a = generate_id();
    let b = generate_id();
    assert_ne!(a, b);
  }

  #[test]
  fn test_category_new() {
    let cat = Category::new("Grammar".to_string(), "#F59E0B".to_string());
    assert!(!cat.id.is_empty());
    assert_eq!(cat.name, "Grammar");
    assert_eq!(cat.color, "#F59E0B");
  }
}
