//! Due-card selection.
//!
//! The study and review screens previously carried their own near-identical
//! filter predicates; they are collapsed into one `due_cards` function
//! parameterized by mode so the two call sites cannot drift apart.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::domain::{Card, Difficulty};

/// Which pool of cards a session draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StudyPool {
  /// Cards not yet learned (home/study flow)
  #[default]
  Study,
  /// Cards missed at least once, plus anything unlearned (review flow)
  Wrong,
  /// Hard-rated cards from the review pool
  Difficult,
  /// The whole deck
  All,
}

impl StudyPool {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "study" => Some(Self::Study),
      "wrong" => Some(Self::Wrong),
      "difficult" => Some(Self::Difficult),
      "all" => Some(Self::All),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Study => "study",
      Self::Wrong => "wrong",
      Self::Difficult => "difficult",
      Self::All => "all",
    }
  }

  fn includes(&self, card: &Card) -> bool {
    match self {
      Self::Study => !card.is_learned,
      Self::Wrong => card.wrong_count > 0 || !card.is_learned,
      Self::Difficult => {
        card.difficulty == Difficulty::Hard && (card.wrong_count > 0 || !card.is_learned)
      }
      Self::All => true,
    }
  }
}

/// Select the due cards for a pool, preserving insertion order
pub fn due_cards(cards: &[Card], pool: StudyPool) -> Vec<Card> {
  cards.iter().filter(|c| pool.includes(c)).cloned().collect()
}

/// Select the due cards for a pool as a fair-random permutation
pub fn due_cards_shuffled(cards: &[Card], pool: StudyPool) -> Vec<Card> {
  let mut selected = due_cards(cards, pool);
  let mut rng = rand::rng();
  selected.shuffle(&mut rng);
  selected
}

/// Cards belonging to a category, in insertion order
pub fn cards_by_category(cards: &[Card], category: &str) -> Vec<Card> {
  cards
    .iter()
    .filter(|c| c.category == category)
    .cloned()
    .collect()
}
