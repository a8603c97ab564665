//! Answer processing.
//!
//! A card carries a wrong-answer counter and a learned flag instead of any
//! interval scheduling. Each wrong answer bumps the counter, each correct
//! answer works it back toward zero, and a card graduates the moment it is
//! answered correctly while its counter already sits at zero.

use chrono::Utc;

use crate::domain::Card;

/// Apply one answer to a card, returning the updated card.
///
/// The learned flag is checked against the counter BEFORE the decrement:
/// a card at wrong_count 1 answered correctly drops to 0 but stays
/// unlearned until one more correct answer. That matches the shipped app's
/// behavior exactly; see DESIGN.md before changing it.
pub fn process_answer(card: &Card, was_correct: bool) -> Card {
  let mut updated = card.clone();

  if was_correct {
    updated.is_learned = card.wrong_count == 0;
    updated.wrong_count = (card.wrong_count - 1).max(0);
  } else {
    updated.is_learned = false;
    updated.wrong_count = card.wrong_count + 1;
  }
  updated.last_reviewed_at = Some(Utc::now());

  updated
}
