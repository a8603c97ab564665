//! CSV export of the card collection.
//!
//! Fields are comma-joined with no quoting, matching the format the mobile
//! client already ships to users. A field containing a comma or newline
//! will therefore break the column count; the tests pin that behavior down
//! rather than hide it.

use crate::domain::Card;

const CSV_HEADER: &str = "front,back,category,memo,difficulty,wrong_count,learned";

/// Render all cards as CSV, header line first, one line per card.
pub fn cards_to_csv(cards: &[Card]) -> String {
  let mut lines = Vec::with_capacity(cards.len() + 1);
  lines.push(CSV_HEADER.to_string());

  for card in cards {
    let row = [
      card.front.as_str(),
      card.back.as_str(),
      card.category.as_str(),
      card.memo.as_deref().unwrap_or(""),
      card.difficulty.as_str(),
      &card.wrong_count.to_string(),
      if card.is_learned { "yes" } else { "no" },
    ]
    .join(",");
    lines.push(row);
  }

  lines.join("\n")
}
