//! User-input validation.
//!
//! The only failure modes the app models are empty inputs on the card and
//! category forms; everything else is accepted verbatim.

/// Reject a card whose front or back is empty after trimming.
pub fn validate_card_input(front: &str, back: &str) -> Result<(), &'static str> {
  if front.trim().is_empty() || back.trim().is_empty() {
    return Err("Both the front and back of the card are required.");
  }
  Ok(())
}

/// Reject a category whose name is empty after trimming.
pub fn validate_category_name(name: &str) -> Result<(), &'static str> {
  if name.trim().is_empty() {
    return Err("A category name is required.");
  }
  Ok(())
}
