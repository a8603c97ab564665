use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day aggregate of study activity. One record per local calendar day;
/// created lazily on the first answer of the day and accumulated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
  pub date: NaiveDate,
  pub studied_count: i64,
  pub correct_count: i64,
  /// Coarse estimate in minutes, credited once per finished session
  pub total_minutes: i64,
}

impl StudySession {
  pub fn new(date: NaiveDate) -> Self {
    Self {
      date,
      studied_count: 0,
      correct_count: 0,
      total_minutes: 0,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  #[test]
  fn test_session_new_is_empty() {
    let session = StudySession::new(date("2026-08-06"));
    assert_eq!(session.studied_count, 0);
    assert_eq!(session.correct_count, 0);
    assert_eq!(session.total_minutes, 0);
  }

  #[test]
  fn test_session_date_serializes_as_iso_day() {
    let session = StudySession::new(date("2026-08-06"));
    let json = serde_json::to_value(&session).unwrap();
    assert_eq!(json["date"], "2026-08-06");
  }

  #[test]
  fn test_session_roundtrip() {
    let session = StudySession {
      date: date("2026-01-31"),
      studied_count: 12,
      correct_count: 10,
      total_minutes: 20,
    };
    let json = serde_json::to_string(&session).unwrap();
    let back: StudySession = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
  }
}
