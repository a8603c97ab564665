//! Aggregate statistics over cards and daily session records

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::{Card, Category, StudySession};

/// Overall correct rate in whole percent across all recorded sessions.
/// Zero sessions, or sessions that studied nothing, rate as 0.
pub fn correct_rate(sessions: &[StudySession]) -> i64 {
  if sessions.is_empty() {
    return 0;
  }

  let studied: i64 = sessions.iter().map(|s| s.studied_count).sum();
  let correct: i64 = sessions.iter().map(|s| s.correct_count).sum();

  if studied > 0 {
    ((correct as f64 / studied as f64) * 100.0).round() as i64
  } else {
    0
  }
}

/// Consecutive calendar days with a session record, walking backward from
/// `today` and stopping at the first gap. No session today means 0.
pub fn streak_days(sessions: &[StudySession], today: NaiveDate) -> i64 {
  let mut streak = 0;
  let mut day = today;

  loop {
    if !sessions.iter().any(|s| s.date == day) {
      break;
    }
    streak += 1;
    match day.pred_opt() {
      Some(prev) => day = prev,
      None => break,
    }
  }

  streak
}

/// Headline numbers for the profile and progress screens
#[derive(Debug, Clone, Serialize)]
pub struct UserStats {
  pub total_cards: i64,
  pub learned_cards: i64,
  pub streak_days: i64,
  pub total_study_minutes: i64,
  pub average_correct_rate: i64,
}

pub fn user_stats(cards: &[Card], sessions: &[StudySession], today: NaiveDate) -> UserStats {
  UserStats {
    total_cards: cards.len() as i64,
    learned_cards: cards.iter().filter(|c| c.is_learned).count() as i64,
    streak_days: streak_days(sessions, today),
    total_study_minutes: sessions.iter().map(|s| s.total_minutes).sum(),
    average_correct_rate: correct_rate(sessions),
  }
}

/// One bar of the weekly chart
#[derive(Debug, Clone, Serialize)]
pub struct DailyProgress {
  pub date: NaiveDate,
  pub studied: i64,
  pub correct: i64,
}

/// Per-day counts for the `days` calendar days ending at `today`,
/// oldest first, zero-filled for days without a session.
pub fn daily_breakdown(
  sessions: &[StudySession],
  today: NaiveDate,
  days: usize,
) -> Vec<DailyProgress> {
  (0..days)
    .rev()
    .filter_map(|offset| today.checked_sub_days(Days::new(offset as u64)))
    .map(|date| {
      let (studied, correct) = sessions
        .iter()
        .find(|s| s.date == date)
        .map(|s| (s.studied_count, s.correct_count))
        .unwrap_or((0, 0));
      DailyProgress {
        date,
        studied,
        correct,
      }
    })
    .collect()
}

/// Mastery breakdown for one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProgress {
  pub name: String,
  pub color: String,
  pub total: i64,
  pub mastered: i64,
  /// Reviewed at least once but not yet learned
  pub studying: i64,
}

pub fn category_progress(cards: &[Card], categories: &[Category]) -> Vec<CategoryProgress> {
  categories
    .iter()
    .map(|category| {
      let in_category: Vec<&Card> = cards
        .iter()
        .filter(|c| c.category == category.name)
        .collect();
      CategoryProgress {
        name: category.name.clone(),
        color: category.color.clone(),
        total: in_category.len() as i64,
        mastered: in_category.iter().filter(|c| c.is_learned).count() as i64,
        studying: in_category
          .iter()
          .filter(|c| !c.is_learned && c.last_reviewed_at.is_some())
          .count() as i64,
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Difficulty;
  use chrono::Utc;

  fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  fn session(date_str: &str, studied: i64, correct: i64) -> StudySession {
    StudySession {
      date: date(date_str),
      studied_count: studied,
      correct_count: correct,
      total_minutes: 10,
    }
  }

  // correct_rate

  #[test]
  fn test_correct_rate_no_sessions() {
    assert_eq!(correct_rate(&[]), 0);
  }

  #[test]
  fn test_correct_rate_zero_studied() {
    assert_eq!(correct_rate(&[session("2026-08-06", 0, 0)]), 0);
  }

  #[test]
  fn test_correct_rate_rounds() {
    // 2/3 = 66.67% -> 67
    assert_eq!(correct_rate(&[session("2026-08-06", 3, 2)]), 67);
    // 1/3 = 33.33% -> 33
    assert_eq!(correct_rate(&[session("2026-08-06", 3, 1)]), 33);
  }

  #[test]
  fn test_correct_rate_sums_across_sessions() {
    let sessions = vec![session("2026-08-05", 10, 9), session("2026-08-06", 10, 7)];
    // 16/20 = 80%
    assert_eq!(correct_rate(&sessions), 80);
  }

  // streak_days

  #[test]
  fn test_streak_no_sessions() {
    assert_eq!(streak_days(&[], date("2026-08-06")), 0);
  }

  #[test]
  fn test_streak_counts_consecutive_days_ending_today() {
    let sessions = vec![
      session("2026-08-04", 5, 5),
      session("2026-08-05", 5, 5),
      session("2026-08-06", 5, 5),
    ];
    assert_eq!(streak_days(&sessions, date("2026-08-06")), 3);
  }

  #[test]
  fn test_streak_zero_without_session_today() {
    let sessions = vec![session("2026-08-04", 5, 5), session("2026-08-05", 5, 5)];
    assert_eq!(streak_days(&sessions, date("2026-08-06")), 0);
  }

  #[test]
  fn test_streak_stops_at_gap() {
    let sessions = vec![
      session("2026-08-01", 5, 5),
      session("2026-08-02", 5, 5),
      // 2026-08-03 missed
      session("2026-08-04", 5, 5),
      session("2026-08-05", 5, 5),
      session("2026-08-06", 5, 5),
    ];
    assert_eq!(streak_days(&sessions, date("2026-08-06")), 3);
  }

  #[test]
  fn test_streak_order_independent() {
    let sessions = vec![session("2026-08-06", 5, 5), session("2026-08-05", 5, 5)];
    assert_eq!(streak_days(&sessions, date("2026-08-06")), 2);
  }

  // user_stats

  #[test]
  fn test_user_stats_totals() {
    let mut learned = Card::new(
      "a".to_string(),
      "b".to_string(),
      "Grammar".to_string(),
      None,
      Difficulty::Easy,
    );
    learned.is_learned = true;
    let fresh = Card::new(
      "c".to_string(),
      "d".to_string(),
      "Grammar".to_string(),
      None,
      Difficulty::Medium,
    );
    let sessions = vec![session("2026-08-06", 10, 8)];

    let stats = user_stats(&[learned, fresh], &sessions, date("2026-08-06"));
    assert_eq!(stats.total_cards, 2);
    assert_eq!(stats.learned_cards, 1);
    assert_eq!(stats.streak_days, 1);
    assert_eq!(stats.total_study_minutes, 10);
    assert_eq!(stats.average_correct_rate, 80);
  }

  // daily_breakdown

  #[test]
  fn test_daily_breakdown_zero_fills_and_orders() {
    let sessions = vec![session("2026-08-06", 12, 10), session("2026-08-04", 8, 7)];
    let breakdown = daily_breakdown(&sessions, date("2026-08-06"), 7);

    assert_eq!(breakdown.len(), 7);
    assert_eq!(breakdown[0].date, date("2026-07-31"));
    assert_eq!(breakdown[6].date, date("2026-08-06"));
    assert_eq!(breakdown[6].studied, 12);
    assert_eq!(breakdown[4].studied, 8);
    assert_eq!(breakdown[5].studied, 0);
    assert_eq!(breakdown[5].correct, 0);
  }

  // category_progress

  #[test]
  fn test_category_progress_counts() {
    let grammar = Category::new("Grammar".to_string(), "#F59E0B".to_string());
    let toeic = Category::new("TOEIC".to_string(), "#EF4444".to_string());

    let mut mastered = Card::new(
      "a".to_string(),
      "b".to_string(),
      "Grammar".to_string(),
      None,
      Difficulty::Easy,
    );
    mastered.is_learned = true;

    let mut studying = Card::new(
      "c".to_string(),
      "d".to_string(),
      "Grammar".to_string(),
      None,
      Difficulty::Hard,
    );
    studying.wrong_count = 2;
    studying.last_reviewed_at = Some(Utc::now());

    let untouched = Card::new(
      "e".to_string(),
      "f".to_string(),
      "Grammar".to_string(),
      None,
      Difficulty::Medium,
    );

    let cards = vec![mastered, studying, untouched];
    let progress = category_progress(&cards, &[grammar, toeic]);

    assert_eq!(progress.len(), 2);
    assert_eq!(progress[0].name, "Grammar");
    assert_eq!(progress[0].total, 3);
    assert_eq!(progress[0].mastered, 1);
    assert_eq!(progress[0].studying, 1);
    assert_eq!(progress[1].total, 0);
  }
}
