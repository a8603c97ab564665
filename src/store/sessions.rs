//! Daily session tracking
//!
//! One `StudySession` record per local calendar day. `record_answer`
//! creates the day's record lazily and bumps its counters;
//! `finish_session` credits the coarse time estimate exactly once per
//! completed session, not per answer.

use chrono::NaiveDate;
use rusqlite::{Connection, Result};

use crate::config::SESSION_TIME_INCREMENT_MINUTES;
use crate::domain::StudySession;

use super::kv::{SESSIONS_KEY, read_collection, write_collection};

pub fn load_sessions(conn: &Connection) -> Result<Vec<StudySession>> {
    read_collection(conn, SESSIONS_KEY)
}

pub fn save_sessions(conn: &Connection, sessions: &[StudySession]) -> Result<()> {
    write_collection(conn, SESSIONS_KEY, sessions)
}

/// Record one answered card against the given day's session
pub fn record_answer(conn: &Connection, date: NaiveDate, was_correct: bool) -> Result<StudySession> {
    let mut sessions = load_sessions(conn)?;
    let session = match sessions.iter_mut().find(|s| s.date == date) {
        Some(existing) => existing,
        None => {
            sessions.push(StudySession::new(date));
            sessions.last_mut().unwrap()
        }
    };

    session.studied_count += 1;
    if was_correct {
        session.correct_count += 1;
    }

    let updated = session.clone();
    save_sessions(conn, &sessions)?;
    Ok(updated)
}

/// Credit the fixed time estimate for one finished session
pub fn finish_session(conn: &Connection, date: NaiveDate) -> Result<StudySession> {
    let mut sessions = load_sessions(conn)?;
    let session = match sessions.iter_mut().find(|s| s.date == date) {
        Some(existing) => existing,
        None => {
            sessions.push(StudySession::new(date));
            sessions.last_mut().unwrap()
        }
    };

    session.total_minutes += SESSION_TIME_INCREMENT_MINUTES;

    let updated = session.clone();
    save_sessions(conn, &sessions)?;
    Ok(updated)
}
