//! Card repository over the key-value store

use rusqlite::{Connection, Result};

use crate::domain::Card;

use super::kv::{CARDS_KEY, read_collection, write_collection};

pub fn load_cards(conn: &Connection) -> Result<Vec<Card>> {
    read_collection(conn, CARDS_KEY)
}

pub fn save_cards(conn: &Connection, cards: &[Card]) -> Result<()> {
    write_collection(conn, CARDS_KEY, cards)
}

pub fn get_card_by_id(conn: &Connection, id: &str) -> Result<Option<Card>> {
    let cards = load_cards(conn)?;
    Ok(cards.into_iter().find(|c| c.id == id))
}

/// Insert a new card or replace the card with the same id
pub fn put_card(conn: &Connection, card: &Card) -> Result<()> {
    let mut cards = load_cards(conn)?;
    match cards.iter_mut().find(|c| c.id == card.id) {
        Some(existing) => *existing = card.clone(),
        None => cards.push(card.clone()),
    }
    save_cards(conn, &cards)
}

// TODO: Planned feature - card management screen with per-card delete
#[allow(dead_code)]
pub fn delete_card(conn: &Connection, id: &str) -> Result<bool> {
    let mut cards = load_cards(conn)?;
    let before = cards.len();
    cards.retain(|c| c.id != id);
    let removed = cards.len() != before;
    if removed {
        save_cards(conn, &cards)?;
    }
    Ok(removed)
}
