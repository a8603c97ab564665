//! Category repository over the key-value store

use rusqlite::{Connection, Result};

use crate::domain::Category;

use super::kv::{CATEGORIES_KEY, read_collection, write_collection};

pub fn load_categories(conn: &Connection) -> Result<Vec<Category>> {
    read_collection(conn, CATEGORIES_KEY)
}

pub fn save_categories(conn: &Connection, categories: &[Category]) -> Result<()> {
    write_collection(conn, CATEGORIES_KEY, categories)
}

/// Append a category. Display-name uniqueness is not enforced.
pub fn add_category(conn: &Connection, category: &Category) -> Result<()> {
    let mut categories = load_categories(conn)?;
    categories.push(category.clone());
    save_categories(conn, &categories)
}
