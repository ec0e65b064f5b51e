use std::collections::HashMap;

use donation_game_core::games::Game;
use donation_game_core::goals::Goal;
use donation_game_core::people::Person;

/// A row that is stored under a unique name.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Goal {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Person {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Game {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Name-keyed table that iterates in insertion order.
///
/// Rows are never removed, so positions in `rows` stay valid for `index`.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Table<T> {
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&i| &self.rows[i])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.index.get(key).map(|&i| &mut self.rows[i])
    }

    /// Appends `row`, handing it back untouched if its key is taken.
    pub fn insert(&mut self, row: T) -> Result<(), T> {
        if self.contains(row.key()) {
            return Err(row);
        }
        self.index.insert(row.key().to_string(), self.rows.len());
        self.rows.push(row);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
