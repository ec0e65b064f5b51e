//! Games domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::people::Person;

/// Domain model representing a game tied to a goal.
///
/// `players` may hold the same name more than once; `winner` stays `None`
/// until the game is ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub name: String,
    pub goal: String,
    pub players: Vec<String>,
    pub winner: Option<String>,
}

impl Game {
    pub fn add_player(&mut self, person_name: impl Into<String>) {
        self.players.push(person_name.into());
    }

    /// Removes the first roster slot holding `person_name`.
    pub fn remove_player(&mut self, person_name: &str) -> Result<()> {
        let index = self
            .players
            .iter()
            .position(|p| p == person_name)
            .ok_or_else(|| Error::not_a_member(person_name, &self.name))?;
        self.players.remove(index);
        Ok(())
    }

    pub fn player_count(&self, person_name: &str) -> usize {
        self.players.iter().filter(|p| *p == person_name).count()
    }
}

impl From<NewGame> for Game {
    fn from(new_game: NewGame) -> Self {
        Game {
            name: new_game.name,
            goal: new_game.goal_name,
            players: Vec::new(),
            winner: None,
        }
    }
}

/// Input model for creating a new game
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewGame {
    pub name: String,
    pub goal_name: String,
}

/// Game snapshot with players and winner resolved to person records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameWithPlayers {
    pub name: String,
    pub goal: String,
    pub players: Vec<Person>,
    pub winner: Option<Person>,
}

/// Outcome of ending a game: the updated game and the winner after the streak update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResult {
    pub game: Game,
    pub winner: Person,
}
