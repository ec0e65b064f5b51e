//! Registry store shared by all repositories.

mod table;
pub mod write_actor;

use std::sync::{Arc, RwLock, RwLockReadGuard};

use donation_game_core::errors::Result;
use donation_game_core::games::{Game, GameWithPlayers};
use donation_game_core::goals::{Goal, GoalWithPeople};
use donation_game_core::people::Person;

use crate::errors::StorageError;

pub use table::{Keyed, Table};
pub use write_actor::{spawn_writer, WriteHandle};

/// Shared handle to the registries. Writes go through [`WriteHandle`].
pub type MemoryStore = Arc<RwLock<Registries>>;

/// The three registries. Cross references are stored as names.
#[derive(Debug, Default)]
pub struct Registries {
    pub goals: Table<Goal>,
    pub people: Table<Person>,
    pub games: Table<Game>,
}

impl Registries {
    fn resolve_people<'a>(&self, names: impl IntoIterator<Item = &'a String>) -> Vec<Person> {
        names
            .into_iter()
            .filter_map(|name| self.people.get(name).cloned())
            .collect()
    }

    pub fn goal_with_people(&self, goal: &Goal) -> GoalWithPeople {
        GoalWithPeople::new(goal, self.resolve_people(&goal.people))
    }

    pub fn game_with_players(&self, game: &Game) -> GameWithPlayers {
        GameWithPlayers {
            name: game.name.clone(),
            goal: game.goal.clone(),
            players: self.resolve_people(&game.players),
            winner: game
                .winner
                .as_deref()
                .and_then(|name| self.people.get(name).cloned()),
        }
    }
}

pub fn create_store() -> MemoryStore {
    Arc::new(RwLock::new(Registries::default()))
}

/// Takes a shared read lock on the registries.
pub fn read_store(store: &MemoryStore) -> Result<RwLockReadGuard<'_, Registries>> {
    store
        .read()
        .map_err(|_| StorageError::LockPoisoned.into())
}
