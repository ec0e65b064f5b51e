//! Core error types for the Donation Game.
//!
//! These errors are storage-agnostic. The storage layer reports missing or
//! duplicate records through them, and the server maps them to HTTP statuses.

use std::fmt;

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of entity an error refers to.
///
/// `Winner` is a person looked up in the role of a game's winner; it exists so
/// that end-game failures read "Winner 'x' not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Goal,
    Person,
    Game,
    Winner,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Goal => "Goal",
            EntityKind::Person => "Person",
            EntityKind::Game => "Game",
            EntityKind::Winner => "Winner",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root error type for the Donation Game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: EntityKind, name: String },

    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntityKind, name: String },

    #[error("Person '{person}' is not a player in game '{game}'")]
    NotAMember { person: String, game: String },

    #[error("{kind} '{name}' {counter} would leave the 64-bit integer range")]
    CounterOverflow {
        kind: EntityKind,
        name: String,
        counter: &'static str,
    },

    #[error("Repository error: {0}")]
    Repository(String),
}

impl Error {
    pub fn already_exists(kind: EntityKind, name: impl Into<String>) -> Self {
        Error::AlreadyExists {
            kind,
            name: name.into(),
        }
    }

    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn not_a_member(person: impl Into<String>, game: impl Into<String>) -> Self {
        Error::NotAMember {
            person: person.into(),
            game: game.into(),
        }
    }

    pub fn counter_overflow(
        kind: EntityKind,
        name: impl Into<String>,
        counter: &'static str,
    ) -> Self {
        Error::CounterOverflow {
            kind,
            name: name.into(),
            counter,
        }
    }
}
