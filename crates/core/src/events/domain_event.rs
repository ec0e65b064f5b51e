//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about registry changes. Runtime adapters
/// translate them into platform-specific actions (for the web server, a
/// Server-Sent Events broadcast).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal was registered.
    GoalCreated { goal_name: String },

    /// A person was registered and added to their goal's roster.
    PersonCreated {
        person_name: String,
        goal_name: String,
    },

    /// A donation was applied to a person and their goal.
    DonationMade {
        person_name: String,
        goal_name: String,
        amount: i64,
        /// Goal total after the donation
        goal_donations: i64,
    },

    /// A game was created for a goal.
    GameCreated { game_name: String, goal_name: String },

    /// A person was appended to a game's roster.
    PlayerJoined {
        game_name: String,
        person_name: String,
    },

    /// One roster occurrence of a person was removed from a game.
    PlayerLeft {
        game_name: String,
        person_name: String,
    },

    /// A game was started. Carries no state change.
    GameStarted { game_name: String },

    /// A game ended and its winner's streak was updated.
    GameEnded {
        game_name: String,
        winner_name: String,
        winstreak: i64,
    },
}

impl DomainEvent {
    pub fn goal_created(goal_name: impl Into<String>) -> Self {
        Self::GoalCreated {
            goal_name: goal_name.into(),
        }
    }

    pub fn person_created(person_name: impl Into<String>, goal_name: impl Into<String>) -> Self {
        Self::PersonCreated {
            person_name: person_name.into(),
            goal_name: goal_name.into(),
        }
    }

    pub fn game_created(game_name: impl Into<String>, goal_name: impl Into<String>) -> Self {
        Self::GameCreated {
            game_name: game_name.into(),
            goal_name: goal_name.into(),
        }
    }

    pub fn player_joined(game_name: impl Into<String>, person_name: impl Into<String>) -> Self {
        Self::PlayerJoined {
            game_name: game_name.into(),
            person_name: person_name.into(),
        }
    }

    pub fn player_left(game_name: impl Into<String>, person_name: impl Into<String>) -> Self {
        Self::PlayerLeft {
            game_name: game_name.into(),
            person_name: person_name.into(),
        }
    }

    pub fn game_started(game_name: impl Into<String>) -> Self {
        Self::GameStarted {
            game_name: game_name.into(),
        }
    }

    /// Stable `area:action` name used by adapters for routing and SSE event names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GoalCreated { .. } => "goal:created",
            Self::PersonCreated { .. } => "person:created",
            Self::DonationMade { .. } => "donation:made",
            Self::GameCreated { .. } => "game:created",
            Self::PlayerJoined { .. } => "game:player-joined",
            Self::PlayerLeft { .. } => "game:player-left",
            Self::GameStarted { .. } => "game:started",
            Self::GameEnded { .. } => "game:ended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = DomainEvent::player_joined("Race", "Alice");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "player_joined");
        assert_eq!(json["game_name"], "Race");
        assert_eq!(json["person_name"], "Alice");
    }

    #[test]
    fn names_are_namespaced() {
        assert_eq!(DomainEvent::goal_created("Trees").name(), "goal:created");
        assert_eq!(DomainEvent::game_started("Race").name(), "game:started");
    }
}
