//! Games module - domain models, services, and traits.

mod games_model;
mod games_service;
mod games_traits;

pub use games_model::{Game, GameResult, GameWithPlayers, NewGame};
pub use games_service::GameService;
pub use games_traits::{GameRepositoryTrait, GameServiceTrait};
