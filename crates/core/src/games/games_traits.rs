use crate::errors::Result;
use crate::games::games_model::{Game, GameResult, GameWithPlayers, NewGame};
use async_trait::async_trait;

/// Trait for game repository operations
#[async_trait]
pub trait GameRepositoryTrait: Send + Sync {
    fn load_games_with_players(&self) -> Result<Vec<GameWithPlayers>>;
    fn get_game_with_players(&self, game_name: &str) -> Result<GameWithPlayers>;
    async fn insert_new_game(&self, new_game: NewGame) -> Result<Game>;
    async fn add_player(&self, game_name: &str, person_name: &str) -> Result<Game>;
    async fn remove_player(&self, game_name: &str, person_name: &str) -> Result<Game>;
    /// Sets the winner and applies the streak rule to that person.
    async fn record_winner(&self, game_name: &str, winner_name: &str) -> Result<GameResult>;
}

/// Trait for game service operations
#[async_trait]
pub trait GameServiceTrait: Send + Sync {
    fn get_games(&self) -> Result<Vec<GameWithPlayers>>;
    fn get_game(&self, game_name: &str) -> Result<GameWithPlayers>;
    async fn create_game(&self, new_game: NewGame) -> Result<Game>;
    async fn join_game(&self, game_name: &str, person_name: &str) -> Result<Game>;
    async fn leave_game(&self, game_name: &str, person_name: &str) -> Result<Game>;
    async fn start_game(&self, game_name: &str) -> Result<()>;
    async fn end_game(&self, game_name: &str, winner_name: &str) -> Result<GameResult>;
}
