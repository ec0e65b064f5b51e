use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::games::games_model::{Game, GameResult, GameWithPlayers, NewGame};
use crate::games::games_traits::{GameRepositoryTrait, GameServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct GameService {
    game_repo: Arc<dyn GameRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GameService {
    pub fn new(game_repo: Arc<dyn GameRepositoryTrait>) -> Self {
        GameService {
            game_repo,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }
}

#[async_trait]
impl GameServiceTrait for GameService {
    fn get_games(&self) -> Result<Vec<GameWithPlayers>> {
        self.game_repo.load_games_with_players()
    }

    fn get_game(&self, game_name: &str) -> Result<GameWithPlayers> {
        self.game_repo.get_game_with_players(game_name)
    }

    async fn create_game(&self, new_game: NewGame) -> Result<Game> {
        let game = self.game_repo.insert_new_game(new_game).await?;
        log::info!("Created game '{}' for goal '{}'", game.name, game.goal);
        self.event_sink
            .emit(DomainEvent::game_created(&game.name, &game.goal));
        Ok(game)
    }

    async fn join_game(&self, game_name: &str, person_name: &str) -> Result<Game> {
        let game = self.game_repo.add_player(game_name, person_name).await?;
        log::debug!(
            "'{}' joined '{}' ({} players)",
            person_name,
            game_name,
            game.players.len()
        );
        self.event_sink
            .emit(DomainEvent::player_joined(game_name, person_name));
        Ok(game)
    }

    async fn leave_game(&self, game_name: &str, person_name: &str) -> Result<Game> {
        let game = self
            .game_repo
            .remove_player(game_name, person_name)
            .await
            .inspect_err(|e| log::warn!("Leave rejected: {}", e))?;
        log::debug!("'{}' left '{}'", person_name, game_name);
        self.event_sink
            .emit(DomainEvent::player_left(game_name, person_name));
        Ok(game)
    }

    async fn start_game(&self, game_name: &str) -> Result<()> {
        // Starting only confirms the game exists; game logic is not modelled.
        self.game_repo.get_game_with_players(game_name)?;
        log::info!("Game '{}' started", game_name);
        self.event_sink.emit(DomainEvent::game_started(game_name));
        Ok(())
    }

    async fn end_game(&self, game_name: &str, winner_name: &str) -> Result<GameResult> {
        let result = self.game_repo.record_winner(game_name, winner_name).await?;
        log::info!(
            "Game '{}' ended, winner '{}' on a streak of {}",
            game_name,
            result.winner.name,
            result.winner.winstreak
        );
        self.event_sink.emit(DomainEvent::GameEnded {
            game_name: result.game.name.clone(),
            winner_name: result.winner.name.clone(),
            winstreak: result.winner.winstreak,
        });
        Ok(result)
    }
}
