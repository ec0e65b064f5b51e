use donation_game_core::games::{Game, GameRepositoryTrait, GameResult, GameWithPlayers, NewGame};
use donation_game_core::{EntityKind, Error, Result};

use crate::db::{read_store, MemoryStore, WriteHandle};
use async_trait::async_trait;

pub struct GameRepository {
    store: MemoryStore,
    writer: WriteHandle,
}

impl GameRepository {
    pub fn new(store: MemoryStore, writer: WriteHandle) -> Self {
        GameRepository { store, writer }
    }
}

#[async_trait]
impl GameRepositoryTrait for GameRepository {
    fn load_games_with_players(&self) -> Result<Vec<GameWithPlayers>> {
        let registries = read_store(&self.store)?;
        Ok(registries
            .games
            .iter()
            .map(|game| registries.game_with_players(game))
            .collect())
    }

    fn get_game_with_players(&self, game_name: &str) -> Result<GameWithPlayers> {
        let registries = read_store(&self.store)?;
        registries
            .games
            .get(game_name)
            .map(|game| registries.game_with_players(game))
            .ok_or_else(|| Error::not_found(EntityKind::Game, game_name))
    }

    async fn insert_new_game(&self, new_game: NewGame) -> Result<Game> {
        self.writer
            .exec(move |registries| {
                if registries.games.contains(&new_game.name) {
                    return Err(Error::already_exists(EntityKind::Game, new_game.name));
                }
                if !registries.goals.contains(&new_game.goal_name) {
                    return Err(Error::not_found(EntityKind::Goal, new_game.goal_name));
                }
                let game = Game::from(new_game);
                registries
                    .games
                    .insert(game.clone())
                    .map_err(|rejected| Error::already_exists(EntityKind::Game, rejected.name))?;
                Ok(game)
            })
            .await
    }

    async fn add_player(&self, game_name: &str, person_name: &str) -> Result<Game> {
        let game_name = game_name.to_string();
        let person_name = person_name.to_string();
        self.writer
            .exec(move |registries| {
                let game = registries
                    .games
                    .get_mut(&game_name)
                    .ok_or_else(|| Error::not_found(EntityKind::Game, &game_name))?;
                if !registries.people.contains(&person_name) {
                    return Err(Error::not_found(EntityKind::Person, person_name));
                }
                game.add_player(person_name);
                Ok(game.clone())
            })
            .await
    }

    async fn remove_player(&self, game_name: &str, person_name: &str) -> Result<Game> {
        let game_name = game_name.to_string();
        let person_name = person_name.to_string();
        self.writer
            .exec(move |registries| {
                let game = registries
                    .games
                    .get_mut(&game_name)
                    .ok_or_else(|| Error::not_found(EntityKind::Game, &game_name))?;
                if !registries.people.contains(&person_name) {
                    return Err(Error::not_found(EntityKind::Person, person_name));
                }
                game.remove_player(&person_name)?;
                Ok(game.clone())
            })
            .await
    }

    async fn record_winner(&self, game_name: &str, winner_name: &str) -> Result<GameResult> {
        let game_name = game_name.to_string();
        let winner_name = winner_name.to_string();
        self.writer
            .exec(move |registries| {
                let game = registries
                    .games
                    .get_mut(&game_name)
                    .ok_or_else(|| Error::not_found(EntityKind::Game, &game_name))?;
                let winner = registries
                    .people
                    .get_mut(&winner_name)
                    .ok_or_else(|| Error::not_found(EntityKind::Winner, &winner_name))?;

                winner.record_win()?;
                game.winner = Some(winner.name.clone());

                Ok(GameResult {
                    game: game.clone(),
                    winner: winner.clone(),
                })
            })
            .await
    }
}
