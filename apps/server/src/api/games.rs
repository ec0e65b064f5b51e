use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Game, GameList, MessageResponse, NewGame, PlayerQuery, WinnerQuery},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

#[utoipa::path(
    get,
    path = "/api/v1/games",
    responses((status = 200, body = GameList))
)]
pub async fn get_games(State(state): State<Arc<AppState>>) -> ApiResult<Json<GameList>> {
    let games = state.game_service.get_games()?;
    Ok(Json(GameList {
        games: games.into_iter().map(Game::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/games/{name}",
    params(("name" = String, Path, description = "Game name")),
    responses((status = 200, body = Game), (status = 404, description = "Game not found"))
)]
pub async fn get_game(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Game>> {
    let game = state.game_service.get_game(&name)?;
    Ok(Json(game.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/games",
    request_body = NewGame,
    responses(
        (status = 201, body = MessageResponse),
        (status = 400, description = "Game already exists"),
        (status = 404, description = "Goal not found")
    )
)]
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(game): Json<NewGame>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let g = state.game_service.create_game(game.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Game {} created successfully",
            g.name
        ))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/games/{name}/join",
    params(("name" = String, Path, description = "Game name"), PlayerQuery),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, description = "Game or person not found")
    )
)]
pub async fn join_game(
    Path(name): Path<String>,
    Query(q): Query<PlayerQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    state.game_service.join_game(&name, &q.person_name).await?;
    Ok(Json(MessageResponse::new(format!(
        "{} joined game {}",
        q.person_name, name
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/games/{name}/leave",
    params(("name" = String, Path, description = "Game name"), PlayerQuery),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, description = "Game or person not found"),
        (status = 409, description = "Person is not a player in the game")
    )
)]
pub async fn leave_game(
    Path(name): Path<String>,
    Query(q): Query<PlayerQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    state.game_service.leave_game(&name, &q.person_name).await?;
    Ok(Json(MessageResponse::new(format!(
        "{} left game {}",
        q.person_name, name
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/games/{name}/start",
    params(("name" = String, Path, description = "Game name")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, description = "Game not found")
    )
)]
pub async fn start_game(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    state.game_service.start_game(&name).await?;
    Ok(Json(MessageResponse::new(format!("Game {} started", name))))
}

/// Records the winner and bumps their win-streak.
#[utoipa::path(
    post,
    path = "/api/v1/games/{name}/end",
    params(("name" = String, Path, description = "Game name"), WinnerQuery),
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, description = "Game or winner not found"),
        (status = 422, description = "Win-streak would overflow")
    )
)]
pub async fn end_game(
    Path(name): Path<String>,
    Query(q): Query<WinnerQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    let result = state.game_service.end_game(&name, &q.winner_name).await?;
    Ok(Json(MessageResponse::new(format!(
        "Game {} ended with {} as winner",
        result.game.name, result.winner.name
    ))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games", get(get_games).post(create_game))
        .route("/games/{name}", get(get_game))
        .route("/games/{name}/join", post(join_game))
        .route("/games/{name}/leave", post(leave_game))
        .route("/games/{name}/start", post(start_game))
        .route("/games/{name}/end", post(end_game))
}
