use std::{convert::Infallible, sync::Arc, time::Duration};

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        Game, GameList, Goal, GoalList, MessageResponse, NewDonation, NewGame, NewGoal,
        NewPerson, PeopleList, Person,
    },
};
use anyhow::Context;
use axum::{
    extract::State,
    http::HeaderValue,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::get,
    Json, Router,
};
use futures_core::stream::Stream;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod games;
mod goals;
mod people;

#[utoipa::path(get, path = "/", responses((status = 200, body = MessageResponse)))]
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Donation Game API"))
}

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

async fn stream_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let receiver = BroadcastStream::new(state.event_bus.subscribe());
    let stream = tokio_stream::StreamExt::filter_map(receiver, |event| match event {
        Ok(evt) => {
            let sse_event = SseEvent::default().event(evt.name);
            let sse_event = if let Some(payload) = evt.payload {
                match sse_event.json_data(payload) {
                    Ok(ev) => ev,
                    Err(err) => {
                        tracing::error!(
                            "Failed to serialize SSE payload for {}: {}",
                            evt.name,
                            err
                        );
                        return None;
                    }
                }
            } else {
                sse_event.data("null")
            };
            Some(Ok(sse_event))
        }
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!("SSE subscriber lagged, {} events dropped", skipped);
            None
        }
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        welcome,
        healthz,
        readyz,
        goals::get_goals,
        goals::get_goal,
        goals::create_goal,
        people::get_people,
        people::get_person,
        people::create_person,
        people::donate,
        games::get_games,
        games::get_game,
        games::create_game,
        games::join_game,
        games::leave_game,
        games::start_game,
        games::end_game
    ),
    components(schemas(
        Goal,
        GoalList,
        NewGoal,
        Person,
        PeopleList,
        NewPerson,
        NewDonation,
        Game,
        GameList,
        NewGame,
        MessageResponse
    )),
    tags((name = "donation-game"))
)]
pub struct ApiDoc;

/// Builds the full HTTP router: resource routes under `/api/v1` plus the
/// welcome route and the OpenAPI document at the root.
pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{}'", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/events/stream", get(stream_events))
        .merge(goals::router())
        .merge(people::router())
        .merge(games::router());

    Ok(Router::new()
        .route("/", get(welcome))
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        // Set must wrap Propagate so the generated id is on the request first.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http()))
}
