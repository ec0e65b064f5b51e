use std::sync::Arc;

use crate::{config::Config, domain_events::WebDomainEventSink, events::EventBus};
use donation_game_core::{
    events::DomainEventSink,
    games::{GameService, GameServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    people::{PersonService, PersonServiceTrait},
};
use donation_game_storage_memory::{
    create_store, games::GameRepository, goals::GoalRepository, people::PersonRepository,
    spawn_writer,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub person_service: Arc<dyn PersonServiceTrait + Send + Sync>,
    pub game_service: Arc<dyn GameServiceTrait + Send + Sync>,
    pub event_bus: EventBus,
}

pub fn init_tracing() {
    let log_format = std::env::var("DG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds fresh, empty registries and the services over them.
///
/// Must be called from within a Tokio runtime: the registry writer is spawned here.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = create_store();
    let writer = spawn_writer(store.clone());

    let event_bus = EventBus::new(config.event_bus_capacity);
    let domain_event_sink: Arc<dyn DomainEventSink> =
        Arc::new(WebDomainEventSink::new(event_bus.clone()));

    let goal_repository = Arc::new(GoalRepository::new(store.clone(), writer.clone()));
    let goal_service =
        Arc::new(GoalService::new(goal_repository).with_event_sink(domain_event_sink.clone()));

    let person_repository = Arc::new(PersonRepository::new(store.clone(), writer.clone()));
    let person_service = Arc::new(
        PersonService::new(person_repository).with_event_sink(domain_event_sink.clone()),
    );

    let game_repository = Arc::new(GameRepository::new(store, writer));
    let game_service =
        Arc::new(GameService::new(game_repository).with_event_sink(domain_event_sink));

    tracing::info!("In-memory registries ready");

    Ok(Arc::new(AppState {
        goal_service,
        person_service,
        game_service,
        event_bus,
    }))
}
