//! Web domain event sink implementation.
//!
//! Republishes domain events on the server's event bus so connected SSE
//! clients see registry changes as they happen.

use donation_game_core::events::{DomainEvent, DomainEventSink};

use crate::events::{EventBus, ServerEvent};

/// Domain event sink for the web server runtime.
pub struct WebDomainEventSink {
    event_bus: EventBus,
}

impl WebDomainEventSink {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }
}

impl DomainEventSink for WebDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match serde_json::to_value(&event) {
            Ok(payload) => {
                tracing::debug!(event = event.name(), "Publishing domain event");
                self.event_bus
                    .publish(ServerEvent::with_payload(event.name(), payload));
            }
            Err(err) => {
                tracing::warn!("Failed to serialize domain event {}: {}", event.name(), err);
            }
        }
    }
}
