use serde_json::Value;
use tokio::sync::broadcast;

/// One frame of the `/events/stream` feed.
///
/// `name` is the domain event name (`goal:created`, `game:ended`, ...) and
/// becomes the SSE `event:` field; `payload` becomes its JSON `data:`.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Fan-out of registry changes to SSE subscribers.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    /// `capacity` bounds how far a slow subscriber may fall behind before it
    /// starts losing events.
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    /// Returns how many subscribers received the event.
    pub fn publish(&self, event: ServerEvent) -> usize {
        let name = event.name;
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::trace!(event = name, receivers, "Event published");
                receivers
            }
            // Nobody is listening.
            Err(_) => 0,
        }
    }
}
