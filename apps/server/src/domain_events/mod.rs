//! Domain events runtime bridge for the web server.
//!
//! Receives domain events via DomainEventSink and republishes them as
//! `ServerEvent`s for the `/events/stream` SSE endpoint.

mod sink;

pub use sink::WebDomainEventSink;
