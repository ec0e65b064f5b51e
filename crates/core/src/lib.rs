//! Donation Game Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for goals, people and games.
//! It is storage-agnostic and defines repository traits that are implemented
//! by the `storage-memory` crate.

pub mod errors;
pub mod events;
pub mod games;
pub mod goals;
pub mod people;

// Re-export error types
pub use errors::EntityKind;
pub use errors::Error;
pub use errors::Result;
