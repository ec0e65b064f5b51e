//! In-memory storage implementation for the Donation Game.
//!
//! This crate owns the goal, person and game registries and implements the
//! repository traits defined in `donation-game-core`:
//! - Registry tables keyed by unique name, iterated in registration order
//! - A single writer actor that serializes every mutation
//! - Repository implementations that resolve name references into snapshots
//!
//! ```text
//!            core (domain)
//!                  │
//!                  ▼
//!      storage-memory (this crate)
//!                  │
//!                  ▼
//!     Arc<RwLock<Registries>> + writer actor
//! ```
//!
//! Nothing is persisted; registries live as long as the process.

pub mod db;
pub mod errors;

// Repository implementations
pub mod games;
pub mod goals;
pub mod people;

// Re-export store utilities
pub use db::{create_store, read_store, spawn_writer, MemoryStore, Registries, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from donation-game-core for convenience
pub use donation_game_core::errors::{Error, Result};
