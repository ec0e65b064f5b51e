//! Storage-specific error types.
//!
//! These errors are internal to the storage layer and are converted to
//! `donation_game_core::Error` before being returned to callers.

use donation_game_core::errors::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Registry lock poisoned")]
    LockPoisoned,

    #[error("Writer actor stopped")]
    WriterStopped,
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Repository(err.to_string())
    }
}
