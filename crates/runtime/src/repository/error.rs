//! Error types raised by store implementations.

use game_core::GameError;
use thiserror::Error;

/// Errors surfaced by [`GameStore`](super::GameStore) implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("no game available to start a session")]
    NoGameAvailable,

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid deck: {0}")]
    InvalidDeck(#[from] GameError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
