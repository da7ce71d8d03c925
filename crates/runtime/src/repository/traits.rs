//! Store contract consumed by the session controller.

use std::sync::Arc;

use async_trait::async_trait;
use game_core::{Game, GameResult};

use super::error::Result;

/// Asynchronous source of games and sink of results.
///
/// The controller treats the store as opaque: it does not know how decks are
/// built or where results go. Retry and timeout policies, if any, belong to
/// the implementation.
///
/// # Implementations
///
/// - `InMemoryGameStore`: queue of prepared games, results kept in memory
/// - `JsonFileStore`: deck read from a JSON file, results appended as JSON lines
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Produce the game for a new session.
    async fn create_new_game(&self) -> Result<Game>;

    /// Persist the result of a finished session.
    async fn store_result(&self, result: GameResult) -> Result<()>;

    /// Most recently stored result, used by the result screen.
    async fn latest_result(&self) -> Result<Option<GameResult>>;
}

#[async_trait]
impl<T> GameStore for Arc<T>
where
    T: GameStore + ?Sized,
{
    async fn create_new_game(&self) -> Result<Game> {
        (**self).create_new_game().await
    }

    async fn store_result(&self, result: GameResult) -> Result<()> {
        (**self).store_result(result).await
    }

    async fn latest_result(&self) -> Result<Option<GameResult>> {
        (**self).latest_result().await
    }
}
