//! In-memory GameStore implementation for tests and local runs.

use std::collections::VecDeque;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use game_core::{Game, GameResult};

use crate::repository::{GameStore, Result, StoreError};

/// In-memory implementation of [`GameStore`].
///
/// Games are handed out in insertion order. When `cycle` is enabled a handed
/// out game is pushed back to the end of the queue, so the store never runs
/// dry. Stored results are kept in submission order.
pub struct InMemoryGameStore {
    games: Mutex<VecDeque<Game>>,
    cycle: bool,
    results: RwLock<Vec<GameResult>>,
}

impl InMemoryGameStore {
    /// Create a store that hands out each game once.
    pub fn new(games: impl IntoIterator<Item = Game>) -> Self {
        Self {
            games: Mutex::new(games.into_iter().collect()),
            cycle: false,
            results: RwLock::new(Vec::new()),
        }
    }

    /// Create a store that serves the same game for every session.
    pub fn repeating(game: Game) -> Self {
        Self::new([game]).cycled()
    }

    /// Rotate games instead of consuming them.
    pub fn cycled(mut self) -> Self {
        self.cycle = true;
        self
    }
}

impl Default for InMemoryGameStore {
    fn default() -> Self {
        Self::new([])
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn create_new_game(&self) -> Result<Game> {
        let mut games = self.games.lock().map_err(|_| StoreError::LockPoisoned)?;
        let game = games.pop_front().ok_or(StoreError::NoGameAvailable)?;

        if self.cycle {
            games.push_back(game.clone());
        }

        tracing::debug!(title = %game.title, cards = game.len(), "Handing out game");
        Ok(game)
    }

    async fn store_result(&self, result: GameResult) -> Result<()> {
        let mut results = self
            .results
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        tracing::debug!(
            title = %result.title,
            earned = result.earned_points,
            total = result.total_points,
            "Stored result in memory"
        );
        results.push(result);
        Ok(())
    }

    async fn latest_result(&self) -> Result<Option<GameResult>> {
        let results = self
            .results
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(results.last().cloned())
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Card, Character, Show};

    use super::*;

    fn game(title: &str) -> Game {
        let left = Show::new(1, "Left");
        let right = Show::new(2, "Right");
        Game::new(
            title,
            vec![Card::new(Character::new("solo"), left.clone())],
            left,
            right,
        )
    }

    #[tokio::test]
    async fn hands_out_games_in_order_then_runs_dry() {
        let store = InMemoryGameStore::new([game("one"), game("two")]);

        assert_eq!(store.create_new_game().await.unwrap().title, "one");
        assert_eq!(store.create_new_game().await.unwrap().title, "two");
        assert!(matches!(
            store.create_new_game().await,
            Err(StoreError::NoGameAvailable)
        ));
    }

    #[tokio::test]
    async fn repeating_store_never_runs_dry() {
        let store = InMemoryGameStore::repeating(game("again"));

        for _ in 0..3 {
            assert_eq!(store.create_new_game().await.unwrap().title, "again");
        }
    }

    #[tokio::test]
    async fn latest_result_tracks_last_submission() {
        let store = InMemoryGameStore::default();
        assert_eq!(store.latest_result().await.unwrap(), None);

        let first = GameResult::from_chronological("first", &[]);
        let second = GameResult::from_chronological("second", &[]);
        store.store_result(first).await.unwrap();
        store.store_result(second.clone()).await.unwrap();

        assert_eq!(store.latest_result().await.unwrap(), Some(second));
    }
}
