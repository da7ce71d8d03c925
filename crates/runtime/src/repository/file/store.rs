//! JSON file-backed GameStore implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use game_core::{Game, GameResult};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::repository::{GameStore, Result};

/// File-based implementation of [`GameStore`].
///
/// # File Format
///
/// - Deck: a single JSON document describing a [`Game`], re-read for every
///   new session and validated with [`Game::validate`].
/// - Results: one JSON-encoded [`GameResult`] per line, appended in
///   submission order. The last non-empty line is the latest result.
pub struct JsonFileStore {
    deck_path: PathBuf,
    results_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(deck_path: impl AsRef<Path>, results_path: impl AsRef<Path>) -> Self {
        Self {
            deck_path: deck_path.as_ref().to_path_buf(),
            results_path: results_path.as_ref().to_path_buf(),
        }
    }

    pub fn deck_path(&self) -> &Path {
        &self.deck_path
    }

    pub fn results_path(&self) -> &Path {
        &self.results_path
    }
}

#[async_trait]
impl GameStore for JsonFileStore {
    async fn create_new_game(&self) -> Result<Game> {
        let bytes = fs::read(&self.deck_path).await?;
        let game: Game = serde_json::from_slice(&bytes)?;
        game.validate()?;

        tracing::debug!(
            "Loaded deck '{}' ({} cards) from {}",
            game.title,
            game.len(),
            self.deck_path.display()
        );

        Ok(game)
    }

    async fn store_result(&self, result: GameResult) -> Result<()> {
        if let Some(parent) = self.results_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let mut line = serde_json::to_vec(&result)?;
        line.push(b'\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.results_path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;

        tracing::debug!(
            "Appended result for '{}' to {}",
            result.title,
            self.results_path.display()
        );

        Ok(())
    }

    async fn latest_result(&self) -> Result<Option<GameResult>> {
        if !fs::try_exists(&self.results_path).await? {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.results_path).await?;
        let Some(line) = contents.lines().rev().find(|line| !line.trim().is_empty()) else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(line)?))
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Card, Character, Show, SwipeDirection, scoring};
    use tempfile::TempDir;

    use super::*;
    use crate::repository::StoreError;

    fn deck() -> Game {
        let left = Show::new(7, "Breaking Bad");
        let right = Show::new(8, "The Wire");
        Game::new(
            "Crime drama",
            vec![
                Card::new(Character::new("Walter White"), left.clone()),
                Card::new(Character::new("Omar Little"), right.clone()),
            ],
            left,
            right,
        )
    }

    fn write_deck(dir: &TempDir, game: &Game) -> PathBuf {
        let path = dir.path().join("deck.json");
        std::fs::write(&path, serde_json::to_vec_pretty(game).unwrap()).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_deck_from_json() {
        let dir = TempDir::new().unwrap();
        let deck_path = write_deck(&dir, &deck());
        let store = JsonFileStore::new(&deck_path, dir.path().join("results.jsonl"));

        let game = store.create_new_game().await.unwrap();

        assert_eq!(game, deck());
    }

    #[tokio::test]
    async fn rejects_malformed_deck() {
        let dir = TempDir::new().unwrap();
        let mut broken = deck();
        broken.cards.clear();
        let deck_path = write_deck(&dir, &broken);
        let store = JsonFileStore::new(&deck_path, dir.path().join("results.jsonl"));

        assert!(matches!(
            store.create_new_game().await,
            Err(StoreError::InvalidDeck(_))
        ));
    }

    #[tokio::test]
    async fn missing_deck_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"), dir.path().join("r.jsonl"));

        assert!(matches!(
            store.create_new_game().await,
            Err(StoreError::Io(_))
        ));
    }

    #[tokio::test]
    async fn appends_results_and_reads_back_latest() {
        let dir = TempDir::new().unwrap();
        let results_path = dir.path().join("nested").join("results.jsonl");
        let store = JsonFileStore::new(dir.path().join("deck.json"), &results_path);
        assert_eq!(store.latest_result().await.unwrap(), None);

        let game = deck();
        let first_answer = scoring::judge(&game, &game.cards[0], SwipeDirection::Left);
        let first = GameResult::from_chronological("first", &[first_answer]);
        let second = GameResult::from_chronological("second", &[]);

        store.store_result(first.clone()).await.unwrap();
        store.store_result(second.clone()).await.unwrap();

        assert_eq!(store.latest_result().await.unwrap(), Some(second.clone()));

        let stored: Vec<GameResult> = std::fs::read_to_string(&results_path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(stored, vec![first, second]);
    }
}
