//! View-facing state and the container that publishes it.
//!
//! All mutation goes through [`StateContainer::update`]: the current snapshot
//! is cloned into a working copy, the mutator edits the copy, and the copy is
//! committed as a brand new snapshot. Observers hold `Arc`s to committed
//! snapshots only, so they never see a half-applied update.

use std::sync::Arc;

use game_core::Game;
use tokio::sync::watch;

/// State type that can be held by a [`StateContainer`].
pub trait ViewState: Clone + Send + Sync + 'static {
    /// Snapshot published before the first update.
    fn initial() -> Self;
}

/// What the game screen needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameViewState {
    /// Loaded game; `None` until the store answers.
    pub game: Option<Arc<Game>>,
    pub is_loading: bool,
}

impl ViewState for GameViewState {
    fn initial() -> Self {
        Self {
            game: None,
            is_loading: true,
        }
    }
}

impl Default for GameViewState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Owner of the current snapshot.
///
/// Lives on the session worker task; views observe it through
/// [`watch::Receiver`]s obtained from [`StateContainer::subscribe`].
pub struct StateContainer<S: ViewState> {
    current: Arc<S>,
    revision: u64,
    publisher: watch::Sender<Arc<S>>,
}

impl<S: ViewState> StateContainer<S> {
    /// Create a container holding [`ViewState::initial`].
    pub fn initialize() -> Self {
        let current = Arc::new(S::initial());
        let (publisher, _) = watch::channel(Arc::clone(&current));

        Self {
            current,
            revision: 0,
            publisher,
        }
    }

    /// Latest committed snapshot.
    pub fn snapshot(&self) -> Arc<S> {
        Arc::clone(&self.current)
    }

    /// Number of committed updates.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
        self.publisher.subscribe()
    }

    /// Apply `mutator` to a working copy and commit it.
    ///
    /// Observers are notified exactly once per call, after the whole batch of
    /// field changes has been applied.
    pub fn update<F>(&mut self, mutator: F) -> Arc<S>
    where
        F: FnOnce(&mut S),
    {
        let mut draft = S::clone(&self.current);
        mutator(&mut draft);

        let committed = Arc::new(draft);
        self.current = Arc::clone(&committed);
        self.revision += 1;
        self.publisher.send_replace(Arc::clone(&committed));

        committed
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Card, Character, Show};

    use super::*;

    fn game() -> Game {
        let left = Show::new(1, "Left");
        let right = Show::new(2, "Right");
        Game::new(
            "Test",
            vec![Card::new(Character::new("one"), left.clone())],
            left,
            right,
        )
    }

    #[test]
    fn initializes_to_loading_without_game() {
        let container = StateContainer::<GameViewState>::initialize();
        let snapshot = container.snapshot();

        assert!(snapshot.game.is_none());
        assert!(snapshot.is_loading);
        assert_eq!(container.revision(), 0);
    }

    #[test]
    fn update_commits_all_fields_at_once() {
        let mut container = StateContainer::<GameViewState>::initialize();
        let mut observer = container.subscribe();
        assert!(!observer.has_changed().unwrap());

        container.update(|state| {
            state.game = Some(Arc::new(game()));
            state.is_loading = false;
        });

        assert!(observer.has_changed().unwrap());
        let seen = observer.borrow_and_update().clone();
        assert_eq!(seen.game.as_deref().map(|g| g.title.as_str()), Some("Test"));
        assert!(!seen.is_loading);
        assert!(!observer.has_changed().unwrap());
        assert_eq!(container.revision(), 1);
    }

    #[test]
    fn snapshots_are_replaced_not_mutated() {
        let mut container = StateContainer::<GameViewState>::initialize();
        let before = container.snapshot();

        container.update(|state| state.is_loading = false);

        assert!(before.is_loading);
        assert!(!container.snapshot().is_loading);
        assert!(!Arc::ptr_eq(&before, &container.snapshot()));
    }

    #[test]
    fn every_update_bumps_revision() {
        let mut container = StateContainer::<GameViewState>::initialize();

        for expected in 1..=3 {
            container.update(|_| {});
            assert_eq!(container.revision(), expected);
        }
    }
}
