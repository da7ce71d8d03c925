//! Event payloads published by the session worker.

use game_core::GameAnswer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The store produced a game and the snapshot now holds it.
    GameLoaded { title: String, cards: usize },

    /// The store failed to produce a game; the view keeps showing loading.
    GameCreationFailed { error: String },

    /// A card was judged. `cursor` is the index of the next card.
    SwipeJudged { cursor: usize, answer: GameAnswer },

    /// The last card was judged and the result was handed to the store.
    SessionCompleted {
        total_points: usize,
        earned_points: usize,
    },

    /// The store acknowledged the result; navigation was requested.
    ResultStored,

    /// The store rejected the result; no navigation happens.
    ResultStoreFailed { error: String },

    /// The controller was torn down; nothing else will be published.
    Disposed,
}
