//! Errors raised while checking the shape of a game.
//!
//! The session controller never rejects a game it receives; these errors are
//! for store implementations that build decks from untrusted input.

use crate::card::ShowId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game '{title}' has no cards")]
    EmptyDeck { title: String },

    #[error("left and right targets share the same id {id}")]
    AmbiguousSides { id: ShowId },

    #[error("card {index} ({character}) belongs to show {show}, which is neither side")]
    UnreachableCard {
        index: usize,
        character: String,
        show: ShowId,
    },
}
