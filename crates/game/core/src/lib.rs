//! Pure quiz rules and data types shared across the workspace.
//!
//! `game-core` defines the deck model ([`Game`], [`Card`], [`Show`]), swipe
//! judgment ([`scoring`]) and the synchronous session bookkeeping
//! ([`SessionProgress`]). Nothing here performs I/O or awaits; the runtime
//! crate layers asynchronous stores and state publication on top.
pub mod answer;
pub mod card;
pub mod direction;
pub mod error;
pub mod game;
pub mod progress;
pub mod scoring;

pub use answer::{GameAnswer, GameResult};
pub use card::{Card, Character, Show, ShowId};
pub use direction::SwipeDirection;
pub use error::GameError;
pub use game::Game;
pub use progress::{IgnoredSwipe, SessionProgress, SwipeOutcome};
