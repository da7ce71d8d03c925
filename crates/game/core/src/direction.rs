//! Swipe gestures accepted by a session.

use strum::{Display, EnumIter, EnumString};

/// Direction of a single swipe.
///
/// Each game maps `Left` and `Right` to one of its two candidate shows; the
/// mapping is fixed for the whole deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SwipeDirection {
    Left,
    Right,
}
