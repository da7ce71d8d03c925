//! Quiz units: the subjects players see and the targets they match them to.

use std::fmt;

/// Unique identifier of a [`Show`].
///
/// Judging compares shows by this identifier only; titles are presentation
/// data and may collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShowId(pub u64);

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Matching target a card can belong to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Show {
    pub id: ShowId,
    pub title: String,
}

impl Show {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ShowId(id),
            title: title.into(),
        }
    }

    /// Returns true if both shows carry the same identity.
    pub fn same_as(&self, other: &Show) -> bool {
        self.id == other.id
    }
}

/// Subject printed on a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One quiz unit: a character and the show it truly belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub character: Character,
    pub show: Show,
}

impl Card {
    pub fn new(character: Character, show: Show) -> Self {
        Self { character, show }
    }
}
