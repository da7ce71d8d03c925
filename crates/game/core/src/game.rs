//! Game definition: a titled deck plus its fixed left/right mapping.

use crate::card::{Card, Show};
use crate::direction::SwipeDirection;
use crate::error::GameError;

/// A playable deck.
///
/// `cards` is fixed at creation; its length is the number of swipes needed to
/// finish a session. `left_show` and `right_show` say what each swipe
/// direction means for every card in the deck.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub title: String,
    pub cards: Vec<Card>,
    pub left_show: Show,
    pub right_show: Show,
}

impl Game {
    pub fn new(
        title: impl Into<String>,
        cards: Vec<Card>,
        left_show: Show,
        right_show: Show,
    ) -> Self {
        Self {
            title: title.into(),
            cards,
            left_show,
            right_show,
        }
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Show claimed by a swipe in `direction`.
    pub fn show_for(&self, direction: SwipeDirection) -> &Show {
        match direction {
            SwipeDirection::Left => &self.left_show,
            SwipeDirection::Right => &self.right_show,
        }
    }

    /// Direction that judges `card` as correct, if any.
    pub fn winning_direction(&self, card: &Card) -> Option<SwipeDirection> {
        if self.left_show.same_as(&card.show) {
            Some(SwipeDirection::Left)
        } else if self.right_show.same_as(&card.show) {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    /// Checks that the deck is playable: non-empty, two distinct sides, and
    /// every card answerable by one of them.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck {
                title: self.title.clone(),
            });
        }

        if self.left_show.same_as(&self.right_show) {
            return Err(GameError::AmbiguousSides {
                id: self.left_show.id,
            });
        }

        if let Some((index, card)) = self
            .cards
            .iter()
            .enumerate()
            .find(|(_, card)| self.winning_direction(card).is_none())
        {
            return Err(GameError::UnreachableCard {
                index,
                character: card.character.name.clone(),
                show: card.show.id,
            });
        }

        Ok(())
    }
}
