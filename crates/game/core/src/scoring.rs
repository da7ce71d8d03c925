//! Swipe judgment.
//!
//! A swipe claims one of the game's two shows; it is correct iff the claimed
//! show has the same id as the card's show. There is no partial credit.

use crate::answer::GameAnswer;
use crate::card::{Card, Show};
use crate::direction::SwipeDirection;
use crate::game::Game;

/// Show implied by swiping in `direction` on any card of `game`.
pub fn claimed_show(game: &Game, direction: SwipeDirection) -> &Show {
    game.show_for(direction)
}

/// Strict identity comparison of two shows.
pub fn is_right_answer(claimed: &Show, actual: &Show) -> bool {
    claimed.id == actual.id
}

/// Judges a swipe on `card` and produces the answer to append to the log.
pub fn judge(game: &Game, card: &Card, direction: SwipeDirection) -> GameAnswer {
    let answer_show = claimed_show(game, direction);

    GameAnswer::new(
        card.character.clone(),
        is_right_answer(answer_show, &card.show),
        answer_show.clone(),
        card.show.clone(),
    )
}
