//! Cursor and answer log of a running session.
//!
//! [`SessionProgress`] is the synchronous heart of a session: each call to
//! [`SessionProgress::register`] judges exactly one card, appends the answer
//! and advances the cursor. The caller owns the game and any asynchronous
//! follow-up (persisting the result, navigation).

use crate::answer::{GameAnswer, GameResult};
use crate::direction::SwipeDirection;
use crate::game::Game;
use crate::scoring;

/// Why a swipe was dropped without being judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoredSwipe {
    /// No game has been loaded yet.
    NoGame,
    /// Every card of the deck has already been judged.
    DeckExhausted,
}

/// What a registered swipe did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The card was judged and more cards remain. `cursor` is the index of
    /// the next card.
    Judged { answer: GameAnswer, cursor: usize },
    /// The last card was judged.
    Completed {
        answer: GameAnswer,
        result: GameResult,
    },
    Ignored(IgnoredSwipe),
}

impl SwipeOutcome {
    pub fn answer(&self) -> Option<&GameAnswer> {
        match self {
            Self::Judged { answer, .. } | Self::Completed { answer, .. } => Some(answer),
            Self::Ignored(_) => None,
        }
    }
}

/// Position in the deck plus the chronological log of judged answers.
///
/// Invariant: `cursor == answers.len()` and `cursor <= deck length`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionProgress {
    cursor: usize,
    answers: Vec<GameAnswer>,
}

impl SessionProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next unjudged card.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Answers in swipe order.
    pub fn answers(&self) -> &[GameAnswer] {
        &self.answers
    }

    /// Starts over for a freshly loaded game.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.answers.clear();
    }

    pub fn is_complete(&self, game: &Game) -> bool {
        self.cursor >= game.len()
    }

    /// Judges the card under the cursor.
    ///
    /// The result is built on the swipe that moves the cursor onto the deck
    /// length; later swipes are ignored.
    pub fn register(&mut self, game: &Game, direction: SwipeDirection) -> SwipeOutcome {
        let Some(card) = game.card(self.cursor) else {
            return SwipeOutcome::Ignored(IgnoredSwipe::DeckExhausted);
        };

        let answer = scoring::judge(game, card, direction);
        self.answers.push(answer.clone());
        self.cursor += 1;

        if self.is_complete(game) {
            let result = GameResult::from_chronological(game.title.clone(), &self.answers);
            SwipeOutcome::Completed { answer, result }
        } else {
            SwipeOutcome::Judged {
                answer,
                cursor: self.cursor,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Character, Show};

    fn two_card_game() -> Game {
        let a = Show::new(1, "Target A");
        let b = Show::new(2, "Target B");
        Game::new(
            "Pairs",
            vec![
                Card::new(Character::new("card1"), a.clone()),
                Card::new(Character::new("card2"), b.clone()),
            ],
            a,
            b,
        )
    }

    fn expect_result(outcome: SwipeOutcome) -> GameResult {
        match outcome {
            SwipeOutcome::Completed { result, .. } => result,
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn correct_swipes_earn_full_score_in_reverse_order() {
        let game = two_card_game();
        let mut progress = SessionProgress::new();

        let first = progress.register(&game, SwipeDirection::Left);
        assert!(matches!(first, SwipeOutcome::Judged { cursor: 1, .. }));

        let result = expect_result(progress.register(&game, SwipeDirection::Right));
        assert_eq!(result.total_points, 2);
        assert_eq!(result.earned_points, 2);
        assert_eq!(result.answers[0].character.name, "card2");
        assert_eq!(result.answers[1].character.name, "card1");
    }

    #[test]
    fn wrong_swipes_earn_nothing() {
        let game = two_card_game();
        let mut progress = SessionProgress::new();

        progress.register(&game, SwipeDirection::Right);
        let result = expect_result(progress.register(&game, SwipeDirection::Left));

        assert_eq!(result.earned_points, 0);
        assert_eq!(result.total_points, 2);
        assert!(result.answers.iter().all(|a| !a.is_right_answer));
    }

    #[test]
    fn log_stays_chronological() {
        let game = two_card_game();
        let mut progress = SessionProgress::new();

        progress.register(&game, SwipeDirection::Left);
        progress.register(&game, SwipeDirection::Left);

        let names: Vec<&str> = progress
            .answers()
            .iter()
            .map(|a| a.character.name.as_str())
            .collect();
        assert_eq!(names, ["card1", "card2"]);
        assert_eq!(progress.cursor(), 2);
        assert!(progress.is_complete(&game));
    }

    #[test]
    fn swipes_after_completion_are_ignored() {
        let game = two_card_game();
        let mut progress = SessionProgress::new();
        progress.register(&game, SwipeDirection::Left);
        progress.register(&game, SwipeDirection::Right);

        let extra = progress.register(&game, SwipeDirection::Left);

        assert_eq!(extra, SwipeOutcome::Ignored(IgnoredSwipe::DeckExhausted));
        assert_eq!(progress.cursor(), 2);
        assert_eq!(progress.answers().len(), 2);
    }

    #[test]
    fn empty_deck_never_completes() {
        let mut game = two_card_game();
        game.cards.clear();
        let mut progress = SessionProgress::new();

        assert_eq!(
            progress.register(&game, SwipeDirection::Left),
            SwipeOutcome::Ignored(IgnoredSwipe::DeckExhausted)
        );
        assert_eq!(progress.cursor(), 0);
    }

    #[test]
    fn reset_clears_cursor_and_log() {
        let game = two_card_game();
        let mut progress = SessionProgress::new();
        progress.register(&game, SwipeDirection::Left);

        progress.reset();

        assert_eq!(progress, SessionProgress::new());
    }

    #[test]
    fn earned_never_exceeds_total_for_any_swipe_pattern() {
        let game = two_card_game();
        let directions = [SwipeDirection::Left, SwipeDirection::Right];

        for first in directions {
            for second in directions {
                let mut progress = SessionProgress::new();
                progress.register(&game, first);
                let result = expect_result(progress.register(&game, second));

                let correct = result.answers.iter().filter(|a| a.is_right_answer).count();
                assert_eq!(result.earned_points, correct);
                assert!(result.earned_points <= result.total_points);
            }
        }
    }
}
