//! Judged swipes and the scored result of a finished session.

use crate::card::{Character, Show};

/// One judged swipe. Created once per swipe and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameAnswer {
    pub character: Character,
    pub is_right_answer: bool,
    /// Show the player claimed by swiping.
    pub answer_show: Show,
    /// Show the character actually belongs to.
    pub right_show: Show,
}

impl GameAnswer {
    pub fn new(
        character: Character,
        is_right_answer: bool,
        answer_show: Show,
        right_show: Show,
    ) -> Self {
        Self {
            character,
            is_right_answer,
            answer_show,
            right_show,
        }
    }
}

/// Final score of a session.
///
/// `answers` is ordered most recent swipe first; the result screen renders it
/// in that order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    pub title: String,
    pub answers: Vec<GameAnswer>,
    pub total_points: usize,
    pub earned_points: usize,
}

impl GameResult {
    /// Builds a result from a chronological answer log.
    pub fn from_chronological(title: impl Into<String>, log: &[GameAnswer]) -> Self {
        let answers: Vec<GameAnswer> = log.iter().rev().cloned().collect();
        let earned_points = answers.iter().filter(|a| a.is_right_answer).count();

        Self {
            title: title.into(),
            total_points: answers.len(),
            earned_points,
            answers,
        }
    }

    /// Share of correct answers in `0.0..=1.0`; zero for an empty result.
    pub fn accuracy(&self) -> f32 {
        if self.total_points == 0 {
            0.0
        } else {
            self.earned_points as f32 / self.total_points as f32
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.total_points > 0 && self.earned_points == self.total_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(name: &str, correct: bool) -> GameAnswer {
        let show = Show::new(1, "A");
        let other = Show::new(2, "B");
        let claimed = if correct { show.clone() } else { other };
        GameAnswer::new(Character::new(name), correct, claimed, show)
    }

    #[test]
    fn reverses_log_and_counts_points() {
        let log = vec![answer("first", true), answer("second", false), answer("third", true)];

        let result = GameResult::from_chronological("Quiz", &log);

        let names: Vec<&str> = result
            .answers
            .iter()
            .map(|a| a.character.name.as_str())
            .collect();
        assert_eq!(names, ["third", "second", "first"]);
        assert_eq!(result.total_points, 3);
        assert_eq!(result.earned_points, 2);
        assert!(!result.is_perfect());
    }

    #[test]
    fn empty_log_scores_zero() {
        let result = GameResult::from_chronological("Quiz", &[]);
        assert_eq!(result.total_points, 0);
        assert_eq!(result.earned_points, 0);
        assert_eq!(result.accuracy(), 0.0);
        assert!(!result.is_perfect());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_snake_case_fields() {
        let result = GameResult::from_chronological("Quiz", &[answer("only", true)]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["total_points"], 1);
        assert_eq!(json["earned_points"], 1);
        assert_eq!(json["answers"][0]["answer_show"]["id"], 1);
    }
}
