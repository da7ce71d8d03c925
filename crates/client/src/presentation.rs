//! Plain-text rendering of cards, verdicts and results.
use game_core::{Game, GameAnswer, GameResult};
use runtime::SessionStatus;

pub const LOADING: &str = "Loading game...";

/// Title banner with the two sides of the deck.
pub fn render_intro(game: &Game) -> String {
    format!(
        "== {} ==\n  left:  {}\n  right: {}",
        game.title, game.left_show.title, game.right_show.title
    )
}

/// The card at `index`, or a closing line once the deck is done.
pub fn render_card(game: &Game, index: usize) -> String {
    if game.is_empty() {
        return "This deck has no cards.".to_string();
    }

    match game.card(index) {
        Some(card) => format!(
            "[{}/{}] {}  (l: {} | r: {})",
            index + 1,
            game.len(),
            card.character.name,
            game.left_show.title,
            game.right_show.title
        ),
        None => "No cards left.".to_string(),
    }
}

pub fn render_answer(answer: &GameAnswer) -> String {
    if answer.is_right_answer {
        format!(
            "  correct: {} is from {}",
            answer.character.name, answer.right_show.title
        )
    } else {
        format!(
            "  wrong: {} is from {}, not {}",
            answer.character.name, answer.right_show.title, answer.answer_show.title
        )
    }
}

/// Result screen. Answers are listed most recent first, as stored.
pub fn render_result(result: &GameResult) -> String {
    let mut lines = vec![
        format!("== Result: {} ==", result.title),
        format!(
            "Score: {}/{} ({:.0}%)",
            result.earned_points,
            result.total_points,
            result.accuracy() * 100.0
        ),
    ];

    lines.extend(result.answers.iter().map(|answer| {
        let mark = if answer.is_right_answer { "+" } else { "-" };
        format!(
            "  {mark} {} ({})",
            answer.character.name, answer.right_show.title
        )
    }));

    if result.is_perfect() {
        lines.push("Perfect round!".to_string());
    }

    lines.join("\n")
}

pub fn render_status(status: &SessionStatus) -> String {
    let correct = status
        .answers
        .iter()
        .filter(|answer| answer.is_right_answer)
        .count();

    format!(
        "phase: {:?}, judged: {}, correct: {}",
        status.phase,
        status.answers.len(),
        correct
    )
}

#[cfg(test)]
mod tests {
    use game_core::{Card, Character, Show};

    use super::*;

    fn game() -> Game {
        let left = Show::new(1, "Alpha");
        let right = Show::new(2, "Beta");
        Game::new(
            "Pick",
            vec![
                Card::new(Character::new("Ann"), left.clone()),
                Card::new(Character::new("Bob"), right.clone()),
            ],
            left,
            right,
        )
    }

    #[test]
    fn card_shows_position_and_sides() {
        let line = render_card(&game(), 1);
        assert!(line.starts_with("[2/2] Bob"));
        assert!(line.contains("l: Alpha"));
    }

    #[test]
    fn card_past_the_end() {
        assert_eq!(render_card(&game(), 2), "No cards left.");
    }

    #[test]
    fn wrong_answer_names_both_shows() {
        let answer = GameAnswer::new(
            Character::new("Ann"),
            false,
            Show::new(2, "Beta"),
            Show::new(1, "Alpha"),
        );
        assert_eq!(render_answer(&answer), "  wrong: Ann is from Alpha, not Beta");
    }

    #[test]
    fn result_lists_answers_in_stored_order() {
        let game = game();
        let log = vec![
            GameAnswer::new(
                Character::new("Ann"),
                true,
                game.left_show.clone(),
                game.left_show.clone(),
            ),
            GameAnswer::new(
                Character::new("Bob"),
                false,
                game.left_show.clone(),
                game.right_show.clone(),
            ),
        ];
        let result = GameResult::from_chronological("Pick", &log);

        let text = render_result(&result);
        let bob = text.find("Bob").unwrap();
        let ann = text.find("Ann").unwrap();
        assert!(bob < ann);
        assert!(text.contains("Score: 1/2 (50%)"));
        assert!(!text.contains("Perfect"));
    }
}
