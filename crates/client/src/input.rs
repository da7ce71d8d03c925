//! Line-oriented command parsing.
use std::str::FromStr;

use game_core::SwipeDirection;

/// One line of user input, decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Swipe(SwipeDirection),
    Retry,
    Status,
    Help,
    Quit,
}

impl InputCommand {
    /// Decode a line. Blank or unknown input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_ascii_lowercase();

        let command = match word.as_str() {
            "" => return None,
            "l" | "a" | "<" => Self::Swipe(SwipeDirection::Left),
            "r" | "d" | ">" => Self::Swipe(SwipeDirection::Right),
            "retry" => Self::Retry,
            "s" | "status" => Self::Status,
            "h" | "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => Self::Swipe(SwipeDirection::from_str(other).ok()?),
        };

        Some(command)
    }
}

pub const HELP: &str = "\
Commands:
  l, left    swipe the card to the left show
  r, right   swipe the card to the right show
  retry      ask for a game again after a failed load
  s, status  show progress so far
  q, quit    leave the quiz";
