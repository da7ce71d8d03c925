//! Built-in deck played when no deck file is configured.
use game_core::{Card, Character, Game, Show};

pub fn demo_game() -> Game {
    let office = Show::new(1, "The Office");
    let parks = Show::new(2, "Parks and Recreation");

    let cards = [
        ("Dwight Schrute", &office),
        ("Leslie Knope", &parks),
        ("Ron Swanson", &parks),
        ("Pam Beesly", &office),
        ("April Ludgate", &parks),
        ("Creed Bratton", &office),
    ]
    .into_iter()
    .map(|(name, show)| Card::new(Character::new(name), show.clone()))
    .collect();

    Game::new("Office or Parks?", cards, office, parks)
}
