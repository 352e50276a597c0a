//! Formatting helpers shared by the payload builder, drills and demos.

use crate::flop_engine::{
    engine::Recommendation,
    models::{parse_cards, Card, CardInput},
};

/// Format hero hand as string (e.g. "AcKs").
pub fn hand_str(hand: &[Card]) -> String {
    hand.iter().map(|c| c.to_string()).collect()
}

/// Format board as space-separated string (e.g. "Ac Ks 7h").
pub fn board_str(board: &[Card]) -> String {
    board.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

/// Card string as the browser client expects it: tens are written `10`.
pub fn client_card(c: &Card) -> String {
    if c.rank.0 == 10 {
        format!("10{}", c.suit)
    } else {
        c.to_string()
    }
}

/// One-line summary, e.g. `IP_OFENSIVO_SECO · AcKd on Ks 7h 2c · BET 33%`.
pub fn summary(hero: &[CardInput], board: &[CardInput], rec: &Recommendation) -> String {
    format!(
        "{} · {} on {} · {}",
        rec.spot,
        hand_str(&parse_cards(hero)),
        board_str(&parse_cards(board)),
        rec.action
    )
}
