//! Hero hand strength against a flop.
//!
//! [`evaluate_hand`] is a strict priority cascade: made hands are checked
//! first (set, two pair, overpair, unpaired pocket pairs, top pair, second /
//! under pair) and draws only when nothing was made. Unpaired five-card
//! flushes and straights have no category of their own: they fall through to
//! the draw rules.
//! Exactly one [`HandCategory`] comes out per (hand, board) pair.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flop_engine::models::{Card, Rank, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandCategory {
    Monster,
    Overpair,
    TopPairGood,
    TopPairWeak,
    SecondPair,
    Underpair,
    PocketPairHigh,
    PocketPairMid,
    PocketPairLow,
    NutFlushDraw,
    FlushDraw,
    BackdoorFlush,
    Oesd,
    Gutshot,
    Air,
}

impl HandCategory {
    pub fn tag(self) -> &'static str {
        match self {
            HandCategory::Monster        => "MONSTER",
            HandCategory::Overpair       => "OVERPAIR",
            HandCategory::TopPairGood    => "TOP_PAIR_GOOD",
            HandCategory::TopPairWeak    => "TOP_PAIR_WEAK",
            HandCategory::SecondPair     => "SECOND_PAIR",
            HandCategory::Underpair      => "UNDERPAIR",
            HandCategory::PocketPairHigh => "POCKET_PAIR_HIGH",
            HandCategory::PocketPairMid  => "POCKET_PAIR_MID",
            HandCategory::PocketPairLow  => "POCKET_PAIR_LOW",
            HandCategory::NutFlushDraw   => "NUT_FLUSH_DRAW",
            HandCategory::FlushDraw      => "FLUSH_DRAW",
            HandCategory::BackdoorFlush  => "BACKDOOR_FLUSH",
            HandCategory::Oesd           => "OESD",
            HandCategory::Gutshot        => "GUTSHOT",
            HandCategory::Air            => "AIR",
        }
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            HandCategory::NutFlushDraw
                | HandCategory::FlushDraw
                | HandCategory::BackdoorFlush
                | HandCategory::Oesd
                | HandCategory::Gutshot
        )
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strength {
    VeryStrong,
    Strong,
    Medium,
    Weak,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PairLevel {
    Top,
    Second,
    Under,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draws {
    pub flush: bool,
    pub nut_flush: bool,
    pub backdoor_flush: bool,
    pub straight: bool,
    pub oesd: bool,
    pub gutshot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandEval {
    pub category: HandCategory,
    pub made: bool,
    pub strength: Strength,
    pub pair_level: Option<PairLevel>,
    pub draws: Draws,
}

impl HandEval {
    fn base(category: HandCategory) -> Self {
        HandEval {
            category,
            made: false,
            strength: Strength::None,
            pair_level: None,
            draws: Draws::default(),
        }
    }

    fn made(category: HandCategory, strength: Strength) -> Self {
        HandEval { made: true, strength, ..HandEval::base(category) }
    }

    fn paired(category: HandCategory, strength: Strength, level: PairLevel) -> Self {
        HandEval { pair_level: Some(level), ..HandEval::made(category, strength) }
    }

    fn draw(category: HandCategory, draws: Draws) -> Self {
        HandEval { draws, ..HandEval::base(category) }
    }
}

/// Evaluate hero's two cards against a three-card flop.
///
/// Wrong card counts are the caller's problem; they evaluate to `AIR`.
pub fn evaluate_hand(hero: &[Card], board: &[Card]) -> HandEval {
    let hero: [Card; 2] = match hero.try_into() {
        Ok(h) => h,
        Err(_) => return HandEval::base(HandCategory::Air),
    };
    let board: [Card; 3] = match board.try_into() {
        Ok(b) => b,
        Err(_) => return HandEval::base(HandCategory::Air),
    };

    if let Some(made) = made_hand(&hero, &board) {
        return made;
    }
    draw_hand(&hero, &board)
}

fn made_hand(hero: &[Card; 2], board: &[Card; 3]) -> Option<HandEval> {
    let hr = hero.map(|c| c.rank);
    let mut br = board.map(|c| c.rank);
    br.sort_unstable_by(|a, b| b.cmp(a)); // high to low
    let [board_high, board_mid, board_low] = br;

    let is_pocket = hr[0] == hr[1];
    let pocket = hr[0];
    let paired_ranks: Vec<Rank> = hr.iter().copied().filter(|r| br.contains(r)).collect();

    // Set / trips
    if is_pocket && br.contains(&pocket) {
        return Some(HandEval::made(HandCategory::Monster, Strength::VeryStrong));
    }
    // Two pair: each hole card pairs a different board rank
    if paired_ranks.len() == 2 {
        return Some(HandEval::made(HandCategory::Monster, Strength::VeryStrong));
    }

    if is_pocket {
        return Some(if pocket > board_high {
            HandEval::made(HandCategory::Overpair, Strength::Strong)
        } else if pocket > board_mid {
            HandEval::made(HandCategory::PocketPairHigh, Strength::Medium)
        } else if pocket > board_low {
            HandEval::made(HandCategory::PocketPairMid, Strength::Weak)
        } else {
            HandEval::made(HandCategory::PocketPairLow, Strength::Weak)
        });
    }

    if paired_ranks.contains(&board_high) {
        let kicker = if hr[0] == board_high { hr[1] } else { hr[0] };
        return Some(if kicker >= Rank::TEN {
            HandEval::paired(HandCategory::TopPairGood, Strength::Strong, PairLevel::Top)
        } else {
            HandEval::paired(HandCategory::TopPairWeak, Strength::Medium, PairLevel::Top)
        });
    }

    if let &[pair] = paired_ranks.as_slice() {
        return Some(if pair >= board_mid {
            HandEval::paired(HandCategory::SecondPair, Strength::Weak, PairLevel::Second)
        } else {
            HandEval::paired(HandCategory::Underpair, Strength::Weak, PairLevel::Under)
        });
    }

    None
}

fn draw_hand(hero: &[Card; 2], board: &[Card; 3]) -> HandEval {
    let all = all_cards(hero, board);

    let mut hero_suits: Vec<Suit> = hero.iter().map(|c| c.suit).collect();
    hero_suits.dedup();

    for &suit in &hero_suits {
        if suit_count(&all, suit) == 4 {
            let nut = hero.contains(&Card::new(Rank::ACE, suit));
            let category = if nut { HandCategory::NutFlushDraw } else { HandCategory::FlushDraw };
            return HandEval::draw(category, Draws { flush: true, nut_flush: nut, ..Draws::default() });
        }
    }

    if hero_suits.iter().any(|&s| suit_count(&all, s) == 3) {
        return HandEval::draw(
            HandCategory::BackdoorFlush,
            Draws { backdoor_flush: true, ..Draws::default() },
        );
    }

    match longest_run(&all) {
        n if n >= 3 => HandEval::draw(
            HandCategory::Oesd,
            Draws { straight: true, oesd: true, ..Draws::default() },
        ),
        2 => HandEval::draw(
            HandCategory::Gutshot,
            Draws { straight: true, gutshot: true, ..Draws::default() },
        ),
        _ => HandEval::base(HandCategory::Air),
    }
}

fn all_cards(hero: &[Card; 2], board: &[Card; 3]) -> [Card; 5] {
    [hero[0], hero[1], board[0], board[1], board[2]]
}

fn suit_count(cards: &[Card], suit: Suit) -> usize {
    cards.iter().filter(|c| c.suit == suit).count()
}

/// Longest chain of consecutive distinct ranks, counted in links: four
/// connected ranks give 3. The ace is high only.
pub fn longest_run(cards: &[Card]) -> u8 {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.0).collect::<HashSet<_>>().into_iter().collect();
    values.sort_unstable();

    let mut run = 0u8;
    let mut best = 0u8;
    for pair in values.windows(2) {
        if pair[1] == pair[0] + 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &[&str]) -> Vec<Card> {
        s.iter().map(|c| c.parse().unwrap()).collect()
    }

    fn cat(hero: &[&str], board: &[&str]) -> HandCategory {
        evaluate_hand(&cards(hero), &cards(board)).category
    }

    #[test]
    fn set_and_two_pair_are_monsters() {
        assert_eq!(cat(&["7c", "7d"], &["7h", "Ks", "2c"]), HandCategory::Monster);
        assert_eq!(cat(&["Kc", "2d"], &["7h", "Ks", "2c"]), HandCategory::Monster);
        let ev = evaluate_hand(&cards(&["7c", "7d"]), &cards(&["7h", "Ks", "2c"]));
        assert!(ev.made);
        assert_eq!(ev.strength, Strength::VeryStrong);
    }

    #[test]
    fn pocket_pairs_banded_by_board() {
        assert_eq!(cat(&["Ac", "Ad"], &["Kh", "7s", "2c"]), HandCategory::Overpair);
        assert_eq!(cat(&["Qc", "Qd"], &["Kh", "9s", "2c"]), HandCategory::PocketPairHigh);
        assert_eq!(cat(&["5c", "5d"], &["Kh", "9s", "2c"]), HandCategory::PocketPairMid);
        assert_eq!(cat(&["2c", "2d"], &["Ah", "8s", "3c"]), HandCategory::PocketPairLow);
    }

    #[test]
    fn top_pair_kicker() {
        assert_eq!(cat(&["Kc", "Td"], &["Kh", "7s", "2c"]), HandCategory::TopPairGood);
        assert_eq!(cat(&["Kc", "9d"], &["Kh", "7s", "2c"]), HandCategory::TopPairWeak);
        let ev = evaluate_hand(&cards(&["Kc", "9d"]), &cards(&["Kh", "7s", "2c"]));
        assert_eq!(ev.pair_level, Some(PairLevel::Top));
    }

    #[test]
    fn second_and_under_pair() {
        assert_eq!(cat(&["7c", "Ad"], &["Kh", "7s", "2c"]), HandCategory::SecondPair);
        assert_eq!(cat(&["2d", "Ad"], &["Kh", "7s", "2c"]), HandCategory::Underpair);
    }

    #[test]
    fn flush_draws() {
        assert_eq!(cat(&["As", "Ks"], &["Qs", "7s", "2h"]), HandCategory::NutFlushDraw);
        assert_eq!(cat(&["Js", "Ts"], &["Qs", "7s", "2h"]), HandCategory::FlushDraw);
        // An off-suit ace does not make the draw the nuts.
        assert_eq!(cat(&["Ad", "Ts"], &["Qs", "7s", "2s"]), HandCategory::FlushDraw);
        assert_eq!(cat(&["Jh", "4s"], &["Qs", "7s", "2h"]), HandCategory::BackdoorFlush);
    }

    #[test]
    fn straight_draws() {
        assert_eq!(cat(&["9c", "8d"], &["7h", "6s", "2c"]), HandCategory::Oesd);
        assert_eq!(cat(&["9c", "3d"], &["8h", "7s", "Kc"]), HandCategory::Gutshot);
        assert_eq!(cat(&["Ac", "3d"], &["2h", "4s", "9c"]), HandCategory::Gutshot);
        assert_eq!(cat(&["Ac", "3d"], &["Jh", "8s", "6c"]), HandCategory::Air);
    }

    #[test]
    fn run_length_sets_the_straight_draw() {
        // (hero, board, links, category). No row has three cards of one suit.
        let table: [([&str; 2], [&str; 3], u8, HandCategory); 7] = [
            (["9c", "8d"], ["7h", "6s", "2c"], 3, HandCategory::Oesd),
            (["9c", "8d"], ["7h", "6s", "5c"], 4, HandCategory::Oesd),
            (["9c", "3d"], ["8h", "7s", "Kc"], 2, HandCategory::Gutshot),
            (["Ad", "4h"], ["8s", "3h", "2c"], 2, HandCategory::Gutshot),
            (["Ac", "3d"], ["2h", "Js", "9c"], 1, HandCategory::Air),
            (["Ac", "Kd"], ["Qh", "Js", "2c"], 3, HandCategory::Oesd),
            (["Ac", "5d"], ["Jh", "8s", "6c"], 1, HandCategory::Air),
        ];
        for (hero, board, links, expected) in table {
            let mut all = cards(&hero);
            all.extend(cards(&board));
            assert_eq!(longest_run(&all), links, "{hero:?} {board:?}");
            assert_eq!(cat(&hero, &board), expected, "{hero:?} {board:?}");
        }
    }

    #[test]
    fn ace_plays_high_only() {
        assert_eq!(longest_run(&cards(&["Ac", "2d", "3h", "4s", "9c"])), 2);
        assert_eq!(longest_run(&cards(&["Ac", "Kd", "Qh", "Js", "Tc"])), 4);
    }

    #[test]
    fn made_pair_beats_draw() {
        // Top pair with a nut flush draw is still top pair.
        assert_eq!(cat(&["As", "Qs"], &["Qd", "7s", "2s"]), HandCategory::TopPairGood);
    }

    #[test]
    fn unpaired_flush_and_straight_fall_through_to_draws() {
        // Five suited cards are neither a four- nor a three-card flush.
        assert_eq!(cat(&["As", "3s"], &["Qs", "7s", "2s"]), HandCategory::Air);
        assert_eq!(cat(&["9c", "8d"], &["7h", "6s", "5c"]), HandCategory::Oesd);
        let ev = evaluate_hand(&cards(&["9c", "8d"]), &cards(&["7h", "6s", "5c"]));
        assert!(!ev.made);
    }

    #[test]
    fn wrong_counts_are_air() {
        let ev = evaluate_hand(&cards(&["As"]), &cards(&["Qs", "7s", "2h"]));
        assert_eq!(ev.category, HandCategory::Air);
        assert!(!ev.made);
    }
}
