//! Preflop hand codes (`"AJs"`, `"KTo"`, `"66"`) and their concrete combos.
//!
//! The range viewer hands over a code, not cards. These helpers expand a code
//! into hole-card combos, check whether two typed cards belong to it and pick
//! a combo that does not collide with cards already on the table.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::flop_engine::{
    error::{CoachError, ComboMismatch},
    models::{Card, Rank, Suit},
};

/// Suit order used when enumerating combos.
const COMBO_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCode {
    Pair(Rank),
    Suited(Rank, Rank),
    Offsuit(Rank, Rank),
    /// Two ranks without a suitedness tag, e.g. `"AK"`.
    Any(Rank, Rank),
}

impl HandCode {
    /// Lenient parse; `None` for anything that is not a hand code.
    pub fn parse(code: &str) -> Option<HandCode> {
        let code = code.trim().to_ascii_uppercase();
        let chars: Vec<char> = code.chars().collect();
        let rank = |c: char| Rank::from_token(&c.to_string());

        match chars.as_slice() {
            &[a, b] if a == b => Some(HandCode::Pair(rank(a)?)),
            &[a, b] => Some(HandCode::Any(rank(a)?, rank(b)?)),
            &[a, b, tag] if a != b => {
                let (hi, lo) = (rank(a)?, rank(b)?);
                match tag {
                    'S' => Some(HandCode::Suited(hi, lo)),
                    'O' => Some(HandCode::Offsuit(hi, lo)),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn ranks(self) -> (Rank, Rank) {
        match self {
            HandCode::Pair(r) => (r, r),
            HandCode::Suited(a, b) | HandCode::Offsuit(a, b) | HandCode::Any(a, b) => (a, b),
        }
    }

    /// Every concrete combo: 6 for a pair, 4 suited, 12 offsuit, 16 untagged.
    pub fn combos(self) -> Vec<[Card; 2]> {
        let mut out = Vec::new();
        match self {
            HandCode::Pair(r) => {
                for (i, &s1) in COMBO_SUITS.iter().enumerate() {
                    for &s2 in &COMBO_SUITS[i + 1..] {
                        out.push([Card::new(r, s1), Card::new(r, s2)]);
                    }
                }
            }
            HandCode::Suited(a, b) => {
                for &s in &COMBO_SUITS {
                    out.push([Card::new(a, s), Card::new(b, s)]);
                }
            }
            HandCode::Offsuit(a, b) | HandCode::Any(a, b) => {
                let offsuit_only = matches!(self, HandCode::Offsuit(..));
                for &s1 in &COMBO_SUITS {
                    for &s2 in &COMBO_SUITS {
                        if offsuit_only && s1 == s2 {
                            continue;
                        }
                        out.push([Card::new(a, s1), Card::new(b, s2)]);
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for HandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCode::Pair(r)       => write!(f, "{r}{r}"),
            HandCode::Suited(a, b)  => write!(f, "{a}{b}s"),
            HandCode::Offsuit(a, b) => write!(f, "{a}{b}o"),
            HandCode::Any(a, b)     => write!(f, "{a}{b}"),
        }
    }
}

impl FromStr for HandCode {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandCode::parse(s).ok_or_else(|| CoachError::HandCode(s.to_string()))
    }
}

/// Check that two typed cards are a combo of `code`.
///
/// Cards are parsed strictly; an unknown suit is an invalid card here. An
/// unreadable code never matches.
pub fn hand_matches_cards(code: Option<&str>, c1: &str, c2: &str) -> Result<(), ComboMismatch> {
    let code = code.map(str::trim).filter(|c| !c.is_empty()).ok_or(ComboMismatch::MissingHand)?;

    let (a, b) = match (c1.parse::<Card>(), c2.parse::<Card>()) {
        (Ok(a), Ok(b)) => (a, b),
        _ => return Err(ComboMismatch::InvalidCards),
    };
    if a == b {
        return Err(ComboMismatch::DuplicateCard);
    }

    let hand = HandCode::parse(code).ok_or(ComboMismatch::RanksMismatch)?;
    if let HandCode::Pair(r) = hand {
        return if a.rank == r && b.rank == r { Ok(()) } else { Err(ComboMismatch::PairMismatch) };
    }

    let (hi, lo) = hand.ranks();
    let ranks_ok = (a.rank == hi && b.rank == lo) || (a.rank == lo && b.rank == hi);
    if !ranks_ok {
        return Err(ComboMismatch::RanksMismatch);
    }

    let suited = a.suit == b.suit;
    match hand {
        HandCode::Suited(..) if !suited => Err(ComboMismatch::NeedsSuited),
        HandCode::Offsuit(..) if suited => Err(ComboMismatch::NeedsOffsuit),
        _ => Ok(()),
    }
}

/// Combos of `code` that share no card with `used`.
pub fn available_combos(code: HandCode, used: &[Card]) -> Vec<[Card; 2]> {
    code.combos()
        .into_iter()
        .filter(|combo| !combo.iter().any(|c| used.contains(c)))
        .collect()
}

pub fn random_available_combo<R: Rng>(rng: &mut R, code: HandCode, used: &[Card]) -> Option<[Card; 2]> {
    available_combos(code, used).choose(rng).copied()
}

/// Hero cards that repeat each other or a board card.
pub fn conflicts_with_board(hero: &[Card], board: &[Card]) -> bool {
    hero.iter().enumerate().any(|(i, c)| hero[i + 1..].contains(c) || board.contains(c))
}
