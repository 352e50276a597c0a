//! Flop texture classification.
//!
//! A flop is described on two axes:
//!
//! | Axis        | Values                                      |
//! |-------------|---------------------------------------------|
//! | `Structure` | `SECO`, `COORDINADO`, `MONOCOLOR`, `PAREADO` |
//! | `Impact`    | `OFENSIVO`, `NEUTRO`, `DEFENSIVO`            |
//!
//! Structure is decided first (monotone, then paired, then coordinated, else
//! dry) and impact is derived from it plus the board's height. The combined
//! `"{impact}_{structure}"` tag is what the coaching registry routes on.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flop_engine::models::{parse_cards, Card, CardInput, Rank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Structure {
    #[serde(rename = "SECO")]
    Dry,
    #[serde(rename = "COORDINADO")]
    Coordinated,
    #[serde(rename = "MONOCOLOR")]
    Monotone,
    #[serde(rename = "PAREADO")]
    Paired,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Structure {
    pub fn tag(self) -> &'static str {
        match self {
            Structure::Dry         => "SECO",
            Structure::Coordinated => "COORDINADO",
            Structure::Monotone    => "MONOCOLOR",
            Structure::Paired      => "PAREADO",
            Structure::Unknown     => "UNKNOWN",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "OFENSIVO")]
    Offensive,
    #[serde(rename = "NEUTRO")]
    Neutral,
    #[serde(rename = "DEFENSIVO")]
    Defensive,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Impact {
    pub fn tag(self) -> &'static str {
        match self {
            Impact::Offensive => "OFENSIVO",
            Impact::Neutral   => "NEUTRO",
            Impact::Defensive => "DEFENSIVO",
            Impact::Unknown   => "UNKNOWN",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Gaps between the sorted board ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connectivity {
    pub gap1: u8,
    pub gap2: u8,
    pub span: u8,
    pub has_adjacent: bool,
    /// span <= 4 and both gaps <= 3
    pub three_close: bool,
    /// span <= 6 and both gaps <= 4
    pub semi_close: bool,
}

impl Connectivity {
    /// `sorted` is low to high.
    pub fn from_sorted(sorted: [Rank; 3]) -> Self {
        let [low, mid, high] = sorted;
        let gap1 = mid.0 - low.0;
        let gap2 = high.0 - mid.0;
        let span = high.0 - low.0;
        Connectivity {
            gap1,
            gap2,
            span,
            has_adjacent: gap1 == 1 || gap2 == 1,
            three_close: span <= 4 && gap1 <= 3 && gap2 <= 3,
            semi_close: span <= 6 && gap1 <= 4 && gap2 <= 4,
        }
    }
}

/// How high the board runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highness {
    pub low: Rank,
    pub mid: Rank,
    pub high: Rank,
    pub broadways: u8,
    pub has_ace: bool,
    /// K or A high.
    pub is_high_high: bool,
    /// Q or better.
    pub is_high: bool,
    /// 9 through J.
    pub is_middle: bool,
    /// 8 or lower.
    pub is_low: bool,
}

impl Highness {
    pub fn from_sorted(sorted: [Rank; 3]) -> Self {
        let [low, mid, high] = sorted;
        Highness {
            low,
            mid,
            high,
            broadways: sorted.iter().filter(|r| r.is_broadway()).count() as u8,
            has_ace: high == Rank::ACE,
            is_high_high: high.0 >= 13,
            is_high: high.0 >= 12,
            is_middle: (9..=11).contains(&high.0),
            is_low: high.0 <= 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardFlags {
    pub is_paired: bool,
    pub is_trips: bool,
    pub is_monotone: bool,
    pub is_two_tone: bool,
    pub connectivity: Connectivity,
    pub highness: Highness,
}

/// Result of [`classify_board`]. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardTexture {
    pub structure: Structure,
    pub impact: Impact,
    pub texture: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<BoardFlags>,
}

impl BoardTexture {
    fn new(structure: Structure, impact: Impact, flags: Option<BoardFlags>) -> Self {
        BoardTexture {
            structure,
            impact,
            texture: format!("{}_{}", impact.tag(), structure.tag()),
            flags,
        }
    }

    pub fn unknown() -> Self {
        BoardTexture::new(Structure::Unknown, Impact::Unknown, None)
    }

    pub fn is_unknown(&self) -> bool {
        self.structure == Structure::Unknown || self.impact == Impact::Unknown
    }
}

impl fmt::Display for BoardTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texture)
    }
}

/// Ranks of a 3-card board, low to high.
pub fn sorted_ranks(board: &[Card; 3]) -> [Rank; 3] {
    let mut ranks = board.map(|c| c.rank);
    ranks.sort_unstable();
    ranks
}

/// Classify a flop. Anything other than exactly three cards yields
/// `UNKNOWN_UNKNOWN`.
pub fn classify_board(cards: &[Card]) -> BoardTexture {
    let board: [Card; 3] = match cards.try_into() {
        Ok(b) => b,
        Err(_) => return BoardTexture::unknown(),
    };

    let sorted = sorted_ranks(&board);
    let distinct_ranks = board.iter().map(|c| c.rank).collect::<HashSet<_>>().len();
    let distinct_suits = board.iter().map(|c| c.suit).collect::<HashSet<_>>().len();

    let flags = BoardFlags {
        is_paired: distinct_ranks < 3,
        is_trips: distinct_ranks == 1,
        is_monotone: distinct_suits == 1,
        is_two_tone: distinct_suits == 2,
        connectivity: Connectivity::from_sorted(sorted),
        highness: Highness::from_sorted(sorted),
    };

    let structure = structure_of(&flags);
    let impact = impact_of(structure, &flags);
    BoardTexture::new(structure, impact, Some(flags))
}

/// Parse raw inputs and classify them. Unparseable cards are dropped before
/// the arity check.
pub fn classify_flop(inputs: &[CardInput]) -> BoardTexture {
    classify_board(&parse_cards(inputs))
}

fn structure_of(flags: &BoardFlags) -> Structure {
    if flags.is_monotone {
        Structure::Monotone
    } else if flags.is_paired {
        Structure::Paired
    } else if flags.connectivity.three_close || flags.is_two_tone {
        Structure::Coordinated
    } else {
        Structure::Dry
    }
}

fn impact_of(structure: Structure, flags: &BoardFlags) -> Impact {
    let hi = &flags.highness;
    let conn = &flags.connectivity;

    if structure == Structure::Coordinated {
        return if hi.is_high_high || (hi.is_high && hi.broadways >= 2) {
            Impact::Offensive
        } else if (hi.is_low && (conn.three_close || conn.semi_close))
            || (hi.is_middle && conn.three_close)
        {
            Impact::Defensive
        } else {
            Impact::Neutral
        };
    }

    match structure {
        Structure::Dry if hi.is_high => Impact::Offensive,
        Structure::Dry if hi.is_low => Impact::Defensive,
        Structure::Monotone if hi.is_low || hi.is_middle => Impact::Defensive,
        Structure::Paired if hi.is_high => Impact::Offensive,
        _ => Impact::Neutral,
    }
}
