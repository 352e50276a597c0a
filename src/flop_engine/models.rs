use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::flop_engine::error::{ActionParseError, CardParseError, CoachError};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// Card suit. Unrecognised upstream suits survive parsing as `Other` so a
/// malformed UI value never aborts the pipeline; they simply never match a
/// real suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    Other(char),
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Placeholder for a structured card sent without a suit.
    pub const MISSING: Suit = Suit::Other('?');

    /// Normalise a suit letter or glyph. Anything else is kept, lower-cased.
    pub fn normalize(c: char) -> Suit {
        match c {
            's' | 'S' | '♠' => Suit::Spades,
            'h' | 'H' | '♥' => Suit::Hearts,
            'd' | 'D' | '♦' => Suit::Diamonds,
            'c' | 'C' | '♣' => Suit::Clubs,
            other => Suit::Other(other.to_lowercase().next().unwrap_or(other)),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs    => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts   => 'h',
            Suit::Spades   => 's',
            Suit::Other(c) => c,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(pub u8);

impl Rank {
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    pub fn symbol(self) -> &'static str {
        match self.0 {
            2 => "2", 3 => "3", 4 => "4", 5 => "5", 6 => "6",
            7 => "7", 8 => "8", 9 => "9", 10 => "T",
            11 => "J", 12 => "Q", 13 => "K", 14 => "A",
            _ => "?",
        }
    }

    /// Parse a rank token. `"10"` is accepted as an alias for `T`.
    pub fn from_token(token: &str) -> Option<Rank> {
        let value = match token.trim().to_ascii_uppercase().as_str() {
            "2" => 2, "3" => 3, "4" => 4, "5" => 5, "6" => 6,
            "7" => 7, "8" => 8, "9" => 9, "10" | "T" => 10,
            "J" => 11, "Q" => 12, "K" => 13, "A" => 14,
            _ => return None,
        };
        Some(Rank(value))
    }

    /// Broadway ranks are J, Q, K and A.
    pub fn is_broadway(self) -> bool {
        self.0 >= 11
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardInput")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Strict parsing: unlike [`parse_card`], an unknown suit is an error.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let card = parse_card(&CardInput::Text(s.to_string()))
            .ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
        match card.suit {
            Suit::Other(c) => Err(CardParseError::Suit(c)),
            _ => Ok(card),
        }
    }
}

impl TryFrom<CardInput> for Card {
    type Error = CardParseError;

    fn try_from(input: CardInput) -> Result<Self, Self::Error> {
        parse_card(&input).ok_or_else(|| CardParseError::Invalid(input.to_string()))
    }
}

/// A card as a UI hands it over: either `{ "rank": "K", "suit": "♣" }` or a
/// compact string such as `"Kc"`, `"K♣"` or `"10h"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardInput {
    Parts { rank: String, suit: String },
    Text(String),
}

impl fmt::Display for CardInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardInput::Parts { rank, suit } => write!(f, "{rank}{suit}"),
            CardInput::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CardInput {
    fn from(s: &str) -> Self {
        CardInput::Text(s.to_string())
    }
}

impl From<Card> for CardInput {
    fn from(c: Card) -> Self {
        CardInput::Text(c.to_string())
    }
}

/// Normalise any accepted external card form into a canonical [`Card`].
///
/// Returns `None` for empty input or an unknown rank; never panics. A
/// structured card with an empty suit is kept with [`Suit::MISSING`].
pub fn parse_card(input: &CardInput) -> Option<Card> {
    let (rank_part, suit_part) = match input {
        CardInput::Parts { rank, suit } => (rank.trim().to_string(), suit.trim().to_string()),
        CardInput::Text(text) => {
            let text = text.trim();
            let suit = text.chars().last()?;
            let rank = &text[..text.len() - suit.len_utf8()];
            (rank.to_string(), suit.to_string())
        }
    };
    if rank_part.is_empty() {
        return None;
    }
    let rank = Rank::from_token(&rank_part)?;
    let suit = suit_part.chars().next().map_or(Suit::MISSING, Suit::normalize);
    Some(Card::new(rank, suit))
}

/// Parse a list of inputs, silently dropping the ones that do not parse.
pub fn parse_cards(inputs: &[CardInput]) -> Vec<Card> {
    inputs.iter().filter_map(parse_card).collect()
}

// ---------------------------------------------------------------------------
// Preflop context
// ---------------------------------------------------------------------------

/// Hero's relative position on the flop, normalised from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpState {
    #[serde(rename = "IP")]
    InPosition,
    #[serde(rename = "OOP")]
    OutOfPosition,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl IpState {
    pub fn normalize(raw: &str) -> IpState {
        match raw.trim().to_ascii_uppercase().as_str() {
            "IP"  => IpState::InPosition,
            "OOP" => IpState::OutOfPosition,
            _     => IpState::Unknown,
        }
    }

    pub fn is_ip(self) -> bool {
        self == IpState::InPosition
    }
}

impl fmt::Display for IpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpState::InPosition    => write!(f, "IP"),
            IpState::OutOfPosition => write!(f, "OOP"),
            IpState::Unknown       => write!(f, "UNKNOWN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentType {
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "BAD")]
    Bad,
}

impl OpponentType {
    /// Only an explicit `GOOD` tag counts as a good opponent.
    pub fn from_tag(tag: Option<&str>) -> OpponentType {
        match tag.map(|t| t.trim().to_ascii_uppercase()) {
            Some(t) if t == "GOOD" => OpponentType::Good,
            _ => OpponentType::Bad,
        }
    }
}

impl fmt::Display for OpponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentType::Good => write!(f, "GOOD"),
            OpponentType::Bad  => write!(f, "BAD"),
        }
    }
}

/// Preflop selection handed over by the range viewer.
///
/// Accepts both the documented keys and the ones a browser UI persists
/// (`pos`, `action`, `hand`, `scenario`, `opponentType`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreflopCtx {
    #[serde(alias = "pos")]
    pub position: String,
    #[serde(alias = "action")]
    pub preflop_action: String,
    pub ip_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_type: Option<String>,
}

impl PreflopCtx {
    pub fn new(position: &str, preflop_action: &str, ip_state: &str) -> Self {
        PreflopCtx {
            position: position.to_string(),
            preflop_action: preflop_action.to_string(),
            ip_state: ip_state.to_string(),
            ..Default::default()
        }
    }

    pub fn with_opponent(mut self, tag: &str) -> Self {
        self.opponent_type = Some(tag.to_string());
        self
    }

    pub fn with_hand(mut self, code: &str) -> Self {
        self.hand = Some(code.to_string());
        self
    }

    /// Load a persisted preflop selection.
    pub fn from_json(raw: &str) -> Result<Self, CoachError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Hero was the last preflop aggressor (open, 3-bet or 4-bet).
    pub fn has_initiative(&self) -> bool {
        matches!(
            self.preflop_action.trim().to_ascii_lowercase().as_str(),
            "open" | "3bet" | "4bet"
        )
    }

    pub fn ip_state(&self) -> IpState {
        IpState::normalize(&self.ip_state)
    }

    pub fn opponent(&self) -> OpponentType {
        OpponentType::from_tag(self.opponent_type.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlopRequest {
    pub hero_cards: Vec<CardInput>,
    pub board_cards: Vec<CardInput>,
    #[serde(default)]
    pub preflop_ctx: PreflopCtx,
}

impl FlopRequest {
    pub fn new<H, B>(hero: &[H], board: &[B], preflop_ctx: PreflopCtx) -> Self
    where
        H: Clone + Into<CardInput>,
        B: Clone + Into<CardInput>,
    {
        FlopRequest {
            hero_cards: hero.iter().cloned().map(Into::into).collect(),
            board_cards: board.iter().cloned().map(Into::into).collect(),
            preflop_ctx,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, CoachError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// A flop action. Serialised as `"CHECK"` or `"BET 33%"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Action {
    Check,
    /// Bet sized as a percentage of the pot.
    Bet(u8),
}

impl Action {
    pub fn is_bet(self) -> bool {
        matches!(self, Action::Bet(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Check  => write!(f, "CHECK"),
            Action::Bet(p) => write!(f, "BET {p}%"),
        }
    }
}

impl From<Action> for String {
    fn from(a: Action) -> String {
        a.to_string()
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "CHECK" {
            return Ok(Action::Check);
        }
        upper
            .strip_prefix("BET")
            .map(|rest| rest.trim().trim_end_matches('%').trim())
            .and_then(|pct| pct.parse::<u8>().ok())
            .map(Action::Bet)
            .ok_or_else(|| ActionParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<String> for Action {
    type Error = ActionParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
