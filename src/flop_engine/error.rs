use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),

    #[error("invalid suit: '{0}'")]
    Suit(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionParseError {
    #[error("invalid action: '{0}'")]
    Invalid(String),
}

/// Raised by a coaching module that cannot evaluate its match predicate.
/// The registry treats it as a non-match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("texture is unknown for spot {0}")]
    UnknownTexture(String),

    #[error("coaching module {module} failed: {reason}")]
    Module { module: &'static str, reason: String },
}

/// Errors surfaced by the explicit parsing / configuration entry points.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid hand code: '{0}'")]
    HandCode(String),

    #[error("hero cards do not match the preflop hand: {}", .0.reason())]
    Combo(#[from] ComboMismatch),

    #[error("a card is dealt twice")]
    CardConflict,
}

/// Why a preflop hand code does not describe hero's two cards.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboMismatch {
    #[error("no preflop hand selected")]
    MissingHand,

    #[error("hero cards are not valid cards")]
    InvalidCards,

    #[error("hero holds the same card twice")]
    DuplicateCard,

    #[error("cards do not form the selected pair")]
    PairMismatch,

    #[error("card ranks do not match the selected hand")]
    RanksMismatch,

    #[error("selected hand is suited")]
    NeedsSuited,

    #[error("selected hand is offsuit")]
    NeedsOffsuit,
}

impl ComboMismatch {
    /// Short reason tag for a UI warning.
    pub fn reason(self) -> &'static str {
        match self {
            ComboMismatch::MissingHand   => "missing_hand",
            ComboMismatch::InvalidCards  => "invalid_cards",
            ComboMismatch::DuplicateCard => "duplicate_card",
            ComboMismatch::PairMismatch  => "pair_mismatch",
            ComboMismatch::RanksMismatch => "ranks_mismatch",
            ComboMismatch::NeedsSuited   => "needs_suited",
            ComboMismatch::NeedsOffsuit  => "needs_offsuit",
        }
    }
}
