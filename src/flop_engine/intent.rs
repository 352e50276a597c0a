//! From hand category to strategic intent.
//!
//! Two fixed tables: [`adapt_hand_cat`] collapses the evaluator's fine
//! category into the seven coaching categories, and [`to_intent`] maps those
//! onto the six intents the coaching modules decide on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flop_engine::evaluator::HandCategory;

/// Coarse hand category used by the coaching plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandCat {
    Monster,
    TopPairGood,
    TopPairWeak,
    MidPair,
    Draw,
    Backdoor,
    Air,
}

impl HandCat {
    pub fn tag(self) -> &'static str {
        match self {
            HandCat::Monster     => "MONSTER",
            HandCat::TopPairGood => "TOP_PAIR_GOOD",
            HandCat::TopPairWeak => "TOP_PAIR_WEAK",
            HandCat::MidPair     => "MID_PAIR",
            HandCat::Draw        => "DRAW",
            HandCat::Backdoor    => "BACKDOOR",
            HandCat::Air         => "AIR",
        }
    }

    /// Lenient lookup by tag; unknown tags read as `AIR`.
    pub fn from_tag(tag: &str) -> HandCat {
        match tag.trim().to_ascii_uppercase().as_str() {
            "MONSTER"       => HandCat::Monster,
            "TOP_PAIR_GOOD" => HandCat::TopPairGood,
            "TOP_PAIR_WEAK" => HandCat::TopPairWeak,
            "MID_PAIR"      => HandCat::MidPair,
            "DRAW"          => HandCat::Draw,
            "BACKDOOR"      => HandCat::Backdoor,
            _               => HandCat::Air,
        }
    }
}

impl fmt::Display for HandCat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategicIntent {
    #[serde(rename = "MANO_MUY_FUERTE")]
    VeryStrong,
    #[serde(rename = "MANO_FUERTE")]
    Strong,
    #[serde(rename = "MANO_MEDIA")]
    Medium,
    #[serde(rename = "MANO_SEMIFAROL")]
    SemiBluff,
    #[serde(rename = "SD_VALUE")]
    ShowdownValue,
    #[serde(rename = "MANO_AIRE")]
    Air,
}

impl StrategicIntent {
    pub const ALL: [StrategicIntent; 6] = [
        StrategicIntent::VeryStrong,
        StrategicIntent::Strong,
        StrategicIntent::Medium,
        StrategicIntent::SemiBluff,
        StrategicIntent::ShowdownValue,
        StrategicIntent::Air,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            StrategicIntent::VeryStrong    => "MANO_MUY_FUERTE",
            StrategicIntent::Strong        => "MANO_FUERTE",
            StrategicIntent::Medium        => "MANO_MEDIA",
            StrategicIntent::SemiBluff     => "MANO_SEMIFAROL",
            StrategicIntent::ShowdownValue => "SD_VALUE",
            StrategicIntent::Air           => "MANO_AIRE",
        }
    }
}

impl fmt::Display for StrategicIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

pub fn adapt_hand_cat(category: HandCategory) -> HandCat {
    match category {
        HandCategory::Monster => HandCat::Monster,
        HandCategory::Overpair | HandCategory::TopPairGood => HandCat::TopPairGood,
        HandCategory::TopPairWeak => HandCat::TopPairWeak,
        HandCategory::SecondPair
        | HandCategory::Underpair
        | HandCategory::PocketPairHigh
        | HandCategory::PocketPairMid => HandCat::MidPair,
        HandCategory::PocketPairLow => HandCat::Air,
        HandCategory::NutFlushDraw
        | HandCategory::FlushDraw
        | HandCategory::Oesd
        | HandCategory::Gutshot => HandCat::Draw,
        HandCategory::BackdoorFlush => HandCat::Backdoor,
        HandCategory::Air => HandCat::Air,
    }
}

pub fn to_intent(cat: HandCat) -> StrategicIntent {
    match cat {
        HandCat::Monster                        => StrategicIntent::VeryStrong,
        HandCat::TopPairGood                    => StrategicIntent::Strong,
        HandCat::TopPairWeak | HandCat::MidPair => StrategicIntent::Medium,
        HandCat::Draw                           => StrategicIntent::SemiBluff,
        HandCat::Backdoor                       => StrategicIntent::ShowdownValue,
        HandCat::Air                            => StrategicIntent::Air,
    }
}

/// Intent for a loosely-typed category tag; anything unknown is air.
pub fn intent_for_tag(tag: &str) -> StrategicIntent {
    to_intent(HandCat::from_tag(tag))
}

/// Evaluator category straight to intent.
pub fn intent_of(category: HandCategory) -> StrategicIntent {
    to_intent(adapt_hand_cat(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_table() {
        assert_eq!(adapt_hand_cat(HandCategory::Overpair), HandCat::TopPairGood);
        assert_eq!(adapt_hand_cat(HandCategory::PocketPairHigh), HandCat::MidPair);
        assert_eq!(adapt_hand_cat(HandCategory::PocketPairLow), HandCat::Air);
        assert_eq!(adapt_hand_cat(HandCategory::Gutshot), HandCat::Draw);
        assert_eq!(adapt_hand_cat(HandCategory::BackdoorFlush), HandCat::Backdoor);
    }

    #[test]
    fn intent_table() {
        assert_eq!(intent_of(HandCategory::Monster), StrategicIntent::VeryStrong);
        assert_eq!(intent_of(HandCategory::TopPairGood), StrategicIntent::Strong);
        assert_eq!(intent_of(HandCategory::TopPairWeak), StrategicIntent::Medium);
        assert_eq!(intent_of(HandCategory::SecondPair), StrategicIntent::Medium);
        assert_eq!(intent_of(HandCategory::NutFlushDraw), StrategicIntent::SemiBluff);
        assert_eq!(intent_of(HandCategory::BackdoorFlush), StrategicIntent::ShowdownValue);
        assert_eq!(intent_of(HandCategory::Air), StrategicIntent::Air);
    }

    #[test]
    fn unknown_tag_defaults_to_air() {
        assert_eq!(intent_for_tag("SET"), StrategicIntent::Air);
        assert_eq!(intent_for_tag("draw"), StrategicIntent::SemiBluff);
        assert_eq!(serde_json::to_string(&StrategicIntent::ShowdownValue).unwrap(), r#""SD_VALUE""#);
    }
}
