//! Coaching modules, one per spot.
//!
//! A spot is the position tag plus the board texture (`IP_NEUTRO_SECO`). Each
//! module claims one or more spots through [`CoachingModule::matches`],
//! decides the flop action for hero and builds a [`CoachingPlan`] explaining
//! the line. The [`Registry`] holds them in a fixed order and hands out the
//! first match.
//!
//! | Module                    | Spots                                   | Line              |
//! |---------------------------|-----------------------------------------|-------------------|
//! | `IP_OFENSIVO_SECO`        | `IP_OFENSIVO_SECO`                      | BET 33% range     |
//! | `IP_OFENSIVO_COORDINADO`  | `IP_OFENSIVO_COORDINADO`                | BET 75% selective |
//! | `IP_NEUTRO_SECO`          | `IP_NEUTRO_SECO`                        | BET 50% range     |
//! | `IP_NEUTRO_COORDINADO`    | `IP_NEUTRO_COORDINADO`                  | BET 75% selective |
//! | `IP_DEFENSIVO_SECO`       | `IP_DEFENSIVO_SECO`                     | BET 75% selective |
//! | `IP_DEFENSIVO_COORDINADO` | `IP_DEFENSIVO_COORDINADO`               | BET 75% selective |
//! | `IP_MONOCOLOR`            | `IP_*_MONOCOLOR`                        | BET 33% range     |
//! | `IP_PAREADO_NEUTRO`       | `IP_NEUTRO_PAREADO`                     | BET 50% range     |
//! | `IP_PAREADO`              | `IP_OFENSIVO_PAREADO`, `IP_DEFENSIVO_PAREADO` | BET 33%, by opponent |
//!
//! Out of position, or without preflop initiative, every module checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flop_engine::{
    board::{BoardTexture, Impact, Structure},
    error::MatchError,
    evaluator::{HandCategory, HandEval},
    intent::{HandCat, StrategicIntent},
    models::{Action, IpState, OpponentType},
};

pub mod registry;

mod defensivo_coordinado;
mod defensivo_seco;
mod monocolor;
mod neutro_coordinado;
mod neutro_seco;
mod ofensivo_coordinado;
mod ofensivo_seco;
mod pareado;
mod pareado_neutro;

pub use defensivo_coordinado::IpDefensivoCoordinado;
pub use defensivo_seco::IpDefensivoSeco;
pub use monocolor::IpMonocolor;
pub use neutro_coordinado::IpNeutroCoordinado;
pub use neutro_seco::IpNeutroSeco;
pub use ofensivo_coordinado::IpOfensivoCoordinado;
pub use ofensivo_seco::IpOfensivoSeco;
pub use pareado::IpPareado;
pub use pareado_neutro::IpPareadoNeutro;
pub use registry::Registry;

// ---------------------------------------------------------------------------
// Spot routing key
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionTag {
    #[serde(rename = "IP")]
    Ip,
    #[serde(rename = "OOP")]
    Oop,
    #[serde(rename = "UNK")]
    Unk,
}

impl From<IpState> for PositionTag {
    fn from(ip: IpState) -> Self {
        match ip {
            IpState::InPosition    => PositionTag::Ip,
            IpState::OutOfPosition => PositionTag::Oop,
            IpState::Unknown       => PositionTag::Unk,
        }
    }
}

impl fmt::Display for PositionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionTag::Ip  => write!(f, "IP"),
            PositionTag::Oop => write!(f, "OOP"),
            PositionTag::Unk => write!(f, "UNK"),
        }
    }
}

/// `{IP|OOP|UNK}_{impact}_{structure}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spot {
    pub position: PositionTag,
    pub impact: Impact,
    pub structure: Structure,
}

impl Spot {
    pub fn new(ip_state: IpState, texture: &BoardTexture) -> Self {
        Spot {
            position: ip_state.into(),
            impact: texture.impact,
            structure: texture.structure,
        }
    }

    pub fn key(&self) -> String {
        self.to_string()
    }

    pub fn is(&self, position: PositionTag, impact: Impact, structure: Structure) -> bool {
        self.position == position && self.impact == impact && self.structure == structure
    }
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.position, self.impact, self.structure)
    }
}

// ---------------------------------------------------------------------------
// Decision context and plan
// ---------------------------------------------------------------------------

/// Everything a module may look at. Built once per decision.
#[derive(Debug, Clone)]
pub struct CoachContext {
    pub spot: Spot,
    pub texture: BoardTexture,
    pub ip_state: IpState,
    pub ini: bool,
    /// `None` when hero's cards could not be evaluated.
    pub hand: Option<HandEval>,
    pub hand_cat: Option<HandCat>,
    pub intent: Option<StrategicIntent>,
    pub opponent: OpponentType,
}

impl CoachContext {
    /// Initiative and in position: the only case modelled with real
    /// selectivity.
    pub fn can_lead(&self) -> bool {
        self.ini && self.ip_state.is_ip()
    }

    pub fn category(&self) -> Option<HandCategory> {
        self.hand.map(|h| h.category)
    }

    /// The spot, or an error when the texture could not be classified.
    pub fn known_spot(&self) -> Result<Spot, MatchError> {
        if self.texture.is_unknown() {
            Err(MatchError::UnknownTexture(self.spot.key()))
        } else {
            Ok(self.spot)
        }
    }
}

/// Anti-tilt trigger: which hand, facing which action, gets the strict
/// discipline reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrictTrigger {
    pub requires_hand_cat: HandCat,
    pub requires_bet_size_tag: Option<Action>,
}

impl StrictTrigger {
    pub fn fires(&self, hand_cat: Option<HandCat>, action: Action) -> bool {
        hand_cat == Some(self.requires_hand_cat)
            && action.is_bet()
            && self.requires_bet_size_tag.map_or(true, |tag| tag == action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingPlan {
    pub title: String,
    pub base: String,
    pub hand_cat: Option<HandCat>,
    pub intent: Option<StrategicIntent>,
    /// Suggested line for hero's intent, independent of the engine's action.
    pub line: String,
    pub vs_raise: String,
    pub reminders: Vec<String>,
    pub strict_trigger: StrictTrigger,
}

/// Static text of a module's plan.
pub struct PlanTable {
    pub title: &'static str,
    pub base: &'static str,
    pub lines: &'static [(StrategicIntent, &'static str)],
    pub vs_raise: &'static [(StrategicIntent, &'static str)],
    pub reminders: &'static [&'static str],
    pub strict_bet: Option<Action>,
}

impl PlanTable {
    fn lookup(table: &[(StrategicIntent, &'static str)], intent: Option<StrategicIntent>) -> String {
        intent
            .and_then(|i| table.iter().find(|(k, _)| *k == i))
            .map(|(_, text)| text.to_string())
            .unwrap_or_default()
    }

    pub fn line(&self, intent: Option<StrategicIntent>) -> String {
        PlanTable::lookup(self.lines, intent)
    }

    pub fn build(&self, ctx: &CoachContext) -> CoachingPlan {
        CoachingPlan {
            title: self.title.to_string(),
            base: self.base.to_string(),
            hand_cat: ctx.hand_cat,
            intent: ctx.intent,
            line: self.line(ctx.intent),
            vs_raise: PlanTable::lookup(self.vs_raise, ctx.intent),
            reminders: self.reminders.iter().map(|r| r.to_string()).collect(),
            strict_trigger: StrictTrigger {
                requires_hand_cat: HandCat::Air,
                requires_bet_size_tag: self.strict_bet,
            },
        }
    }
}

/// Response to a raise shared by most spots.
pub const STANDARD_VS_RAISE: &[(StrategicIntent, &str)] = &[
    (StrategicIntent::VeryStrong,    "VS RAISE: 3BET for value."),
    (StrategicIntent::Strong,        "VS RAISE: CALL if small, FOLD if large."),
    (StrategicIntent::Medium,        "VS RAISE: FOLD."),
    (StrategicIntent::ShowdownValue, "VS RAISE: FOLD."),
    (StrategicIntent::SemiBluff,     "VS RAISE: FOLD."),
    (StrategicIntent::Air,           "VS RAISE: FOLD ALWAYS."),
];

/// Same line for every intent.
pub const fn whole_range(line: &'static str) -> [(StrategicIntent, &'static str); 6] {
    [
        (StrategicIntent::VeryStrong, line),
        (StrategicIntent::Strong, line),
        (StrategicIntent::Medium, line),
        (StrategicIntent::ShowdownValue, line),
        (StrategicIntent::SemiBluff, line),
        (StrategicIntent::Air, line),
    ]
}

// ---------------------------------------------------------------------------
// Module capability set
// ---------------------------------------------------------------------------

pub trait CoachingModule {
    fn id(&self) -> &'static str;

    fn table(&self) -> &'static PlanTable;

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError>;

    fn decide_action(&self, ctx: &CoachContext) -> Action;

    fn build(&self, ctx: &CoachContext) -> CoachingPlan {
        self.table().build(ctx)
    }
}

/// Bet `size` with the whole range when hero can lead.
pub fn range_bet(ctx: &CoachContext, size: u8) -> Action {
    if ctx.can_lead() { Action::Bet(size) } else { Action::Check }
}

/// Bet `size` for value and with the draws listed in `strong_draws`; check
/// everything else.
pub fn selective_bet(ctx: &CoachContext, size: u8, strong_draws: &[HandCategory]) -> Action {
    if !ctx.can_lead() {
        return Action::Check;
    }
    match ctx.intent {
        Some(StrategicIntent::VeryStrong) | Some(StrategicIntent::Strong) => Action::Bet(size),
        Some(StrategicIntent::SemiBluff) => {
            let strong = ctx.category().is_some_and(|c| strong_draws.contains(&c));
            if strong { Action::Bet(size) } else { Action::Check }
        }
        _ => Action::Check,
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::PreflopCtx;

    #[test]
    fn spot_key_format() {
        let ctx = context(["Ac", "Kd"], ["Ks", "7h", "2c"], ip_open());
        assert_eq!(ctx.spot.key(), "IP_OFENSIVO_SECO");
        let oop = context(["Ac", "Kd"], ["9s", "8s", "7s"], PreflopCtx::new("BB", "call", "OOP"));
        assert_eq!(oop.spot.key(), "OOP_DEFENSIVO_MONOCOLOR");
        let unk = context(["Ac", "Kd"], ["Ks", "7h", "2c"], PreflopCtx::new("BB", "call", "?"));
        assert_eq!(unk.spot.key(), "UNK_OFENSIVO_SECO");
    }

    #[test]
    fn selective_bet_only_with_listed_draws() {
        let strong = [HandCategory::Oesd, HandCategory::FlushDraw, HandCategory::NutFlushDraw];
        let oesd = context(["9c", "8d"], ["7h", "6s", "2c"], ip_open());
        assert_eq!(selective_bet(&oesd, 75, &strong), Action::Bet(75));
        let gutshot = context(["9c", "3d"], ["8h", "7s", "Kc"], ip_open());
        assert_eq!(selective_bet(&gutshot, 75, &strong), Action::Check);
        let air = context(["Ac", "3d"], ["Jh", "8s", "6c"], ip_open());
        assert_eq!(selective_bet(&air, 75, &strong), Action::Check);
    }

    #[test]
    fn strict_trigger_fires_on_air_bets() {
        let t = StrictTrigger { requires_hand_cat: HandCat::Air, requires_bet_size_tag: Some(Action::Bet(33)) };
        assert!(t.fires(Some(HandCat::Air), Action::Bet(33)));
        assert!(!t.fires(Some(HandCat::Air), Action::Bet(50)));
        assert!(!t.fires(Some(HandCat::Air), Action::Check));
        assert!(!t.fires(Some(HandCat::MidPair), Action::Bet(33)));
        let any = StrictTrigger { requires_bet_size_tag: None, ..t };
        assert!(any.fires(Some(HandCat::Air), Action::Bet(75)));
    }
}
