//! Flop decision pipeline.
//!
//! [`decide_flop_action`] is the single entry point: it validates the board,
//! reads initiative and position from the preflop context, classifies the
//! texture and, when hero has initiative, evaluates the hand and hands the
//! spot to the first matching coaching module. Every path ends in a complete
//! [`Recommendation`]; nothing here returns an error.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::flop_engine::{
    board::{classify_board, BoardTexture, Impact, Structure},
    coaching::{CoachContext, CoachingPlan, PositionTag, Registry, Spot},
    evaluator::{evaluate_hand, HandCategory},
    intent::{adapt_hand_cat, to_intent, StrategicIntent},
    models::{parse_cards, Action, FlopRequest, IpState},
};

pub const STREET: &str = "FLOP";

/// Output record of the flop engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub street: String,
    pub action: Action,
    pub note: String,
    pub texture: String,
    pub spot: String,
    pub ip_state: IpState,
    pub ini: bool,
    #[serde(default)]
    pub invalid_input: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_cat: Option<HandCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<StrategicIntent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<CoachingPlan>,
}

impl Recommendation {
    fn check(note: String, texture: &BoardTexture, spot: Spot, ip_state: IpState, ini: bool) -> Self {
        Recommendation {
            street: STREET.to_string(),
            action: Action::Check,
            note,
            texture: texture.texture.clone(),
            spot: spot.key(),
            ip_state,
            ini,
            invalid_input: false,
            hand_cat: None,
            intent: None,
            module: None,
            plan: None,
        }
    }

    fn invalid(mut self) -> Self {
        self.invalid_input = true;
        self
    }
}

/// Decide hero's flop action with the standard module set.
pub fn decide_flop_action(request: &FlopRequest) -> Recommendation {
    decide_with(&Registry::standard(), request)
}

/// Same as [`decide_flop_action`] against a caller-supplied registry.
pub fn decide_with(registry: &Registry, request: &FlopRequest) -> Recommendation {
    let ctx = &request.preflop_ctx;
    let ini = ctx.has_initiative();
    let ip_state = ctx.ip_state();

    let board = parse_cards(&request.board_cards);
    let texture = classify_board(&board);
    let spot = Spot::new(ip_state, &texture);
    debug!("flop {} · spot {} · ini={}", texture, spot, ini);

    if board.len() != 3 {
        warn!("board has {} valid cards, expected 3", board.len());
        let note = format!("Invalid board ({} cards) · check", board.len());
        return Recommendation::check(note, &texture, spot, ip_state, ini).invalid();
    }

    if !ini {
        let note = match ip_state {
            IpState::InPosition => format!("No initiative (IP) · {texture} · check back"),
            _ => format!("No initiative ({ip_state}) · {texture} · check"),
        };
        return Recommendation::check(note, &texture, spot, ip_state, ini);
    }

    let hero = parse_cards(&request.hero_cards);
    if hero.len() != 2 {
        warn!("hero has {} valid cards, expected 2", hero.len());
        let note = format!("Invalid hand ({} cards) · check", hero.len());
        return Recommendation::check(note, &texture, spot, ip_state, ini).invalid();
    }

    let hand = evaluate_hand(&hero, &board);
    let hand_cat = adapt_hand_cat(hand.category);
    let intent = to_intent(hand_cat);
    debug!("hand {} -> {} -> {}", hand.category, hand_cat, intent);

    let coach = CoachContext {
        spot,
        texture: texture.clone(),
        ip_state,
        ini,
        hand: Some(hand),
        hand_cat: Some(hand_cat),
        intent: Some(intent),
        opponent: ctx.opponent(),
    };

    let mut rec = Recommendation::check(String::new(), &texture, spot, ip_state, ini);
    rec.hand_cat = Some(hand.category);
    rec.intent = Some(intent);

    match registry.pick(&coach) {
        Some(module) => {
            rec.action = module.decide_action(&coach);
            rec.note = format!("Ini+{} · {} · {} · {}", spot.position, texture, module.id(), intent);
            rec.module = Some(module.id().to_string());
            rec.plan = Some(module.build(&coach));
        }
        None => {
            rec.action = fallback_action(&spot);
            rec.note = match rec.action {
                Action::Check => format!("Ini+{} · {} · fallback check", spot.position, texture),
                _ => format!("Ini+{} · {} · fallback small bet", spot.position, texture),
            };
            debug!("fallback for {}: {}", spot, rec.action);
        }
    }
    rec
}

/// Small bet only on dry offensive textures in position.
fn fallback_action(spot: &Spot) -> Action {
    if spot.is(PositionTag::Ip, Impact::Offensive, Structure::Dry) {
        Action::Bet(33)
    } else {
        Action::Check
    }
}

/// The coaching plan alone, when a module claims the spot.
pub fn coaching_plan(request: &FlopRequest) -> Option<CoachingPlan> {
    decide_flop_action(request).plan
}
