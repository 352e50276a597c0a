use crate::flop_engine::{
    board::{Impact, Structure},
    coaching::{selective_bet, CoachContext, CoachingModule, PlanTable, PositionTag},
    error::MatchError,
    evaluator::HandCategory,
    intent::StrategicIntent,
    models::Action,
};

/// 8+ outs.
const STRONG_DRAWS: &[HandCategory] = &[
    HandCategory::Oesd,
    HandCategory::FlushDraw,
    HandCategory::NutFlushDraw,
];

static PLAN: PlanTable = PlanTable {
    title: "Plan (IP DEFENSIVO COORDINADO)",
    base: "Base: CHECK. Connected board full of draws: do not build the pot without a clear edge.",
    lines: &[
        (StrategicIntent::VeryStrong,    "BET 75%"),
        (StrategicIntent::Strong,        "BET 75%"),
        (StrategicIntent::Medium,        "CHECK"),
        (StrategicIntent::ShowdownValue, "CHECK"),
        (StrategicIntent::SemiBluff,     "BET 75% (selective)"),
        (StrategicIntent::Air,           "CHECK"),
    ],
    vs_raise: &[
        (StrategicIntent::VeryStrong,    "VS RAISE: 3BET for value."),
        (StrategicIntent::Strong,        "VS RAISE: FOLD to big raises."),
        (StrategicIntent::Medium,        "VS RAISE: FOLD."),
        (StrategicIntent::ShowdownValue, "VS RAISE: FOLD."),
        (StrategicIntent::SemiBluff,     "VS RAISE: FOLD."),
        (StrategicIntent::Air,           "VS RAISE: FOLD ALWAYS."),
    ],
    reminders: &[
        "DEFENSIVO_COORDINADO: lots of equity is live, do not marry medium hands.",
        "The base line is CHECK. Bet big with very strong and strong hands and some semi-bluffs.",
        "If raised, FOLD by default unless very strong.",
    ],
    strict_bet: None,
};

pub struct IpDefensivoCoordinado;

impl CoachingModule for IpDefensivoCoordinado {
    fn id(&self) -> &'static str {
        "IP_DEFENSIVO_COORDINADO"
    }

    fn table(&self) -> &'static PlanTable {
        &PLAN
    }

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError> {
        Ok(ctx.known_spot()?.is(PositionTag::Ip, Impact::Defensive, Structure::Coordinated))
    }

    fn decide_action(&self, ctx: &CoachContext) -> Action {
        selective_bet(ctx, 75, STRONG_DRAWS)
    }
}
