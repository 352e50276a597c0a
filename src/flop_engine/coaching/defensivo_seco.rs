use crate::flop_engine::{
    board::{Impact, Structure},
    coaching::{selective_bet, CoachContext, CoachingModule, PlanTable, PositionTag, STANDARD_VS_RAISE},
    error::MatchError,
    evaluator::HandCategory,
    intent::StrategicIntent,
    models::Action,
};

/// Flush draws (~9 outs) and open-enders (~8). Gutshots do not qualify.
const STRONG_DRAWS: &[HandCategory] = &[
    HandCategory::NutFlushDraw,
    HandCategory::FlushDraw,
    HandCategory::Oesd,
];

static PLAN: PlanTable = PlanTable {
    title: "Plan (IP DEFENSIVO SECO)",
    base: "Base: CHECK. Bet big for value and pressure when it is warranted.",
    lines: &[
        (StrategicIntent::VeryStrong,    "BET 75%"),
        (StrategicIntent::Strong,        "BET 75%"),
        (StrategicIntent::Medium,        "CHECK"),
        (StrategicIntent::ShowdownValue, "CHECK"),
        (StrategicIntent::SemiBluff,     "BET 75% (selective)"),
        (StrategicIntent::Air,           "CHECK"),
    ],
    vs_raise: STANDARD_VS_RAISE,
    reminders: &[
        "DEFENSIVO_SECO: the board favours the caller, so control the pot.",
        "Your default is CHECK; bet big only with a clear edge (value or pressure).",
        "Facing a big raise, do not pay out of curiosity.",
    ],
    strict_bet: None,
};

/// Low dry boards hit the caller's range.
pub struct IpDefensivoSeco;

impl CoachingModule for IpDefensivoSeco {
    fn id(&self) -> &'static str {
        "IP_DEFENSIVO_SECO"
    }

    fn table(&self) -> &'static PlanTable {
        &PLAN
    }

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError> {
        Ok(ctx.known_spot()?.is(PositionTag::Ip, Impact::Defensive, Structure::Dry))
    }

    fn decide_action(&self, ctx: &CoachContext) -> Action {
        selective_bet(ctx, 75, STRONG_DRAWS)
    }
}
