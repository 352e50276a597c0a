use crate::flop_engine::{
    board::{Impact, Structure},
    coaching::{selective_bet, CoachContext, CoachingModule, PlanTable, PositionTag, STANDARD_VS_RAISE},
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
    title: "Plan (IP NEUTRO COORDINADO)",
    base: "C-BET 75% with strong hands and semi-bluffs with 8+ outs. Check the rest.",
    lines: &[
        (StrategicIntent::VeryStrong,    "BET 75%"),
        (StrategicIntent::Strong,        "BET 75%"),
        (StrategicIntent::SemiBluff,     "BET 75% (8+ outs only)"),
        (StrategicIntent::Medium,        "CHECK"),
        (StrategicIntent::ShowdownValue, "CHECK"),
        (StrategicIntent::Air,           "CHECK"),
    ],
    vs_raise: STANDARD_VS_RAISE,
    reminders: &[
        "NEUTRO_COORDINADO: connected but not extreme, so aggression is selective.",
        "Bet big with strong hands and real semi-bluffs (8+ outs).",
        "With medium hands and SD value, prefer to check.",
    ],
    strict_bet: None,
};

pub struct IpNeutroCoordinado;

impl CoachingModule for IpNeutroCoordinado {
    fn id(&self) -> &'static str {
        "IP_NEUTRO_COORDINADO"
    }

    fn table(&self) -> &'static PlanTable {
        &PLAN
    }

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError> {
        Ok(ctx.known_spot()?.is(PositionTag::Ip, Impact::Neutral, Structure::Coordinated))
    }

    fn decide_action(&self, ctx: &CoachContext) -> Action {
        selective_bet(ctx, 75, STRONG_DRAWS)
    }
}
