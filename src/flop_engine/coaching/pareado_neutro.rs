use crate::flop_engine::{
    board::{Impact, Structure},
    coaching::{range_bet, whole_range, CoachContext, CoachingModule, PlanTable, PositionTag, STANDARD_VS_RAISE},
    error::MatchError,
    intent::StrategicIntent,
    models::Action,
};

const LINES: [(StrategicIntent, &str); 6] = whole_range("BET 50%");

static PLAN: PlanTable = PlanTable {
    title: "Plan (IP NEUTRO PAREADO)",
    base: "Base: BET 50% with the whole range.",
    lines: &LINES,
    vs_raise: STANDARD_VS_RAISE,
    reminders: &[
        "NEUTRO_PAREADO: few hands connect, pressure with a medium size.",
        "A raise here usually means trips. Do not pay it with air.",
    ],
    strict_bet: None,
};

pub struct IpPareadoNeutro;

impl CoachingModule for IpPareadoNeutro {
    fn id(&self) -> &'static str {
        "IP_PAREADO_NEUTRO"
    }

    fn table(&self) -> &'static PlanTable {
        &PLAN
    }

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError> {
        Ok(ctx.known_spot()?.is(PositionTag::Ip, Impact::Neutral, Structure::Paired))
    }

    fn decide_action(&self, ctx: &CoachContext) -> Action {
        range_bet(ctx, 50)
    }
}
