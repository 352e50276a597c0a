use crate::flop_engine::{
    board::{Impact, Structure},
    coaching::{range_bet, whole_range, CoachContext, CoachingModule, PlanTable, PositionTag, STANDARD_VS_RAISE},
    error::MatchError,
    intent::StrategicIntent,
    models::Action,
};

const LINES: [(StrategicIntent, &str); 6] = whole_range("BET 50%");

static PLAN: PlanTable = PlanTable {
    title: "Plan (IP NEUTRO SECO)",
    base: "C-BET 50% with the whole range.",
    lines: &LINES,
    vs_raise: STANDARD_VS_RAISE,
    reminders: &[
        "NEUTRO_SECO: you can c-bet the range with a medium size.",
        "Facing a big raise, do not invent calls with medium hands.",
    ],
    strict_bet: None,
};

pub struct IpNeutroSeco;

impl CoachingModule for IpNeutroSeco {
    fn id(&self) -> &'static str {
        "IP_NEUTRO_SECO"
    }

    fn table(&self) -> &'static PlanTable {
        &PLAN
    }

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError> {
        Ok(ctx.known_spot()?.is(PositionTag::Ip, Impact::Neutral, Structure::Dry))
    }

    fn decide_action(&self, ctx: &CoachContext) -> Action {
        range_bet(ctx, 50)
    }
}
