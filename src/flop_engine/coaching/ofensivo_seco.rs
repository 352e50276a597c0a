use crate::flop_engine::{
    board::{Impact, Structure},
    coaching::{range_bet, whole_range, CoachContext, CoachingModule, PlanTable, PositionTag, STANDARD_VS_RAISE},
    error::MatchError,
    intent::StrategicIntent,
    models::Action,
};

const LINES: [(StrategicIntent, &str); 6] = whole_range("BET 33%");

static PLAN: PlanTable = PlanTable {
    title: "Plan (IP OFENSIVO SECO)",
    base: "C-BET 33% with the whole range.",
    lines: &LINES,
    vs_raise: STANDARD_VS_RAISE,
    reminders: &[
        "OFENSIVO_SECO: the small c-bet prints money; hero-calls do not.",
        "A big raise means strength. Do not invent calls with air.",
        "If the plan says FOLD, it is FOLD.",
    ],
    strict_bet: Some(Action::Bet(33)),
};

/// High dry boards favour the preflop raiser: small c-bet with everything.
pub struct IpOfensivoSeco;

impl CoachingModule for IpOfensivoSeco {
    fn id(&self) -> &'static str {
        "IP_OFENSIVO_SECO"
    }

    fn table(&self) -> &'static PlanTable {
        &PLAN
    }

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError> {
        Ok(ctx.known_spot()?.is(PositionTag::Ip, Impact::Offensive, Structure::Dry))
    }

    fn decide_action(&self, ctx: &CoachContext) -> Action {
        range_bet(ctx, 33)
    }
}
