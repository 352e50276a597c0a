use crate::flop_engine::{
    board::Structure,
    coaching::{range_bet, whole_range, CoachContext, CoachingModule, PlanTable, PositionTag, STANDARD_VS_RAISE},
    error::MatchError,
    intent::StrategicIntent,
    models::Action,
};

const LINES: [(StrategicIntent, &str); 6] = whole_range("BET 33%");

static PLAN: PlanTable = PlanTable {
    title: "Plan (IP MONOCOLOR)",
    base: "Base: BET 33% with the whole range. Small and frequent.",
    lines: &LINES,
    vs_raise: STANDARD_VS_RAISE,
    reminders: &[
        "MONOCOLOR: one suit on board, keep the bet small.",
        "Without the key card do not inflate the pot.",
        "Raised with air: give it up.",
    ],
    strict_bet: Some(Action::Bet(33)),
};

/// Every monotone flop in position, whatever its height.
pub struct IpMonocolor;

impl CoachingModule for IpMonocolor {
    fn id(&self) -> &'static str {
        "IP_MONOCOLOR"
    }

    fn table(&self) -> &'static PlanTable {
        &PLAN
    }

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError> {
        let spot = ctx.known_spot()?;
        Ok(spot.position == PositionTag::Ip && spot.structure == Structure::Monotone)
    }

    fn decide_action(&self, ctx: &CoachContext) -> Action {
        range_bet(ctx, 33)
    }
}
