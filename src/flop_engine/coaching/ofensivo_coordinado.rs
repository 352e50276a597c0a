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
    title: "Plan (IP OFENSIVO COORDINADO)",
    base: "BET 75% for value and pressure. Check medium hands, SD value and air.",
    lines: &[
        (StrategicIntent::VeryStrong,    "BET 75%"),
        (StrategicIntent::Strong,        "BET 75%"),
        (StrategicIntent::SemiBluff,     "BET 75% (8+ outs only)"),
        (StrategicIntent::Medium,        "CHECK"),
        (StrategicIntent::ShowdownValue, "CHECK"),
        (StrategicIntent::Air,           "CHECK"),
    ],
    vs_raise: &[
        (StrategicIntent::VeryStrong,    "VS RAISE: 3BET for value."),
        (StrategicIntent::Strong,        "VS RAISE: CALL if small, FOLD if large (discipline)."),
        (StrategicIntent::Medium,        "VS RAISE: FOLD. Do not marry a pair on a connected board."),
        (StrategicIntent::SemiBluff,     "VS RAISE: FOLD."),
        (StrategicIntent::ShowdownValue, "VS RAISE: FOLD."),
        (StrategicIntent::Air,           "VS RAISE: FOLD ALWAYS."),
    ],
    reminders: &[
        "OFENSIVO_COORDINADO: bet big to punish floats and charge the draws.",
        "Facing a big raise, no hero-calls.",
        "Discipline pays here: if it says FOLD, it is FOLD.",
    ],
    strict_bet: None,
};

/// High board with draws: keep pressing, but only with real equity.
pub struct IpOfensivoCoordinado;

impl CoachingModule for IpOfensivoCoordinado {
    fn id(&self) -> &'static str {
        "IP_OFENSIVO_COORDINADO"
    }

    fn table(&self) -> &'static PlanTable {
        &PLAN
    }

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError> {
        Ok(ctx.known_spot()?.is(PositionTag::Ip, Impact::Offensive, Structure::Coordinated))
    }

    fn decide_action(&self, ctx: &CoachContext) -> Action {
        selective_bet(ctx, 75, STRONG_DRAWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flop_engine::coaching::test_support::*;

    #[test]
    fn value_and_flush_draws_bet_big() {
        let top_pair = context(["Qc", "Ad"], ["Qh", "Jh", "2c"], ip_open());
        assert!(IpOfensivoCoordinado.matches(&top_pair).unwrap());
        assert_eq!(IpOfensivoCoordinado.decide_action(&top_pair), Action::Bet(75));

        let fd = context(["5h", "4h"], ["Qh", "Jh", "2c"], ip_open());
        assert_eq!(IpOfensivoCoordinado.decide_action(&fd), Action::Bet(75));
    }

    #[test]
    fn medium_hands_check() {
        let second = context(["Jc", "9d"], ["Qh", "Jh", "2c"], ip_open());
        assert_eq!(IpOfensivoCoordinado.decide_action(&second), Action::Check);
        assert_eq!(IpOfensivoCoordinado.build(&second).line, "CHECK");
    }
}
