use crate::flop_engine::{
    board::{Impact, Structure},
    coaching::{range_bet, whole_range, CoachContext, CoachingModule, CoachingPlan, PlanTable, PositionTag, STANDARD_VS_RAISE},
    error::MatchError,
    evaluator::HandCategory,
    intent::StrategicIntent,
    models::{Action, OpponentType},
};

const STRONG_DRAWS: &[HandCategory] = &[
    HandCategory::Oesd,
    HandCategory::FlushDraw,
    HandCategory::NutFlushDraw,
];

const LINES: [(StrategicIntent, &str); 6] = whole_range("BET 33%");

static PLAN: PlanTable = PlanTable {
    title: "Plan (IP PAREADO)",
    base: "Base: BET 33%. Against a good opponent drop the medium hands and weak draws.",
    lines: &LINES,
    vs_raise: STANDARD_VS_RAISE,
    reminders: &[
        "PAREADO: the preflop raiser has more of the top pairs here.",
        "Versus a bad opponent bet the whole range.",
        "Versus a good opponent check medium hands, backdoors and weak draws.",
    ],
    strict_bet: Some(Action::Bet(33)),
};

/// Offensive and defensive paired flops. The neutral ones go to
/// [`IpPareadoNeutro`](super::IpPareadoNeutro).
pub struct IpPareado;

impl CoachingModule for IpPareado {
    fn id(&self) -> &'static str {
        "IP_PAREADO"
    }

    fn table(&self) -> &'static PlanTable {
        &PLAN
    }

    fn matches(&self, ctx: &CoachContext) -> Result<bool, MatchError> {
        let spot = ctx.known_spot()?;
        Ok(spot.position == PositionTag::Ip
            && spot.structure == Structure::Paired
            && matches!(spot.impact, Impact::Offensive | Impact::Defensive))
    }

    fn decide_action(&self, ctx: &CoachContext) -> Action {
        if ctx.opponent == OpponentType::Bad {
            return range_bet(ctx, 33);
        }
        if !ctx.can_lead() {
            return Action::Check;
        }
        match ctx.intent {
            Some(StrategicIntent::VeryStrong | StrategicIntent::Strong | StrategicIntent::Air) => Action::Bet(33),
            Some(StrategicIntent::SemiBluff)
                if ctx.category().is_some_and(|c| STRONG_DRAWS.contains(&c)) =>
            {
                Action::Bet(33)
            }
            _ => Action::Check,
        }
    }

    fn build(&self, ctx: &CoachContext) -> CoachingPlan {
        let mut plan = PLAN.build(ctx);
        plan.base = format!("{} (opponent: {})", plan.base, ctx.opponent);
        if ctx.opponent == OpponentType::Good && self.decide_action(ctx) == Action::Check {
            plan.line = "CHECK".to_string();
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flop_engine::{coaching::test_support::*, models::PreflopCtx};

    fn vs(opponent: &str) -> PreflopCtx {
        ip_open().with_opponent(opponent)
    }

    #[test]
    fn claims_offensive_and_defensive_paired() {
        let high = context(["Ac", "Qd"], ["Ks", "Kd", "2c"], ip_open());
        assert!(IpPareado.matches(&high).unwrap());
        let neutral = context(["Ac", "Qd"], ["7s", "7d", "2c"], ip_open());
        assert!(!IpPareado.matches(&neutral).unwrap());
    }

    #[test]
    fn bad_opponent_gets_range_bet() {
        let mid = context(["Qc", "Qd"], ["Ks", "Kd", "2c"], vs("BAD"));
        assert_eq!(IpPareado.decide_action(&mid), Action::Bet(33));
        assert!(IpPareado.build(&mid).base.ends_with("(opponent: BAD)"));
    }

    #[test]
    fn good_opponent_is_selective() {
        // Pocket queens under a king pair: medium, checks.
        let mid = context(["Qc", "Qd"], ["Ks", "Kd", "2c"], vs("GOOD"));
        assert_eq!(mid.intent, Some(StrategicIntent::Medium));
        assert_eq!(IpPareado.decide_action(&mid), Action::Check);
        assert_eq!(IpPareado.build(&mid).line, "CHECK");

        let air = context(["6c", "4d"], ["Ks", "Kd", "9c"], vs("GOOD"));
        assert_eq!(air.intent, Some(StrategicIntent::Air));
        assert_eq!(IpPareado.decide_action(&air), Action::Bet(33));

        let gutshot = context(["Qc", "Jd"], ["Ks", "Kd", "9c"], vs("GOOD"));
        assert_eq!(gutshot.category(), Some(HandCategory::Gutshot));
        assert_eq!(IpPareado.decide_action(&gutshot), Action::Check);
    }
}
