use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::flop_engine::{
    combos::{conflicts_with_board, hand_matches_cards, random_available_combo, HandCode},
    deck::Deck,
    engine::{decide_flop_action, Recommendation},
    error::{CoachError, ComboMismatch},
    models::{parse_cards, FlopRequest, PreflopCtx},
};

/// What to deal: the preflop selection and an optional seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRequest {
    #[serde(default)]
    pub preflop_ctx: PreflopCtx,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl DealRequest {
    pub fn new(preflop_ctx: PreflopCtx) -> Self {
        DealRequest { preflop_ctx, rng_seed: None }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// A dealt spot together with the engine's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drill {
    pub drill_id: String,
    pub request: FlopRequest,
    pub recommendation: Recommendation,
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

fn deal_with(rng: &mut StdRng, preflop_ctx: &PreflopCtx) -> Result<FlopRequest, CoachError> {
    let code = match preflop_ctx.hand.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => Some(code.parse::<HandCode>()?),
        _ => None,
    };

    let hero = match code.and_then(|code| random_available_combo(rng, code, &[])) {
        Some(combo) => combo.to_vec(),
        None => Deck::new_shuffled(rng).deal_n(2),
    };
    let board = Deck::without(rng, &hero).deal_n(3);

    let spot = FlopRequest::new(&hero[..], &board[..], preflop_ctx.clone());
    validate_spot(&spot)?;
    Ok(spot)
}

/// Caller-side guard for a typed-in spot: no card twice, and hero's cards
/// are a combo of the preflop hand code when one is set.
///
/// [`decide_flop_action`] does not run these checks.
pub fn validate_spot(request: &FlopRequest) -> Result<(), CoachError> {
    let hero = parse_cards(&request.hero_cards);
    let board = parse_cards(&request.board_cards);
    if conflicts_with_board(&hero, &board) {
        return Err(CoachError::CardConflict);
    }

    let code = request.preflop_ctx.hand.as_deref().map(str::trim).filter(|c| !c.is_empty());
    if code.is_some() {
        let [a, b] = match hero.as_slice() {
            [a, b] => [a.to_string(), b.to_string()],
            _ => return Err(ComboMismatch::InvalidCards.into()),
        };
        hand_matches_cards(code, &a, &b)?;
    }
    Ok(())
}

/// Deal hero's two cards and a flop. When the context names a preflop hand
/// code, hero's cards are one of its combos.
///
/// Same seed, same spot. Fails only on an unreadable hand code.
pub fn deal_spot(request: &DealRequest) -> Result<FlopRequest, CoachError> {
    let mut rng = rng_for(request.rng_seed);
    deal_with(&mut rng, &request.preflop_ctx)
}

/// Deal a spot and solve it.
pub fn generate_drill(request: &DealRequest) -> Result<Drill, CoachError> {
    let mut rng = rng_for(request.rng_seed);
    let drill_id = format!("FL-{:08X}", rng.next_u32());
    let spot = deal_with(&mut rng, &request.preflop_ctx)?;
    let recommendation = decide_flop_action(&spot);
    Ok(Drill { drill_id, request: spot, recommendation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flop_engine::models::Card;

    fn ctx() -> PreflopCtx {
        PreflopCtx::new("BTN", "open", "IP")
    }

    #[test]
    fn same_seed_same_spot() {
        let req = DealRequest::new(ctx()).seeded(42);
        assert_eq!(deal_spot(&req).unwrap(), deal_spot(&req).unwrap());
        assert_ne!(
            deal_spot(&DealRequest::new(ctx()).seeded(1)).unwrap(),
            deal_spot(&DealRequest::new(ctx()).seeded(2)).unwrap(),
        );
    }

    #[test]
    fn dealt_cards_are_distinct() {
        for seed in 0..50 {
            let spot = deal_spot(&DealRequest::new(ctx()).seeded(seed)).unwrap();
            let mut all: Vec<Card> = parse_cards(&spot.hero_cards);
            all.extend(parse_cards(&spot.board_cards));
            assert_eq!(all.len(), 5);
            let unique: std::collections::HashSet<_> = all.iter().collect();
            assert_eq!(unique.len(), 5, "seed {seed}");
        }
    }

    #[test]
    fn hand_code_pins_hero_cards() {
        for seed in 0..20 {
            let spot = deal_spot(&DealRequest::new(ctx().with_hand("AJs")).seeded(seed)).unwrap();
            let hero: Vec<String> = parse_cards(&spot.hero_cards).iter().map(|c| c.to_string()).collect();
            assert_eq!(hand_matches_cards(Some("AJs"), &hero[0], &hero[1]), Ok(()));
        }
    }

    #[test]
    fn bad_hand_code_is_an_error() {
        let err = deal_spot(&DealRequest::new(ctx().with_hand("XYz")).seeded(1)).unwrap_err();
        assert!(matches!(err, CoachError::HandCode(_)));
    }

    #[test]
    fn typed_spots_are_checked_against_the_hand_code() {
        let ok = FlopRequest::new(&["Ah", "Jh"], &["Ks", "7h", "2c"], ctx().with_hand("AJs"));
        assert!(validate_spot(&ok).is_ok());
        assert!(validate_spot(&FlopRequest::new(&["Ah", "Jd"], &["Ks", "7h", "2c"], ctx())).is_ok());

        let offsuit = FlopRequest::new(&["Ah", "Jd"], &["Ks", "7h", "2c"], ctx().with_hand("AJs"));
        assert!(matches!(validate_spot(&offsuit), Err(CoachError::Combo(ComboMismatch::NeedsSuited))));

        let short = FlopRequest::new(&["Ah"], &["Ks", "7h", "2c"], ctx().with_hand("AJs"));
        assert!(matches!(validate_spot(&short), Err(CoachError::Combo(ComboMismatch::InvalidCards))));
    }

    #[test]
    fn repeated_card_is_a_conflict() {
        let dup = FlopRequest::new(&["Ks", "Jd"], &["Ks", "7h", "2c"], ctx());
        assert!(matches!(validate_spot(&dup), Err(CoachError::CardConflict)));
        let pair = FlopRequest::new(&["Jd", "Jd"], &["Ks", "7h", "2c"], ctx());
        assert!(matches!(validate_spot(&pair), Err(CoachError::CardConflict)));
    }

    #[test]
    fn dealt_spots_pass_the_guard() {
        for seed in 0..30 {
            let spot = deal_spot(&DealRequest::new(ctx().with_hand("KQo")).seeded(seed)).unwrap();
            assert!(validate_spot(&spot).is_ok(), "seed {seed}");
        }
    }

    #[test]
    fn drill_is_deterministic() {
        let req = DealRequest::new(ctx()).seeded(7);
        let a = generate_drill(&req).unwrap();
        let b = generate_drill(&req).unwrap();
        assert_eq!(a, b);
        assert!(a.drill_id.starts_with("FL-"));
        assert_eq!(a.recommendation.street, "FLOP");
    }

    #[test]
    fn entropy_seed_produces_a_valid_drill() {
        let drill = generate_drill(&DealRequest::new(ctx())).unwrap();
        assert!(!drill.recommendation.invalid_input);
        assert_eq!(drill.request.board_cards.len(), 3);
    }
}
