//! # flop_coach
//!
//! A heads-up flop advisor. Given hero's two hole cards, the three flop cards
//! and the preflop context (position, preflop action, in or out of position),
//! the engine recommends a flop action (`CHECK`, `BET 33%`, `BET 50%`,
//! `BET 75%`) with a note and a coaching plan explaining the line.
//!
//! ## How it works
//!
//! 1. Build a [`FlopRequest`]: hero cards, board cards and a [`PreflopCtx`].
//!    Cards may be strings (`"Kc"`, `"K♣"`, `"10h"`) or `{rank, suit}` objects.
//! 2. Call [`decide_flop_action`]. The board is classified (for example
//!    `OFENSIVO_SECO`), hero's hand is evaluated and mapped to an intent, and
//!    the first coaching module claiming the spot decides the action.
//! 3. The returned [`Recommendation`] carries the action, texture, spot key
//!    and, when a module matched, the [`CoachingPlan`].
//!
//! Without preflop initiative hero always checks. Malformed input never
//! panics; it yields a `CHECK` flagged `invalid_input`.
//!
//! ## Quick start
//!
//! ```rust
//! use flop_coach::{decide_flop_action, Action, FlopRequest, PreflopCtx};
//!
//! let ctx = PreflopCtx::new("BTN", "open", "IP");
//! let rec = decide_flop_action(&FlopRequest::new(&["Ac", "Kd"], &["Ks", "7h", "2c"], ctx));
//! assert_eq!(rec.action, Action::Bet(33));
//! assert_eq!(rec.spot, "IP_OFENSIVO_SECO");
//!
//! // Seeded practice spots:
//! use flop_coach::{generate_drill, DealRequest};
//! let drill = generate_drill(&DealRequest::new(PreflopCtx::new("BTN", "open", "IP")).seeded(42)).unwrap();
//! println!("{}: {}", drill.drill_id, drill.recommendation.note);
//! ```

pub mod flop_engine;
pub mod payload;

// Convenience re-exports so callers can use `flop_coach::decide_flop_action`
// directly without reaching into `flop_engine::`.
pub use flop_engine::{
    classify_board, classify_flop, coaching_plan, deal_spot, decide_flop_action, evaluate_hand,
    generate_drill, parse_card, validate_spot, Action, BoardTexture, Card, CardInput, CoachError, CoachingPlan,
    DealRequest, Drill, FlopRequest, HandCategory, IpState, PreflopCtx, Recommendation,
    StrategicIntent,
};
pub use payload::to_client_payload;

#[cfg(test)]
mod tests;
