//! Flop decision engine: card handling, texture, hand strength and coaching.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Cards, preflop context, request and action types |
//! | `error`     | Typed errors for the explicit parsing entry points |
//! | `board`     | Flop texture: structure and impact |
//! | `evaluator` | Hero hand category against the flop |
//! | `intent`    | Category to coaching category to strategic intent |
//! | `coaching`  | Per-spot coaching modules and the first-match registry |
//! | `engine`    | `decide_flop_action()`, the pipeline entry point |
//! | `combos`    | Preflop hand codes and their concrete combos |
//! | `deck`      | 52-card deck with Fisher-Yates shuffle |
//! | `generator` | Seeded spot dealing and drills |
//! | `helpers`   | Card and summary formatting |

pub mod board;
pub mod coaching;
pub mod combos;
pub mod deck;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod helpers;
pub mod intent;
pub mod models;

pub use board::{classify_board, classify_flop, BoardTexture, Impact, Structure};
pub use coaching::{CoachingModule, CoachingPlan, Registry, StrictTrigger};
pub use combos::{available_combos, conflicts_with_board, hand_matches_cards, random_available_combo, HandCode};
pub use engine::{coaching_plan, decide_flop_action, decide_with, Recommendation};
pub use error::{ActionParseError, CardParseError, CoachError, ComboMismatch, MatchError};
pub use evaluator::{evaluate_hand, HandCategory, HandEval};
pub use generator::{deal_spot, generate_drill, validate_spot, DealRequest, Drill};
pub use intent::{adapt_hand_cat, to_intent, HandCat, StrategicIntent};
pub use models::{parse_card, Action, Card, CardInput, FlopRequest, IpState, OpponentType, PreflopCtx, Rank, Suit};
