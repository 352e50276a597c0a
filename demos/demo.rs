//! Seeded flop drills, end to end.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=debug` to watch the pipeline steps.
//!
//! 1. **Preflop selections**: one drill per preflop selection, with fixed
//!    seeds so the output is reproducible.
//! 2. **Hand codes**: the same seed with a preflop hand code pins hero's cards
//!    to a combo of that hand.
//! 3. **Typed-in spots**: hand-entered cards are checked against the preflop
//!    hand code before the engine sees them.
//! 4. **Client payload**: the JSON a browser client receives for one drill.

use flop_coach::flop_engine::helpers::{board_str, hand_str, summary};
use flop_coach::flop_engine::models::parse_cards;
use flop_coach::{
    decide_flop_action, generate_drill, to_client_payload, validate_spot, DealRequest, Drill, FlopRequest,
    PreflopCtx,
};

/// Pretty-print one drill with its coaching plan.
fn print_drill(drill: &Drill) {
    let req = &drill.request;
    let rec = &drill.recommendation;
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  {}", drill.drill_id, summary(&req.hero_cards, &req.board_cards, rec));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Hero:  {}   Board: {}", hand_str(&parse_cards(&req.hero_cards)), board_str(&parse_cards(&req.board_cards)));
    println!("  Preflop: {} {} ({})", req.preflop_ctx.position, req.preflop_ctx.preflop_action, rec.ip_state);
    println!("  Action: {}   Note: {}", rec.action, rec.note);
    if let Some(plan) = &rec.plan {
        println!();
        println!("  {}", plan.title);
        println!("  {}", plan.base);
        println!("  Line: {}   {}", plan.line, plan.vs_raise);
        for r in &plan.reminders {
            println!("   - {r}");
        }
    }
    println!();
}

fn main() {
    env_logger::init();

    // ── Preflop selections ───────────────────────────────────────────────────
    println!();
    println!("══ Preflop selections ══");
    println!();

    let selections = [
        (PreflopCtx::new("BTN", "open", "IP"),                       1001u64),
        (PreflopCtx::new("CO", "3bet", "IP").with_opponent("GOOD"),  2002),
        (PreflopCtx::new("SB", "open", "OOP"),                       3003),
        (PreflopCtx::new("BB", "call", "OOP"),                       4004),
        (PreflopCtx::new("BTN", "call", "IP"),                       5005),
    ];

    for (ctx, seed) in selections {
        match generate_drill(&DealRequest::new(ctx).seeded(seed)) {
            Ok(drill) => print_drill(&drill),
            Err(e) => eprintln!("  drill failed: {e}"),
        }
    }

    // ── Hand codes ───────────────────────────────────────────────────────────
    println!();
    println!("══ Hand codes (seed 7) ══");
    println!();

    for code in ["AKs", "QQ", "T9o", "A5"] {
        let ctx = PreflopCtx::new("BTN", "open", "IP").with_hand(code);
        match generate_drill(&DealRequest::new(ctx).seeded(7)) {
            Ok(drill) => println!("  {code:>4}: {}", summary(&drill.request.hero_cards, &drill.request.board_cards, &drill.recommendation)),
            Err(e) => eprintln!("  {code}: {e}"),
        }
    }

    // ── Typed-in spots ───────────────────────────────────────────────────────
    println!();
    println!("══ Typed-in spots ══");
    println!();

    let typed: [(&[&str], &[&str], &str); 3] = [
        (&["Ah", "Jh"], &["Ks", "7h", "2c"], "AJs"),
        (&["Ah", "Jd"], &["Ks", "7h", "2c"], "AJs"),
        (&["Ks", "Qd"], &["Ks", "7h", "2c"], "KQo"),
    ];
    for (hero, board, code) in typed {
        let req = FlopRequest::new(hero, board, PreflopCtx::new("BTN", "open", "IP").with_hand(code));
        match validate_spot(&req) {
            Ok(()) => println!("  {code:>4}: {}", summary(&req.hero_cards, &req.board_cards, &decide_flop_action(&req))),
            Err(e) => println!("  {code:>4}: {} {} rejected: {e}", hero.join(""), board.join(" ")),
        }
    }

    // ── Client payload ───────────────────────────────────────────────────────
    println!();
    println!("══ Client payload ══");
    println!();

    if let Ok(drill) = generate_drill(&DealRequest::new(PreflopCtx::new("BTN", "open", "IP")).seeded(42)) {
        let hero = parse_cards(&drill.request.hero_cards);
        let board = parse_cards(&drill.request.board_cards);
        let payload = to_client_payload(&drill.recommendation, &hero, &board);
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("  payload failed: {e}"),
        }
    }
}
