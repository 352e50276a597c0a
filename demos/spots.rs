//! The worked reference spots, one per line.
//!
//! Run with: `cargo run --example spots`

use flop_coach::flop_engine::helpers::summary;
use flop_coach::{classify_flop, decide_flop_action, CardInput, FlopRequest, PreflopCtx};

fn main() {
    env_logger::init();

    let open_ip = PreflopCtx::new("BTN", "open", "IP");
    let spots = [
        (["Ac", "Qd"], ["Ks", "7h", "2c"], PreflopCtx::new("BB", "call", "IP")),
        (["Ac", "Qd"], ["Ks", "7h", "2c"], open_ip.clone()),
        (["Ah", "5h"], ["Qh", "Jh", "2c"], open_ip.clone()),
        (["As", "Ks"], ["Qs", "7s", "2h"], open_ip.clone()),
        (["7c", "7d"], ["7h", "Ks", "2c"], open_ip.clone()),
        (["6c", "4d"], ["Ks", "Kd", "2c"], open_ip.clone().with_opponent("BAD")),
        (["6c", "4d"], ["Ks", "Kd", "2c"], open_ip.clone().with_opponent("GOOD")),
        (["Ac", "Kd"], ["9s", "8s", "7s"], open_ip.clone()),
        (["Tc", "Td"], ["8s", "3h", "2c"], open_ip),
    ];

    println!();
    println!("{:<26} {:<40} {}", "TEXTURE", "SPOT", "CATEGORY / INTENT");
    for (hero, board, ctx) in spots {
        let (hero, board) = (inputs(&hero), inputs(&board));
        let texture = classify_flop(&board);
        let rec = decide_flop_action(&FlopRequest::new(&hero, &board, ctx));
        let detail = match (rec.hand_cat, rec.intent) {
            (Some(cat), Some(intent)) => format!("{cat} / {intent}"),
            _ => "-".to_string(),
        };
        println!("{:<26} {:<40} {}", texture.texture, summary(&hero, &board, &rec), detail);
    }
    println!();
}

fn inputs(cards: &[&str]) -> Vec<CardInput> {
    cards.iter().map(|&c| c.into()).collect()
}
