use serde_json::{json, Value};

use crate::flop_engine::{
    engine::Recommendation,
    helpers::client_card,
    models::Card,
};

/// Build the 5-slot community card array; turn and river stay empty.
fn community_cards(board: &[Card]) -> Value {
    let slots: Vec<Value> = (0..5usize)
        .map(|i| {
            let card = board.get(i).map(client_card).unwrap_or_default();
            json!({ "id": i, "card": card })
        })
        .collect();
    Value::Array(slots)
}

fn hero_cards(hero: &[Card]) -> Value {
    Value::Array(
        hero.iter()
            .enumerate()
            .map(|(i, c)| json!({ "id": i, "card": client_card(c) }))
            .collect(),
    )
}

/// Map a [`Recommendation`] to the JSON object the browser client renders.
///
/// The strict reminder flag is raised when the plan's anti-tilt trigger
/// fires for the chosen action.
pub fn to_client_payload(rec: &Recommendation, hero: &[Card], board: &[Card]) -> Value {
    let strict = rec
        .plan
        .as_ref()
        .is_some_and(|p| p.strict_trigger.fires(p.hand_cat, rec.action));

    let plan = match &rec.plan {
        Some(plan) => json!({
            "title": plan.title,
            "base": plan.base,
            "line": plan.line,
            "vsRaise": plan.vs_raise,
            "reminders": plan.reminders,
        }),
        None => Value::Null,
    };

    json!({
        "street": rec.street,
        "table": {
            "hero": hero_cards(hero),
            "community_cards": community_cards(board),
        },
        "decision": {
            "action": rec.action,
            "note": rec.note,
            "texture": rec.texture,
            "spot": rec.spot,
            "ipState": rec.ip_state,
            "ini": rec.ini,
            "invalidInput": rec.invalid_input,
            "module": rec.module,
        },
        "plan": plan,
        "strictReminder": strict,
    })
}
