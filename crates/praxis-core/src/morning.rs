use crate::config::{FallbackScript, MorningDefaults};
use crate::context::{string_list, value_kind, Context};
use crate::types::{DayScript, ScheduleSlot};
use serde_json::Value;

/// Upper bound on the actions in a DayScript.
pub const MAX_ACTIONS: usize = 3;

/// Energy below this selects the fallback script.
pub const ENERGY_THRESHOLD: f64 = 3.0;

const DEFAULT_ENERGY: f64 = 3.0;

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

pub fn run_morning(
    ctx: &Context,
    defaults: &MorningDefaults,
    fallback: &FallbackScript,
) -> DayScript {
    let energy = energy_score(ctx);

    if energy < ENERGY_THRESHOLD {
        tracing::debug!(energy, "low energy; using fallback DayScript");
        return fallback_script(fallback);
    }
    tracing::debug!(energy, "building DayScript");

    let north_star = match ctx.get("north_star") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            tracing::warn!(kind = value_kind(other), "north_star is not a string; using default");
            defaults.north_star.clone()
        }
        None => defaults.north_star.clone(),
    };

    DayScript {
        north_star,
        actions: derive_actions(ctx, MAX_ACTIONS, &defaults.actions),
        counters: ctx
            .string_list("counters")
            .unwrap_or_else(|| defaults.counters.clone()),
        schedule: derive_schedule(ctx.truthy("commitments")),
        risks: ctx
            .string_list("risks")
            .unwrap_or_else(|| defaults.risks.clone()),
    }
}

pub fn fallback_script(fallback: &FallbackScript) -> DayScript {
    DayScript {
        north_star: fallback.north_star.clone(),
        actions: fallback.actions.clone(),
        counters: fallback.counters.clone(),
        schedule: Vec::new(),
        risks: fallback.risks.clone(),
    }
}

fn energy_score(ctx: &Context) -> f64 {
    match ctx.get("energy_score") {
        None => DEFAULT_ENERGY,
        // Booleans compare as 1 and 0.
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(v) => v.as_f64().unwrap_or_else(|| {
            tracing::warn!(kind = value_kind(v), "energy_score is not a number; assuming 3");
            DEFAULT_ENERGY
        }),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Explicit `actions` win; otherwise one "advance: ..." per commitment;
/// otherwise `fallback_list`. Always capped at `max`.
pub fn derive_actions(ctx: &Context, max: usize, fallback_list: &[String]) -> Vec<String> {
    if let Some(actions) = ctx.string_list("actions") {
        return actions.into_iter().take(max).collect();
    }

    let derived: Vec<String> = match ctx.string_list("commitments") {
        Some(commitments) => commitments
            .iter()
            .map(|c| format!("advance: {}", after_first_space(c)))
            .collect(),
        None => fallback_list.to_vec(),
    };

    derived.into_iter().take(max).collect()
}

/// Split each commitment into a `(time, label)` slot. A leading token counts
/// as a time when it is 4-5 characters long and contains ':'.
pub fn derive_schedule(commitments: Option<&Value>) -> Vec<ScheduleSlot> {
    let Some(commitments) = commitments else {
        return Vec::new();
    };

    string_list(commitments)
        .into_iter()
        .map(|text| {
            if let Some((head, rest)) = text.split_once(' ') {
                if looks_like_time(head) {
                    return ScheduleSlot::new(head, rest);
                }
            }
            ScheduleSlot::new("", text)
        })
        .collect()
}

fn looks_like_time(token: &str) -> bool {
    matches!(token.chars().count(), 4 | 5) && token.contains(':')
}

fn after_first_space(text: &str) -> &str {
    text.split_once(' ').map_or(text, |(_, rest)| rest)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
