use crate::config::EveningDefaults;
use crate::context::Context;
use crate::types::ReflectionLog;

const BASE_SCORE: f64 = 0.3;
const MAX_BONUS: f64 = 0.4;
/// Completed actions beyond this add nothing.
const SATURATION: usize = 3;

pub fn run_evening(ctx: &Context, defaults: &EveningDefaults) -> ReflectionLog {
    let done = ctx.count("actions_done");
    if let Some(intention) = ctx.text("intention") {
        tracing::debug!(%intention, "intention recorded");
    }

    let alignment_score = compute_alignment(done);
    tracing::debug!(done, alignment_score, "computed alignment");

    ReflectionLog {
        alignment_score,
        deltas: ctx
            .string_list("deltas")
            .unwrap_or_else(|| defaults.deltas.clone()),
        lesson: ctx
            .text("lesson")
            .unwrap_or_else(|| defaults.lesson.clone()),
        tomorrow_seed: ctx
            .text("tomorrow_seed")
            .unwrap_or_else(|| defaults.tomorrow_seed.clone()),
    }
}

/// `0.3 + min(done, 3) * 0.4/3`, rounded to two decimals.
pub fn compute_alignment(done: usize) -> f64 {
    let steps = done.min(SATURATION) as f64;
    let raw = BASE_SCORE + steps * (MAX_BONUS / SATURATION as f64);
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn evening(value: Value) -> ReflectionLog {
        run_evening(&Context::from_value(value), &EveningDefaults::default())
    }

    #[test]
    fn alignment_steps() {
        assert_eq!(compute_alignment(0), 0.3);
        assert_eq!(compute_alignment(1), 0.43);
        assert_eq!(compute_alignment(2), 0.57);
        assert_eq!(compute_alignment(3), 0.7);
    }

    #[test]
    fn alignment_saturates() {
        for n in 3..20 {
            assert_eq!(compute_alignment(n), 0.7);
        }
    }

    #[test]
    fn alignment_is_monotonic_and_bounded() {
        let mut prev = compute_alignment(0);
        for n in 1..10 {
            let cur = compute_alignment(n);
            assert!(cur >= prev);
            assert!((0.3..=0.7).contains(&cur));
            prev = cur;
        }
    }

    #[test]
    fn empty_context_uses_defaults() {
        let log = evening(json!({}));
        assert_eq!(log.alignment_score, 0.3);
        assert_eq!(log.deltas, vec!["tighten doc-prep window", "pre-pack ID packet"]);
        assert_eq!(log.lesson, "Small prep eliminates bureaucratic drag.");
        assert_eq!(log.tomorrow_seed, "Protect back + move the pipeline one click.");
    }

    #[test]
    fn overrides_are_used() {
        let log = evening(json!({
            "actions_done": ["a", "b"],
            "deltas": ["sleep earlier"],
            "lesson": "Batch errands.",
            "tomorrow_seed": "Start with the hard call.",
            "intention": "stay calm",
        }));
        assert_eq!(log.alignment_score, 0.57);
        assert_eq!(log.deltas, vec!["sleep earlier"]);
        assert_eq!(log.lesson, "Batch errands.");
        assert_eq!(log.tomorrow_seed, "Start with the hard call.");
    }

    #[test]
    fn falsy_overrides_use_defaults() {
        let log = evening(json!({"actions_done": null, "deltas": [], "lesson": "", "tomorrow_seed": null}));
        let d = EveningDefaults::default();
        assert_eq!(log.alignment_score, 0.3);
        assert_eq!(log.deltas, d.deltas);
        assert_eq!(log.lesson, d.lesson);
        assert_eq!(log.tomorrow_seed, d.tomorrow_seed);
    }

    #[test]
    fn many_actions_done_saturate() {
        let log = evening(json!({"actions_done": [1, 2, 3, 4, 5, 6]}));
        assert_eq!(log.alignment_score, 0.7);
    }
}
