use crate::config::PraxisConfig;
use crate::context::Context;
use crate::error::Result;
use crate::evening::run_evening;
use crate::morning::run_morning;
use crate::request::Request;
use crate::types::{Document, Workflow};

/// Dispatch a request to its workflow. An unknown or missing workflow name
/// is the only failure.
pub fn run(req: &Request, config: &PraxisConfig) -> Result<Document> {
    let name = req.workflow.as_deref().unwrap_or_default();
    let workflow: Workflow = name.parse()?;
    tracing::debug!(%workflow, "dispatching");
    Ok(run_workflow(workflow, &req.context(), config))
}

pub fn run_workflow(workflow: Workflow, ctx: &Context, config: &PraxisConfig) -> Document {
    match workflow {
        Workflow::MorningPraxis => {
            Document::DayScript(run_morning(ctx, &config.morning, &config.fallback))
        }
        Workflow::EveningPraxis => Document::ReflectionLog(run_evening(ctx, &config.evening)),
    }
}

/// Parse-and-run convenience for callers holding raw JSON.
pub fn run_json(data: &str, config: &PraxisConfig) -> Result<Document> {
    let req = Request::from_json(data)?;
    run(&req, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cfg() -> PraxisConfig {
        PraxisConfig::default()
    }

    #[test]
    fn dispatches_morning() {
        let doc = run(&Request::default(), &cfg()).unwrap();
        assert_eq!(doc.type_name(), "DayScript");
    }

    #[test]
    fn dispatches_evening() {
        let req = Request::new(Workflow::EveningPraxis, json!({"actions_done": ["a"]}));
        match run(&req, &cfg()).unwrap() {
            Document::ReflectionLog(log) => assert_eq!(log.alignment_score, 0.43),
            other => panic!("expected ReflectionLog, got {other:?}"),
        }
    }

    #[test]
    fn unknown_workflow_is_error() {
        let req = Request {
            workflow: Some("NoonPraxis".to_string()),
            context: json!({}),
        };
        let err = run(&req, &cfg()).unwrap_err();
        assert!(err.is_unknown_workflow());
        assert!(err.to_string().contains("'NoonPraxis'"));
    }

    #[test]
    fn missing_workflow_is_error() {
        let err = run_json(r#"{"context": {}}"#, &cfg()).unwrap_err();
        assert!(err.is_unknown_workflow());
    }

    #[test]
    fn config_overrides_flow_through() {
        let config = PraxisConfig::from_yaml(
            "morning:\n  north_star: Ship it\nevening:\n  lesson: Sleep.\n",
        )
        .unwrap();
        let morning = run_json(r#"{"workflow": "MorningPraxis"}"#, &config).unwrap();
        let evening = run_json(r#"{"workflow": "EveningPraxis"}"#, &config).unwrap();
        assert_eq!(
            serde_json::to_value(&morning).unwrap()["north_star"],
            json!("Ship it")
        );
        assert_eq!(
            serde_json::to_value(&evening).unwrap()["lesson"],
            json!("Sleep.")
        );
    }

    #[test]
    fn full_morning_document_shape() {
        let doc = run_json(
            r#"{"workflow": "MorningPraxis", "context": {"energy_score": 4, "commitments": ["13:00 union application", "18:00 TRX"]}}"#,
            &cfg(),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "type": "DayScript",
                "north_star": "Progress pipeline + protect back",
                "actions": ["advance: union application", "advance: TRX"],
                "counters": ["timer before paperwork", "docs checklist", "light carries only"],
                "schedule": [["13:00", "union application"], ["18:00", "TRX"]],
                "risks": ["bureaucratic delay", "low_back flare"],
            })
        );
    }
}
