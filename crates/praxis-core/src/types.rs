use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workflow {
    MorningPraxis,
    EveningPraxis,
}

impl Workflow {
    pub fn all() -> &'static [Workflow] {
        &[Workflow::MorningPraxis, Workflow::EveningPraxis]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Workflow::MorningPraxis => "MorningPraxis",
            Workflow::EveningPraxis => "EveningPraxis",
        }
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Workflow {
    type Err = crate::error::PraxisError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MorningPraxis" => Ok(Workflow::MorningPraxis),
            "EveningPraxis" => Ok(Workflow::EveningPraxis),
            other => Err(crate::error::PraxisError::UnknownWorkflow(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ScheduleSlot
// ---------------------------------------------------------------------------

/// One `(time, label)` entry of a day schedule. Serialized as a two-element
/// array, e.g. `["13:00", "union application"]`. `time` is empty when the
/// commitment carried no time prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct ScheduleSlot {
    pub time: String,
    pub label: String,
}

impl ScheduleSlot {
    pub fn new(time: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            label: label.into(),
        }
    }
}

impl From<(String, String)> for ScheduleSlot {
    fn from((time, label): (String, String)) -> Self {
        Self { time, label }
    }
}

impl From<ScheduleSlot> for (String, String) {
    fn from(slot: ScheduleSlot) -> Self {
        (slot.time, slot.label)
    }
}

// ---------------------------------------------------------------------------
// DayScript / ReflectionLog
// ---------------------------------------------------------------------------

/// Morning plan produced by `MorningPraxis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayScript {
    pub north_star: String,
    /// At most three entries.
    pub actions: Vec<String>,
    pub counters: Vec<String>,
    pub schedule: Vec<ScheduleSlot>,
    pub risks: Vec<String>,
}

/// Evening review produced by `EveningPraxis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionLog {
    /// Always one of 0.3, 0.43, 0.57, 0.7.
    pub alignment_score: f64,
    pub deltas: Vec<String>,
    pub lesson: String,
    pub tomorrow_seed: String,
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// Output of a workflow run, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Document {
    DayScript(DayScript),
    ReflectionLog(ReflectionLog),
}

impl Document {
    pub fn type_name(&self) -> &'static str {
        match self {
            Document::DayScript(_) => "DayScript",
            Document::ReflectionLog(_) => "ReflectionLog",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn workflow_parse_is_exact() {
        assert_eq!(
            "MorningPraxis".parse::<Workflow>().unwrap(),
            Workflow::MorningPraxis
        );
        assert_eq!(
            "EveningPraxis".parse::<Workflow>().unwrap(),
            Workflow::EveningPraxis
        );
        assert!("morningpraxis".parse::<Workflow>().is_err());
        assert!(" MorningPraxis".parse::<Workflow>().is_err());
        assert!("".parse::<Workflow>().is_err());
    }

    #[test]
    fn workflow_display_matches_parse() {
        for &w in Workflow::all() {
            assert_eq!(w.to_string().parse::<Workflow>().unwrap(), w);
        }
    }

    #[test]
    fn schedule_slot_serializes_as_pair() {
        let slot = ScheduleSlot::new("13:00", "union application");
        assert_eq!(
            serde_json::to_value(&slot).unwrap(),
            json!(["13:00", "union application"])
        );
    }

    #[test]
    fn document_type_tag_comes_first() {
        let doc = Document::ReflectionLog(ReflectionLog {
            alignment_score: 0.43,
            deltas: vec!["a".to_string()],
            lesson: "l".to_string(),
            tomorrow_seed: "s".to_string(),
        });
        let text = serde_json::to_string(&doc).unwrap();
        assert!(text.starts_with(r#"{"type":"ReflectionLog","alignment_score":0.43"#));
        assert_eq!(doc.type_name(), "ReflectionLog");
    }

    #[test]
    fn day_script_field_order() {
        let doc = Document::DayScript(DayScript {
            north_star: "n".to_string(),
            actions: vec![],
            counters: vec![],
            schedule: vec![],
            risks: vec![],
        });
        let text = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            text,
            r#"{"type":"DayScript","north_star":"n","actions":[],"counters":[],"schedule":[],"risks":[]}"#
        );
    }
}
