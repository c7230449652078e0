use crate::context::Context;
use crate::error::Result;
use crate::types::Workflow;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

// ---------------------------------------------------------------------------
// InputFormat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// JSON first, then YAML.
    #[default]
    Auto,
    Json,
    Yaml,
}

impl InputFormat {
    /// `.yaml` / `.yml` files are YAML; anything else is sniffed.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Auto,
        }
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A workflow invocation. `workflow` is kept as raw text so an unknown or
/// missing name surfaces at dispatch rather than as a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub workflow: Option<String>,
    #[serde(default)]
    pub context: Value,
}

impl Default for Request {
    /// Morning run with an empty context.
    fn default() -> Self {
        Self::new(Workflow::MorningPraxis, Value::Object(Default::default()))
    }
}

impl Request {
    pub fn new(workflow: Workflow, context: Value) -> Self {
        Self {
            workflow: Some(workflow.as_str().to_string()),
            context,
        }
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_yaml(data: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(data)?)
    }

    pub fn parse(data: &str, format: InputFormat) -> Result<Self> {
        match format {
            InputFormat::Json => Self::from_json(data),
            InputFormat::Yaml => Self::from_yaml(data),
            InputFormat::Auto => match Self::from_json(data) {
                Ok(req) => Ok(req),
                Err(json_err) => Self::from_yaml(data).map_err(|yaml_err| {
                    tracing::debug!(%yaml_err, "YAML fallback failed too");
                    json_err
                }),
            },
        }
    }

    pub fn context(&self) -> Context {
        Context::from_value(self.context.clone())
    }
}
