use thiserror::Error;

#[derive(Debug, Error)]
pub enum PraxisError {
    #[error("unknown workflow: '{0}' (expected MorningPraxis or EveningPraxis)")]
    UnknownWorkflow(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PraxisError {
    pub fn is_unknown_workflow(&self) -> bool {
        matches!(self, PraxisError::UnknownWorkflow(_))
    }
}

pub type Result<T> = std::result::Result<T, PraxisError>;
