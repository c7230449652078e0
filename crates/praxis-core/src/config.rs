use crate::error::{PraxisError, Result};
use crate::morning::MAX_ACTIONS;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// MorningDefaults
// ---------------------------------------------------------------------------

/// Texts used by the normal morning path when the context leaves a field out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorningDefaults {
    #[serde(default = "default_north_star")]
    pub north_star: String,
    #[serde(default = "default_actions")]
    pub actions: Vec<String>,
    #[serde(default = "default_counters")]
    pub counters: Vec<String>,
    #[serde(default = "default_risks")]
    pub risks: Vec<String>,
}

fn default_north_star() -> String {
    "Progress pipeline + protect back".to_string()
}

fn default_actions() -> Vec<String> {
    strings(&["one leverage task", "admin pass", "body maintenance"])
}

fn default_counters() -> Vec<String> {
    strings(&["timer before paperwork", "docs checklist", "light carries only"])
}

fn default_risks() -> Vec<String> {
    strings(&["bureaucratic delay", "low_back flare"])
}

impl Default for MorningDefaults {
    fn default() -> Self {
        Self {
            north_star: default_north_star(),
            actions: default_actions(),
            counters: default_counters(),
            risks: default_risks(),
        }
    }
}

// ---------------------------------------------------------------------------
// FallbackScript
// ---------------------------------------------------------------------------

/// The fixed low-energy DayScript. Its schedule is always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackScript {
    #[serde(default = "default_fallback_north_star")]
    pub north_star: String,
    #[serde(default = "default_fallback_actions")]
    pub actions: Vec<String>,
    #[serde(default = "default_fallback_counters")]
    pub counters: Vec<String>,
    #[serde(default = "default_fallback_risks")]
    pub risks: Vec<String>,
}

fn default_fallback_north_star() -> String {
    "Recover + one leverage task".to_string()
}

fn default_fallback_actions() -> Vec<String> {
    strings(&["Do one small thing"])
}

fn default_fallback_counters() -> Vec<String> {
    strings(&["remove friction", "hydrate", "10m walk"])
}

fn default_fallback_risks() -> Vec<String> {
    strings(&["low energy"])
}

impl Default for FallbackScript {
    fn default() -> Self {
        Self {
            north_star: default_fallback_north_star(),
            actions: default_fallback_actions(),
            counters: default_fallback_counters(),
            risks: default_fallback_risks(),
        }
    }
}

// ---------------------------------------------------------------------------
// EveningDefaults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveningDefaults {
    #[serde(default = "default_deltas")]
    pub deltas: Vec<String>,
    #[serde(default = "default_lesson")]
    pub lesson: String,
    #[serde(default = "default_tomorrow_seed")]
    pub tomorrow_seed: String,
}

fn default_deltas() -> Vec<String> {
    strings(&["tighten doc-prep window", "pre-pack ID packet"])
}

fn default_lesson() -> String {
    "Small prep eliminates bureaucratic drag.".to_string()
}

fn default_tomorrow_seed() -> String {
    "Protect back + move the pipeline one click.".to_string()
}

impl Default for EveningDefaults {
    fn default() -> Self {
        Self {
            deltas: default_deltas(),
            lesson: default_lesson(),
            tomorrow_seed: default_tomorrow_seed(),
        }
    }
}

// ---------------------------------------------------------------------------
// PraxisConfig
// ---------------------------------------------------------------------------

/// Overrides for the built-in default texts. Every section and field is
/// optional; `PraxisConfig::default()` carries the built-in values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PraxisConfig {
    #[serde(default)]
    pub morning: MorningDefaults,
    #[serde(default)]
    pub fallback: FallbackScript,
    #[serde(default)]
    pub evening: EveningDefaults,
}

impl PraxisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml(&data)
    }

    pub fn from_yaml(data: &str) -> Result<Self> {
        // An empty file parses as YAML null; treat it as "no overrides".
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: PraxisConfig = serde_yaml::from_str(data)?;
        Ok(cfg)
    }

    /// Load and reject configs with error-level findings. Warnings are
    /// logged and otherwise ignored.
    pub fn load_checked(path: &Path) -> Result<Self> {
        let cfg = Self::load(path)?;
        let mut errors = Vec::new();
        for w in cfg.validate() {
            match w.level {
                WarnLevel::Warning => {
                    tracing::warn!(path = %path.display(), "config: {}", w.message)
                }
                WarnLevel::Error => errors.push(w.message),
            }
        }
        if !errors.is_empty() {
            return Err(PraxisError::Config(errors.join("; ")));
        }
        Ok(cfg)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.fallback.north_star.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "fallback.north_star must not be empty".to_string(),
            });
        }

        if self.morning.actions.len() > MAX_ACTIONS {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "morning.actions has {} entries; only the first {MAX_ACTIONS} are used",
                    self.morning.actions.len()
                ),
            });
        }

        let lists: [(&str, &[String]); 7] = [
            ("morning.actions", self.morning.actions.as_slice()),
            ("morning.counters", self.morning.counters.as_slice()),
            ("morning.risks", self.morning.risks.as_slice()),
            ("fallback.actions", self.fallback.actions.as_slice()),
            ("fallback.counters", self.fallback.counters.as_slice()),
            ("fallback.risks", self.fallback.risks.as_slice()),
            ("evening.deltas", self.evening.deltas.as_slice()),
        ];
        for (name, list) in lists {
            if list.is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("{name} is empty"),
                });
            }
        }

        warnings
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
