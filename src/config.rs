use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Layout knobs for the report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Width of section and subsection rules, in characters.
    pub rule_width: usize,
    /// Marker in front of every listed object.
    pub bullet: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rule_width: 60,
            bullet: "•".to_string(),
        }
    }
}

/// Knobs for the demo binary only. The library never reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Concurrent tasks spawned by the concurrency scenario.
    pub workers: usize,
    /// Simulated work between timeline events.
    pub step_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            workers: 8,
            step_delay_ms: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifescopeConfig {
    pub render: RenderConfig,
    pub demo: DemoConfig,
}

impl LifescopeConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
