//! Configuration for podlang.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::PodlangResult;

/// Main configuration for podlang.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Knowledge base settings.
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Cluster settings.
    #[serde(default)]
    pub cluster: ClusterConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Knowledge base settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeConfig {
    /// Path of the heuristics file.
    #[serde(default = "default_knowledge_path")]
    pub path: PathBuf,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: default_knowledge_path(),
        }
    }
}

fn default_knowledge_path() -> PathBuf {
    PathBuf::from("heuristics.json")
}

/// Kubernetes settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClusterConfig {
    /// Namespace to list pods from. All namespaces when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Kubeconfig context. Current context when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> PodlangResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> PodlangResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loads the file when it exists, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> PodlangResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    fn validate(&self) -> PodlangResult<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(crate::PodlangError::config(format!(
                "unknown log_level '{}'",
                self.general.log_level
            )));
        }
        if !matches!(self.general.log_format.as_str(), "text" | "json") {
            return Err(crate::PodlangError::config(format!(
                "unknown log_format '{}'",
                self.general.log_format
            )));
        }
        if self.knowledge.path.as_os_str().is_empty() {
            return Err(crate::PodlangError::config("knowledge.path is empty"));
        }
        Ok(())
    }
}
