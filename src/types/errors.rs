//! Error types for podlang.

use std::path::PathBuf;

use thiserror::Error;

/// Default result type for podlang.
pub type PodlangResult<T> = Result<T, PodlangError>;

/// Errors that can occur in podlang.
#[derive(Error, Debug)]
pub enum PodlangError {
    #[error("Knowledge base at {} could not be accessed: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Knowledge base at {} is corrupt: {reason}", .path.display())]
    CorruptKnowledgeBase { path: PathBuf, reason: String },

    #[error("{language} is not a known language, please select one of the existing languages: [{}]", .known.join(", "))]
    UnknownLanguage { language: String, known: Vec<String> },

    #[error("Heuristic command for {0} must not be empty")]
    EmptyPattern(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Kubernetes API error: {0}")]
    Cluster(#[from] kube::Error),

    #[error("Could not configure Kubernetes client: {0}")]
    ClusterConfig(String),

    #[error("Docker engine error: {0}")]
    Docker(#[from] bollard::errors::Error),

    #[error(
        "podlang could not find {0} in the local Docker engine. Only images present in the \
         local engine are consulted; remote and private registries are not searched, so the \
         image may exist elsewhere."
    )]
    ImageNotFound(String),

    #[error("Nothing to inspect: {0}")]
    NoWorkloads(String),

    #[cfg(feature = "cli")]
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl PodlangError {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a corrupt knowledge base error.
    pub fn corrupt<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::CorruptKnowledgeBase {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error means the knowledge base itself is unusable.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable { .. } | Self::CorruptKnowledgeBase { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_lists_known() {
        let err = PodlangError::UnknownLanguage {
            language: "rust".to_string(),
            known: vec!["go".to_string(), "python".to_string()],
        };

        let message = err.to_string();
        assert!(message.starts_with("rust is not a known language"));
        assert!(message.contains("[go, python]"));
    }

    #[test]
    fn test_storage_failures() {
        let missing = PodlangError::StorageUnavailable {
            path: PathBuf::from("heuristics.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(missing.is_storage_failure());
        assert!(missing.to_string().contains("heuristics.json"));

        assert!(PodlangError::corrupt("kb.json", "bad").is_storage_failure());
        assert!(!PodlangError::config("nope").is_storage_failure());
    }

    #[test]
    fn test_image_not_found_explains_local_lookup() {
        let message = PodlangError::ImageNotFound("shop/api:1".to_string()).to_string();

        assert!(message.starts_with("podlang could not find shop/api:1"));
        assert!(message.contains("remote and private registries are not searched"));
    }
}
