//! Durable storage of the knowledge base.
//!
//! The knowledge base lives in a single JSON file that is read in full on
//! every invocation and rewritten in full after each accepted edit. There is
//! no locking: two invocations editing at the same time race and the last
//! writer wins.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{PodlangError, PodlangResult};

use super::base::KnowledgeBase;

/// Reads and writes the heuristics file.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    path: PathBuf,
}

impl KnowledgeStore {
    /// Creates a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads and decodes the full knowledge base.
    pub fn load(&self) -> PodlangResult<KnowledgeBase> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| {
            PodlangError::StorageUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;

        let kb: KnowledgeBase = serde_json::from_str(&raw)
            .map_err(|e| PodlangError::corrupt(&self.path, e.to_string()))?;
        kb.check_invariants()
            .map_err(|reason| PodlangError::corrupt(&self.path, reason))?;

        tracing::debug!(
            path = %self.path.display(),
            languages = kb.len(),
            "Knowledge base loaded"
        );

        Ok(kb)
    }

    /// Serializes the full knowledge base and replaces the file.
    ///
    /// The record is written to a sibling temporary file first and renamed
    /// into place, so a failed write leaves the previous record intact. A
    /// knowledge base that `load` would reject is never written.
    pub fn save(&self, kb: &KnowledgeBase) -> PodlangResult<()> {
        kb.check_invariants()
            .map_err(|reason| PodlangError::corrupt(&self.path, reason))?;

        let mut json = serde_json::to_string_pretty(kb)?;
        json.push('\n');

        let tmp = self.temp_path();
        self.write_file(&tmp, json.as_bytes())
            .and_then(|()| std::fs::rename(&tmp, &self.path))
            .map_err(|source| {
                let _ = std::fs::remove_file(&tmp);
                PodlangError::StorageUnavailable {
                    path: self.path.clone(),
                    source,
                }
            })?;

        tracing::debug!(
            path = %self.path.display(),
            languages = kb.len(),
            "Knowledge base saved"
        );

        Ok(())
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = std::fs::File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "heuristics.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
