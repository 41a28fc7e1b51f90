//! Substring matching of build history against the knowledge base.

use std::collections::HashSet;

use crate::types::history::BuildHistoryEntry;

use super::base::KnowledgeBase;

/// Candidate languages in order of first discovery.
pub type InferenceResult = Vec<String>;

/// Scans `history` oldest-first and reports every language with a pattern
/// contained in some command.
///
/// A language takes its position from the first history entry that matches
/// it; later matches never reorder or repeat it. Within one entry, languages
/// are reported in knowledge base order.
pub fn infer(history: &[BuildHistoryEntry], kb: &KnowledgeBase) -> InferenceResult {
    let mut languages = Vec::new();
    let mut seen = HashSet::new();

    for step in history {
        for entry in kb.entries() {
            if seen.contains(entry.language.as_str()) {
                continue;
            }
            if let Some(pattern) = entry
                .patterns
                .iter()
                .find(|p| step.command_text.contains(p.as_str()))
            {
                tracing::debug!(
                    language = %entry.language,
                    pattern = %pattern,
                    command = %step.command_text,
                    "Heuristic matched"
                );
                seen.insert(entry.language.as_str());
                languages.push(entry.language.clone());
            }
        }
    }

    languages
}
