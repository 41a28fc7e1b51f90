//! Edits and read-only views of the knowledge base.

use super::base::KnowledgeBase;

/// Result of asking for a pattern to be added to a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The language is absent; `known` holds the existing languages in order.
    UnknownLanguage { known: Vec<String> },
    /// The pattern is empty and would match every command. Nothing changed.
    InvalidPattern,
    /// The pattern is already listed for the language. Nothing changed.
    AlreadyPresent,
    /// The pattern was appended. The caller must persist the knowledge base.
    Applied,
}

impl EditOutcome {
    /// Whether the knowledge base was changed and needs saving.
    pub fn needs_save(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Appends `pattern` to `language` unless it is unknown, empty or already listed.
pub fn add_pattern(kb: &mut KnowledgeBase, language: &str, pattern: &str) -> EditOutcome {
    let known = kb.languages();
    let Some(entry) = kb.entry_mut(language) else {
        return EditOutcome::UnknownLanguage { known };
    };

    if pattern.is_empty() {
        return EditOutcome::InvalidPattern;
    }

    if entry.contains(pattern) {
        return EditOutcome::AlreadyPresent;
    }

    entry.patterns.push(pattern.to_string());
    tracing::info!(language, pattern, "Heuristic added");
    EditOutcome::Applied
}

/// Languages and their patterns in stored order.
pub fn list(kb: &KnowledgeBase) -> Vec<(&str, &[String])> {
    kb.entries()
        .iter()
        .map(|e| (e.language.as_str(), e.patterns.as_slice()))
        .collect()
}
