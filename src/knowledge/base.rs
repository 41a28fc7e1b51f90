//! Knowledge base data model.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Command substrings that betray one language's toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicEntry {
    /// Language name, unique across the knowledge base.
    pub language: String,
    /// Patterns in insertion order, unique within this entry.
    ///
    /// A missing or `null` list reads as empty.
    #[serde(rename = "commands", default, deserialize_with = "null_as_empty")]
    pub patterns: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl HeuristicEntry {
    /// Creates an entry from a language and its patterns.
    pub fn new<L, I, P>(language: L, patterns: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            language: language.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `pattern` is already listed, compared exactly.
    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern)
    }
}

/// Ordered mapping of language to heuristic patterns.
///
/// Serialized as a bare JSON array of `{"language", "commands"}` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    entries: Vec<HeuristicEntry>,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a knowledge base, rejecting entries that break its invariants.
    pub fn from_entries(entries: Vec<HeuristicEntry>) -> Result<Self, String> {
        let kb = Self { entries };
        kb.check_invariants()?;
        Ok(kb)
    }

    /// Entries in stored order.
    pub fn entries(&self) -> &[HeuristicEntry] {
        &self.entries
    }

    /// Looks up the entry for `language`.
    pub fn entry(&self, language: &str) -> Option<&HeuristicEntry> {
        self.entries.iter().find(|e| e.language == language)
    }

    pub(crate) fn entry_mut(&mut self, language: &str) -> Option<&mut HeuristicEntry> {
        self.entries.iter_mut().find(|e| e.language == language)
    }

    /// Known language names in stored order.
    pub fn languages(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.language.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks language and per-language pattern uniqueness and non-emptiness.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut languages = HashSet::new();

        for entry in &self.entries {
            if entry.language.is_empty() {
                return Err("entry with an empty language name".to_string());
            }
            if !languages.insert(entry.language.as_str()) {
                return Err(format!("language '{}' is listed more than once", entry.language));
            }

            let mut patterns = HashSet::new();
            for pattern in &entry.patterns {
                if pattern.is_empty() {
                    return Err(format!("language '{}' has an empty command", entry.language));
                }
                if !patterns.insert(pattern.as_str()) {
                    return Err(format!(
                        "command '{}' is listed more than once for '{}'",
                        pattern, entry.language
                    ));
                }
            }
        }

        Ok(())
    }

    /// Seed knowledge base written by `init`.
    pub fn starter() -> Self {
        let entries = vec![
            HeuristicEntry::new("go", ["go build", "go mod", "go get", "go install"]),
            HeuristicEntry::new(
                "python",
                ["pip install", "pip3 install", "poetry install", "python setup.py", "pipenv install"],
            ),
            HeuristicEntry::new(
                "javascript",
                ["npm install", "npm ci", "yarn install", "pnpm install", "npm run build"],
            ),
            HeuristicEntry::new("rust", ["cargo build", "cargo install", "rustc", "rustup"]),
            HeuristicEntry::new("java", ["mvn ", "gradle", "./gradlew", "javac"]),
            HeuristicEntry::new("ruby", ["bundle install", "gem install"]),
            HeuristicEntry::new("php", ["composer install", "docker-php-ext-install"]),
            HeuristicEntry::new("dotnet", ["dotnet restore", "dotnet publish", "dotnet build"]),
        ];
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_commands_field() {
        let kb = KnowledgeBase::from_entries(vec![HeuristicEntry::new("go", ["go build"])]).unwrap();
        let json = serde_json::to_string(&kb).unwrap();
        assert_eq!(json, r#"[{"language":"go","commands":["go build"]}]"#);
    }

    #[test]
    fn test_null_or_missing_commands_read_as_empty() {
        let kb: KnowledgeBase =
            serde_json::from_str(r#"[{"language":"go","commands":null},{"language":"ruby"}]"#)
                .unwrap();

        assert!(kb.check_invariants().is_ok());
        assert!(kb.entry("go").unwrap().patterns.is_empty());
        assert!(kb.entry("ruby").unwrap().patterns.is_empty());
    }

    #[test]
    fn test_duplicate_language_rejected() {
        let result = KnowledgeBase::from_entries(vec![
            HeuristicEntry::new("go", ["go build"]),
            HeuristicEntry::new("go", ["go mod"]),
        ]);
        assert!(result.unwrap_err().contains("more than once"));
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let result =
            KnowledgeBase::from_entries(vec![HeuristicEntry::new("go", ["go build", "go build"])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_patterns_compared_case_sensitively() {
        let kb =
            KnowledgeBase::from_entries(vec![HeuristicEntry::new("go", ["go build", "GO BUILD"])])
                .unwrap();
        let entry = kb.entry("go").unwrap();
        assert!(entry.contains("GO BUILD"));
        assert!(!entry.contains("Go Build"));
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(KnowledgeBase::from_entries(vec![HeuristicEntry::new("", ["x"])]).is_err());
        assert!(KnowledgeBase::from_entries(vec![HeuristicEntry::new("go", [""])]).is_err());
    }

    #[test]
    fn test_starter_is_valid() {
        let kb = KnowledgeBase::starter();
        assert!(kb.check_invariants().is_ok());
        assert_eq!(kb.languages()[0], "go");
        assert!(kb.entry("rust").unwrap().contains("rustc"));
    }
}
