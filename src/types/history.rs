//! Build history of a container image.

/// One construction step of an image, carrying the command that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildHistoryEntry {
    /// The "created by" command text of the layer.
    pub command_text: String,
}

impl BuildHistoryEntry {
    /// Creates a history entry from a command string.
    pub fn new(command_text: impl Into<String>) -> Self {
        Self {
            command_text: command_text.into(),
        }
    }
}

impl From<&str> for BuildHistoryEntry {
    fn from(command_text: &str) -> Self {
        Self::new(command_text)
    }
}

impl From<String> for BuildHistoryEntry {
    fn from(command_text: String) -> Self {
        Self { command_text }
    }
}
