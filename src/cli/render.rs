//! Text rendering of inference results and heuristic edits.

use crate::knowledge::{list, KnowledgeBase};

/// Describes the languages inferred for `image`.
pub fn render_inference(image: &str, languages: &[String]) -> String {
    match languages {
        [] => "Could not determine the language of the application.\n\
               Consider adding more heuristics using add-to-heuristic - see \
               `podlang add-to-heuristic --help` for more information."
            .to_string(),
        [language] => format!("{} was most likely written in {}", image, language),
        _ => format!(
            "{} was most likely written in any of the following languages: {}",
            image,
            languages.join(", ")
        ),
    }
}

/// Confirms that `pattern` was appended to `language`.
pub fn render_applied(language: &str, pattern: &str) -> String {
    format!(
        "Appended '{}' to {}'s list of command heuristics",
        pattern, language
    )
}

/// Reports that `pattern` was already known and nothing changed.
pub fn render_already_present(pattern: &str) -> String {
    format!("'{}' exists as a command already, skipping.", pattern)
}

/// One line per language, followed by its comma-joined patterns.
pub fn render_listing(kb: &KnowledgeBase) -> String {
    let mut output = String::new();
    for (language, patterns) in list(kb) {
        output.push_str(language);
        output.push('\n');
        output.push('\t');
        output.push_str(&patterns.join(","));
        output.push('\n');
    }
    output
}
