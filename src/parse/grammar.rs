// src/parse/grammar.rs

//! Line classification for the gantt mini-language.
//!
//! Keywords are case-insensitive. Anything that doesn't match one of the
//! recognized shapes is classified as [`LineClass::Other`] and silently
//! dropped by the scanner; malformed input is never an error at this stage.

use std::sync::LazyLock;

use regex::Regex;

/// Task declaration grammar: `<name> : <id>, <start>, <length>`.
///
/// The name may contain anything except a colon; the id may not contain
/// commas or whitespace; start and length are free-form and interpreted
/// later by the resolver.
static TASK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?P<name>[^:\n]+)\s*:\s*(?P<id>[^,\s]+)\s*,\s*(?P<start>[^,]+)\s*,\s*(?P<len>[^\n]+)",
    )
    .expect("task grammar regex is valid")
});

/// Raw, trimmed fields of a recognized task declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields<'a> {
    pub name: &'a str,
    pub id: &'a str,
    pub start: &'a str,
    pub length: &'a str,
}

/// Classification of a single line inside a gantt block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Blank line or `%%` comment.
    Skip,
    /// `section <name>`; carries the trimmed section name.
    Section(&'a str),
    /// A task declaration.
    Task(TaskFields<'a>),
    /// Anything else; dropped without diagnostics beyond a trace log.
    Other,
}

/// Does this line open a gantt block?
///
/// Only consulted while outside a block; everything before it is ignored.
pub fn is_gantt_start(line: &str) -> bool {
    keyword_prefix(line.trim(), "gantt")
}

/// Classify a line that appears inside a gantt block.
///
/// Mirrors the recognition order of the grammar: skip checks first, then the
/// task declaration, then the `section` keyword, otherwise [`LineClass::Other`].
pub fn classify(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("%%") {
        return LineClass::Skip;
    }

    if let Some(caps) = TASK_RE.captures(line) {
        // Capture groups exist by construction of the pattern.
        let field = |name: &str| caps.name(name).map(|m| m.as_str().trim()).unwrap_or("");
        return LineClass::Task(TaskFields {
            name: field("name"),
            id: field("id"),
            start: field("start"),
            length: field("len"),
        });
    }

    if keyword_prefix(trimmed, "section") {
        return LineClass::Section(trimmed["section".len()..].trim());
    }

    LineClass::Other
}

/// ASCII case-insensitive keyword prefix check that never slices inside a
/// multi-byte character.
fn keyword_prefix(s: &str, keyword: &str) -> bool {
    s.get(..keyword.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
}
