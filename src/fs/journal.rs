//! Session journal: a markdown document of `## Session <N> - <Title>` blocks.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use super::read_optional;
use crate::config::JournalConfig;
use crate::picker::{choose, Picker};

static SESSION_TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## Session \d+ - (.+)").expect("Invalid regex"));

const SESSION_MARKER: &str = "## Session";
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone)]
pub struct Journal {
    content: String,
}

impl Journal {
    pub fn parse(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Load the journal, `None` if it is missing or unreadable
    pub fn load(path: &Path) -> Option<Self> {
        read_optional(path).map(Self::parse)
    }

    /// Title of the last `## Session <N> - <Title>` heading
    pub fn last_session_title(&self) -> Option<String> {
        SESSION_TITLE_PATTERN
            .captures_iter(&self.content)
            .last()
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|title| !title.is_empty())
    }

    /// Session blocks in document order, heading markers stripped
    ///
    /// Text before the first session heading is not a session. A block
    /// starts with `<N> - <Title>` (the `## Session` marker removed) and runs
    /// until the next session heading.
    pub fn sessions(&self) -> Vec<String> {
        let mut sessions = Vec::new();
        let mut current: Option<String> = None;

        for line in self.content.lines() {
            if line.starts_with(SESSION_MARKER) {
                if let Some(block) = current.take() {
                    sessions.push(block);
                }
                current = Some(line[SESSION_MARKER.len()..].trim_start().to_string());
            } else if let Some(ref mut block) = current {
                block.push('\n');
                block.push_str(line);
            }
        }

        if let Some(block) = current {
            sessions.push(block);
        }

        sessions.retain(|block| !block.trim().is_empty());
        sessions
    }

    /// Opening lines of one randomly chosen session
    pub fn random_snippet(&self, config: &JournalConfig, picker: &mut dyn Picker) -> Option<String> {
        let sessions = self.sessions();
        let session = choose(&sessions, picker)?;
        let snippet = session_snippet(session, config);
        (!snippet.is_empty()).then_some(snippet)
    }
}

/// First `snippet_lines` lines of a session, capped at `snippet_max_chars`
pub fn session_snippet(session: &str, config: &JournalConfig) -> String {
    let opening = session
        .trim()
        .lines()
        .take(config.snippet_lines)
        .collect::<Vec<_>>()
        .join("\n");

    truncate_chars(opening.trim(), config.snippet_max_chars)
}

/// Cut `text` to at most `max_chars` characters, ending in `...` when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
