//! Host transcript: newline-delimited JSON records with a `type` field.

use serde::Deserialize;
use std::path::Path;

use super::read_text;
use crate::error::Result;

const ASSISTANT: &str = "assistant";

#[derive(Debug, Deserialize)]
struct TranscriptRecord {
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Count records whose `type` is `assistant`
///
/// Blank lines and lines that are not JSON objects are skipped.
pub fn count_assistant_messages(content: &str) -> usize {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str::<TranscriptRecord>(line).ok())
        .filter(|record| record.kind.as_deref() == Some(ASSISTANT))
        .count()
}

/// Read the transcript at `path` and count its assistant messages
pub fn assistant_message_count(path: &Path) -> Result<usize> {
    let content = read_text(path)?;
    Ok(count_assistant_messages(&content))
}
