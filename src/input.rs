//! JSON payload the host writes to a hook's stdin.

use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{HookError, Result};

/// Hook invocation payload
///
/// Every field is optional and unknown fields are ignored, so the hooks
/// accept whatever shape the host sends for a given lifecycle event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub transcript_path: Option<PathBuf>,
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    #[serde(default)]
    pub permission_mode: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

impl HookInput {
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(HookError::InvalidInput)
    }

    /// Read the whole payload from `reader` and parse it
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = String::new();
        reader
            .read_to_string(&mut raw)
            .map_err(HookError::Stdin)?;
        Self::parse(&raw)
    }

    pub fn prompt(&self) -> Result<&str> {
        self.prompt
            .as_deref()
            .ok_or(HookError::MissingField("prompt"))
    }

    pub fn transcript_path(&self) -> Result<&PathBuf> {
        self.transcript_path
            .as_ref()
            .ok_or(HookError::MissingField("transcript_path"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let raw = r#"{
            "session_id": "abc",
            "transcript_path": "/tmp/t.jsonl",
            "cwd": "/work",
            "permission_mode": "default",
            "prompt": "Please review this PR",
            "hook_event_name": "UserPromptSubmit"
        }"#;
        let input = HookInput::parse(raw).unwrap();
        assert_eq!(input.session_id.as_deref(), Some("abc"));
        assert_eq!(input.prompt().unwrap(), "Please review this PR");
        assert_eq!(
            input.transcript_path().unwrap(),
            &PathBuf::from("/tmp/t.jsonl")
        );
    }

    #[test]
    fn test_parse_empty_object() {
        let input = HookInput::parse("{}").unwrap();
        assert_eq!(input, HookInput::default());
        assert!(matches!(
            input.prompt(),
            Err(HookError::MissingField("prompt"))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            HookInput::read_from("{not json".as_bytes()),
            Err(HookError::InvalidInput(_))
        ));
    }
}
