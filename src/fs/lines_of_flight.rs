//! Free-form log of one-line entries; `#` lines are comments.

use std::path::Path;

use super::read_optional;
use crate::picker::{choose, Picker};

/// Entries that are neither blank nor comments, in file order
pub fn entries(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(str::trim_end)
        .collect()
}

/// One entry picked from `content`
pub fn pick_entry(content: &str, picker: &mut dyn Picker) -> Option<String> {
    choose(&entries(content), picker).map(|line| (*line).to_string())
}

/// Read the log at `path` and pick one entry
pub fn random_entry(path: &Path, picker: &mut dyn Picker) -> Option<String> {
    let content = read_optional(path)?;
    pick_entry(&content, picker)
}
