//! Read-only access to the auxiliary files the hooks decorate their
//! output with. Absence of any of them is never an error.

pub mod journal;
pub mod lines_of_flight;
pub mod transcript;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{HookError, Result};

/// Read a whole file as UTF-8
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| HookError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole file, treating any failure as "not available"
pub fn read_optional(path: &Path) -> Option<String> {
    match read_text(path) {
        Ok(content) => Some(content),
        Err(HookError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::debug!("{} not found, skipping", path.display());
            None
        }
        Err(e) => {
            tracing::debug!("{e}, skipping");
            None
        }
    }
}
