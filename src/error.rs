//! Typed failures raised by hook plumbing.
//!
//! Hooks never surface these to the host. They are turned into
//! [`HookOutput::Silent`](crate::hooks::HookOutput) or an omitted section at
//! the hook layer, and only show up in `tracing` diagnostics.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read hook input from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("hook input is not valid JSON: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("hook input has no {0} field")]
    MissingField(&'static str),

    #[error("failed to parse skill rules {}: {source}", path.display())]
    Rules {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse hook config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, HookError>;
