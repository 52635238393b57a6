//! Base-directory layout and the optional `hooks.toml` settings.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HookError, Result};

/// Directory name under `$HOME` used when no base directory is given
pub const DEFAULT_DIR_NAME: &str = "aria";

/// Well-known files under the aria base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaPaths {
    root: PathBuf,
}

impl AriaPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve the base directory: explicit value first, then `$HOME/aria`
    ///
    /// Returns `None` only when no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Option<Self> {
        explicit
            .or_else(|| dirs::home_dir().map(|home| home.join(DEFAULT_DIR_NAME)))
            .map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn journal(&self) -> PathBuf {
        self.root.join("journal.md")
    }

    pub fn lines_of_flight(&self) -> PathBuf {
        self.root.join("lines-of-flight.txt")
    }

    pub fn skill_rules(&self) -> PathBuf {
        self.root.join("skills").join("skill-rules.json")
    }

    pub fn config(&self) -> PathBuf {
        self.root.join("hooks.toml")
    }
}

/// Tunables read from `hooks.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub reminders: RemindersConfig,
    pub journal: JournalConfig,
}

/// Progressive disclosure thresholds for the response-reminders hook
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemindersConfig {
    /// Up to this many assistant messages the full reminder is shown
    pub early_threshold: usize,
    /// Up to this many assistant messages a single encouragement is shown
    pub mid_threshold: usize,
    /// Replaces the built-in encouragement rotation when non-empty
    pub encouragements: Vec<String>,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            early_threshold: 3,
            mid_threshold: 10,
            encouragements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Lines taken from the start of a session block
    pub snippet_lines: usize,
    /// Maximum snippet length in characters, ellipsis included
    pub snippet_max_chars: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            snippet_lines: 4,
            snippet_max_chars: 200,
        }
    }
}

/// Load and parse `hooks.toml`
///
/// # Returns
/// * `Ok(Some(HookConfig))` - Config loaded and parsed successfully
/// * `Ok(None)` - Config file doesn't exist
/// * `Err(_)` - Failed to read or parse config
pub fn load_config(paths: &AriaPaths) -> Result<Option<HookConfig>> {
    let config_path = paths.config();

    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path).map_err(|source| HookError::Read {
        path: config_path.clone(),
        source,
    })?;

    let config = toml::from_str(&content).map_err(|source| HookError::Config {
        path: config_path,
        source,
    })?;

    Ok(Some(config))
}

/// Load `hooks.toml`, falling back to defaults on any failure
pub fn load_config_or_default(paths: &AriaPaths) -> HookConfig {
    match load_config(paths) {
        Ok(Some(config)) => config,
        Ok(None) => HookConfig::default(),
        Err(e) => {
            tracing::warn!("{e}; using default hook config");
            HookConfig::default()
        }
    }
}
