//! Hooks command implementation
//!
//! Provides commands for registering aria hooks with the agent host.

use anyhow::{Context, Result};
use colored::Colorize;
use std::env;
use std::path::PathBuf;

use crate::hooks::HookKind;
use crate::settings::{aria_hooks_config, default_settings_path, install_aria_hooks};

/// Command the host should run to invoke this binary
pub fn binary_command() -> String {
    env::current_exe()
        .ok()
        .and_then(|path| path.to_str().map(String::from))
        .unwrap_or_else(|| "aria-hooks".to_string())
}

/// Print the `hooks` settings block for manual registration
pub fn settings() -> Result<()> {
    let config = aria_hooks_config(&binary_command());
    let rendered =
        serde_json::to_string_pretty(&config).context("Failed to serialize hooks config")?;
    println!("{rendered}");
    Ok(())
}

/// Register aria hooks in the host settings file
///
/// Uses `~/.claude/settings.json` unless `settings_path` is given.
pub fn install(settings_path: Option<PathBuf>) -> Result<()> {
    let settings_path = match settings_path {
        Some(path) => path,
        None => default_settings_path()?,
    };

    let installed = install_aria_hooks(&settings_path, &binary_command())?;

    if installed {
        println!(
            "{} Registered aria hooks in {}",
            "✓".green(),
            settings_path.display()
        );
    } else {
        println!(
            "{} Aria hooks already registered in {}",
            "·".dimmed(),
            settings_path.display()
        );
    }

    println!("\nActive hooks:");
    for kind in HookKind::ALL {
        println!("  [{}] -> {}", kind.event().cyan(), kind.name());
    }

    Ok(())
}
