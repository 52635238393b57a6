//! Hook registration in the host's `settings.json`

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::hooks::HookKind;

/// Marker used to detect an existing registration
pub const COMMAND_MARKER: &str = "aria-hooks";

/// Default host settings file, `~/.claude/settings.json`
pub fn default_settings_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home_dir.join(".claude").join("settings.json"))
}

/// Generate the `hooks` block registering every hook
///
/// `binary` is the command used to invoke this executable.
pub fn aria_hooks_config(binary: &str) -> Value {
    let mut events: Map<String, Value> = Map::new();

    for kind in HookKind::ALL {
        let entry = json!({
            "hooks": [
                {
                    "type": "command",
                    "command": format!("{binary} {}", kind.name())
                }
            ]
        });

        if let Some(arr) = events
            .entry(kind.event())
            .or_insert_with(|| json!([]))
            .as_array_mut()
        {
            arr.push(entry);
        }
    }

    Value::Object(events)
}

fn is_aria_command(hook_entry: &Value) -> bool {
    hook_entry
        .get("hooks")
        .and_then(|h| h.as_array())
        .is_some_and(|hooks| {
            hooks.iter().any(|hook| {
                hook.get("command")
                    .and_then(|c| c.as_str())
                    .is_some_and(|cmd| cmd.contains(COMMAND_MARKER))
            })
        })
}

/// Configure aria hooks in a settings object
/// Returns true if hooks were added, false if already configured
pub fn configure_aria_hooks(settings_obj: &mut Map<String, Value>, binary: &str) -> Result<bool> {
    let already_configured = settings_obj
        .get("hooks")
        .and_then(|h| h.as_object())
        .is_some_and(|hooks_obj| {
            hooks_obj
                .values()
                .filter_map(|event| event.as_array())
                .flatten()
                .any(is_aria_command)
        });

    if already_configured {
        return Ok(false);
    }

    let hooks = settings_obj.entry("hooks").or_insert_with(|| json!({}));

    let hooks_obj = hooks
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("hooks must be a JSON object"))?;

    if let Some(aria_hooks_obj) = aria_hooks_config(binary).as_object() {
        for (event_name, event_hooks) in aria_hooks_obj {
            let event_arr = hooks_obj
                .entry(event_name)
                .or_insert_with(|| json!([]))
                .as_array_mut()
                .ok_or_else(|| anyhow::anyhow!("hooks.{event_name} must be an array"))?;

            if let Some(new_hooks) = event_hooks.as_array() {
                event_arr.extend(new_hooks.iter().cloned());
            }
        }
    }

    Ok(true)
}

/// Merge the aria hooks into the settings file at `settings_path`
///
/// Creates the file (and its directory) if needed.
///
/// # Returns
/// - `Ok(true)` if the hooks were written
/// - `Ok(false)` if they were already registered
/// - `Err` if the file could not be read, parsed or written
pub fn install_aria_hooks(settings_path: &Path, binary: &str) -> Result<bool> {
    let mut settings: Value = if settings_path.exists() {
        let content = fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read {}", settings_path.display()))?;
        if content.trim().is_empty() {
            json!({})
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {} as JSON", settings_path.display()))?
        }
    } else {
        json!({})
    };

    let settings_obj = settings
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("{} must contain a JSON object", settings_path.display()))?;

    if !configure_aria_hooks(settings_obj, binary)? {
        return Ok(false);
    }

    if let Some(parent) = settings_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let content =
        serde_json::to_string_pretty(&settings).context("Failed to serialize settings to JSON")?;
    fs::write(settings_path, content)
        .with_context(|| format!("Failed to write {}", settings_path.display()))?;

    Ok(true)
}
