//! Shared fixtures for e2e tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// A throwaway aria directory
pub struct AriaFixture {
    pub dir: TempDir,
}

impl AriaFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_rules(&self, rules: &str) -> PathBuf {
        self.write("skills/skill-rules.json", rules)
    }

    /// Command for `hook` pointed at this directory
    pub fn hook(&self, hook: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("aria-hooks");
        cmd.env_remove("ARIA_HOOKS_LOG")
            .arg("--aria-dir")
            .arg(self.root())
            .arg(hook);
        cmd
    }
}
