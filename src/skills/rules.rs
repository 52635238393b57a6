//! Loading `skill-rules.json` into a matchable [`SkillSet`].

use regex::{Regex, RegexBuilder};
use std::path::Path;

use super::types::{Skill, SkillRule, SkillRulesFile};
use crate::error::{HookError, Result};
use crate::fs::read_text;

/// Skills in configuration order
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    pub version: Option<String>,
    skills: Vec<Skill>,
}

impl SkillSet {
    /// Parse a rules document
    ///
    /// Entries that are not valid rules and intent patterns that fail to
    /// compile are dropped with a warning; the rest still load.
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        let file: SkillRulesFile =
            serde_json::from_str(content).map_err(|source_err| HookError::Rules {
                path: source.to_path_buf(),
                source: source_err,
            })?;

        let mut skills = Vec::with_capacity(file.skills.len());
        for (name, value) in file.skills {
            match serde_json::from_value::<SkillRule>(value) {
                Ok(rule) => skills.push(compile_skill(name, &rule)),
                Err(e) => tracing::warn!("Skipping skill '{name}': {e}"),
            }
        }

        Ok(Self {
            version: file.version,
            skills,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = read_text(path)?;
        Self::parse(&content, path)
    }

    /// Load the rules, `None` if the file is missing or unusable
    pub fn load_optional(path: &Path) -> Option<Self> {
        match Self::load(path) {
            Ok(set) => Some(set),
            Err(e) => {
                tracing::debug!("{e}; skill matching disabled");
                None
            }
        }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub(crate) fn len(&self) -> usize {
        self.skills.len()
    }
}

fn compile_skill(name: String, rule: &SkillRule) -> Skill {
    let keywords = rule.keywords().map(str::to_lowercase).collect();

    let intent_patterns = rule
        .intent_patterns()
        .filter_map(|pattern| match compile_intent(pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!("Dropping intent pattern {pattern:?} for skill '{name}': {e}");
                None
            }
        })
        .collect();

    Skill {
        name,
        description: rule.description.clone(),
        keywords,
        intent_patterns,
    }
}

/// Compile an intent pattern as a case-insensitive, unanchored regex
fn compile_intent(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
