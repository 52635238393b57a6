//! Type definitions for skill rules and matching

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A trigger list where `null` means the same as absent
fn list_or_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Descriptive metadata that never rejects a rule: unusable values read as `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Rules file shape: `{ "version": "...", "skills": { name: rule, ... } }`
///
/// Skills are kept as raw JSON values here so that one malformed rule can be
/// dropped without rejecting the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRulesFile {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub skills: serde_json::Map<String, serde_json::Value>,
}

/// Trigger lists for a skill
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTriggers {
    #[serde(default, deserialize_with = "list_or_null")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub intent_patterns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Guardrail,
    Domain,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    Block,
    Suggest,
    Warn,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

/// One skill entry from the rules file
///
/// Triggers may sit at the top level of the rule or under `promptTriggers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRule {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub skill_type: Option<SkillType>,
    #[serde(default, deserialize_with = "lenient")]
    pub enforcement: Option<Enforcement>,
    #[serde(default, deserialize_with = "lenient")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prompt_triggers: Option<PromptTriggers>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub intent_patterns: Vec<String>,
}

impl SkillRule {
    /// All keywords, `promptTriggers` first
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.prompt_triggers
            .iter()
            .flat_map(|t| t.keywords.iter())
            .chain(self.keywords.iter())
            .map(String::as_str)
    }

    /// All intent patterns, `promptTriggers` first
    pub fn intent_patterns(&self) -> impl Iterator<Item = &str> {
        self.prompt_triggers
            .iter()
            .flat_map(|t| t.intent_patterns.iter())
            .chain(self.intent_patterns.iter())
            .map(String::as_str)
    }
}

/// A skill ready for matching: keywords lower-cased, patterns compiled
#[derive(Debug, Clone)]
pub struct Skill {
    pub name: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub intent_patterns: Vec<Regex>,
}

/// How a skill was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Keyword,
    Intent,
}

/// A matched skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    pub name: String,
    pub description: Option<String>,
    pub match_kind: MatchKind,
}

impl SkillMatch {
    pub fn new(skill: &Skill, match_kind: MatchKind) -> Self {
        Self {
            name: skill.name.clone(),
            description: skill.description.clone(),
            match_kind,
        }
    }
}
