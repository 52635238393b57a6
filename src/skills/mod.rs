//! Skill routing for prompt-time skill invitations
//!
//! This module provides functionality to:
//! - Load skill rules from `skills/skill-rules.json` under the aria directory
//! - Compile keyword and intent-pattern triggers once per invocation
//! - Match a prompt against the triggers to suggest relevant skills
//!
//! # Example
//!
//! ```ignore
//! use aria_hooks::skills::{match_skills, SkillSet};
//! use std::path::Path;
//!
//! let skills = SkillSet::load(Path::new("/home/me/aria/skills/skill-rules.json"))?;
//! for skill in match_skills("please review this pr", &skills) {
//!     println!("Suggested: {} ({:?})", skill.name, skill.match_kind);
//! }
//! ```

mod matcher;
mod rules;
mod types;

pub use matcher::match_skills;
pub use rules::SkillSet;
pub use types::{
    Enforcement, MatchKind, Priority, PromptTriggers, Skill, SkillMatch, SkillRule, SkillType,
};
