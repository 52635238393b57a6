//! Prompt-to-skill matching.

use super::rules::SkillSet;
use super::types::{MatchKind, Skill, SkillMatch};

/// Match a lower-cased prompt against every skill, in configuration order
///
/// A keyword hit wins over intent patterns: the skill is reported once as
/// [`MatchKind::Keyword`] and its patterns are not evaluated.
pub fn match_skills(prompt: &str, skills: &SkillSet) -> Vec<SkillMatch> {
    skills
        .skills()
        .iter()
        .filter_map(|skill| {
            match_skill(prompt, skill).map(|kind| SkillMatch::new(skill, kind))
        })
        .collect()
}

/// How `skill` matches `prompt`, if at all
fn match_skill(prompt: &str, skill: &Skill) -> Option<MatchKind> {
    if skill
        .keywords
        .iter()
        .any(|keyword| prompt.contains(keyword.as_str()))
    {
        return Some(MatchKind::Keyword);
    }

    skill
        .intent_patterns
        .iter()
        .any(|pattern| pattern.is_match(prompt))
        .then_some(MatchKind::Intent)
}
