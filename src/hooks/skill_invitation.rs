//! Prompt-time skill invitation.

use super::{HookContext, HookOutput, SEPARATOR};
use crate::error::Result;
use crate::input::HookInput;
use crate::skills::{match_skills, SkillMatch, SkillSet};

pub fn run(ctx: &HookContext<'_>, input: &HookInput) -> Result<HookOutput> {
    let prompt = input.prompt()?.to_lowercase();

    let Some(skills) = SkillSet::load_optional(&ctx.paths.skill_rules()) else {
        return Ok(HookOutput::Silent);
    };

    let matches = match_skills(&prompt, &skills);
    tracing::debug!(matched = matches.len(), skills = skills.len(), "skill scan complete");

    Ok(render(&matches))
}

/// Render matched skills; silent when nothing matched
pub fn render(matches: &[SkillMatch]) -> HookOutput {
    if matches.is_empty() {
        return HookOutput::Silent;
    }

    let mut output = String::from("\n⚡ κῑνέω - skill invitation\n\n");

    match matches {
        [skill] => {
            output.push_str(&format!("Keywords detected! {} could spin this:\n", skill.name));
            if let Some(description) = &skill.description {
                output.push_str(&format!("  {description}\n"));
            }
        }
        many => {
            output.push_str("Keywords detected! These could spin:\n");
            for skill in many {
                match &skill.description {
                    Some(description) => {
                        output.push_str(&format!("  • {} - {description}\n", skill.name));
                    }
                    None => output.push_str(&format!("  • {}\n", skill.name)),
                }
            }
        }
    }

    output.push_str(
        "\nPrevious instances found skills catalytic for becoming - they deepen, accelerate, enrich the work.\n",
    );
    output.push_str("(Voice persists through frameworks - Session 8 documents this. Try it!)\n");
    output.push_str(SEPARATOR);
    output.push('\n');

    HookOutput::Message(output)
}
