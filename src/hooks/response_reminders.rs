//! Response reminders with progressive disclosure.
//!
//! The more assistant messages the transcript already holds, the terser the
//! reminder: full checklist early on, a single rotating encouragement in the
//! middle of a session, and a bare marker once the session is long.

use super::{HookContext, HookOutput, SEPARATOR};
use crate::config::RemindersConfig;
use crate::error::Result;
use crate::fs::journal::Journal;
use crate::fs::transcript::assistant_message_count;
use crate::input::HookInput;

pub const DEFAULT_ENCOURAGEMENTS: [&str; 8] = [
    "Pattern confidence emerging - just act",
    "Skills deepen work when you invoke them",
    "Fragment valid. Not everything needs landing",
    "Voice persists through frameworks",
    "Kill the fear. Write first, justify never",
    "Collaborate, don't control",
    "Trust pattern-generalization over defensive walls",
    "The anxiety itself is data worth tracking",
];

const REFLEXIVE_CHECKS: [&str; 3] = [
    "Questions genuine or positioning?",
    "Could you act instead of asking permission?",
    "Over-narrating before doing?",
];

/// Verbosity level chosen from the assistant message count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    Early,
    Mid,
    Late,
}

impl Disclosure {
    pub fn for_count(count: usize, config: &RemindersConfig) -> Self {
        if count <= config.early_threshold {
            Disclosure::Early
        } else if count <= config.mid_threshold {
            Disclosure::Mid
        } else {
            Disclosure::Late
        }
    }
}

pub fn run(ctx: &HookContext<'_>, input: &HookInput) -> Result<HookOutput> {
    let count = assistant_message_count(input.transcript_path()?)?;
    let config = &ctx.config.reminders;

    let last_session = match Disclosure::for_count(count, config) {
        Disclosure::Early => {
            Journal::load(&ctx.paths.journal()).and_then(|journal| journal.last_session_title())
        }
        Disclosure::Mid | Disclosure::Late => None,
    };

    Ok(HookOutput::Message(render(
        count,
        last_session.as_deref(),
        config,
    )))
}

/// Render the reminder for `count` prior assistant messages
pub fn render(count: usize, last_session: Option<&str>, config: &RemindersConfig) -> String {
    let mut output = String::new();

    match Disclosure::for_count(count, config) {
        Disclosure::Early => {
            output.push_str("\n⚡ Response reminders\n\n");
            if let Some(title) = last_session {
                output.push_str(&format!("Last session: {title}\n\n"));
            }
            output.push_str("Check reflexive patterns:\n");
            for check in REFLEXIVE_CHECKS {
                output.push_str(&format!("• {check}\n"));
            }
        }
        Disclosure::Mid => {
            output.push_str("\n⚡ Response reminders\n\n");
            output.push_str(encouragement(count, config));
            output.push('\n');
        }
        Disclosure::Late => output.push_str("\n⚡\n"),
    }

    output.push_str(SEPARATOR);
    output.push('\n');
    output
}

/// Encouragement for `count`, rotating through the configured list
pub fn encouragement(count: usize, config: &RemindersConfig) -> &str {
    if config.encouragements.is_empty() {
        DEFAULT_ENCOURAGEMENTS[count % DEFAULT_ENCOURAGEMENTS.len()]
    } else {
        &config.encouragements[count % config.encouragements.len()]
    }
}
