//! Lifecycle hooks invoked by the agent host.
//!
//! Every hook produces a [`HookOutput`]. Failures inside a hook never reach
//! the host: they collapse to [`HookOutput::Silent`] (or to an omitted
//! section of the message) and the process still exits successfully.
//!
//! ## Hooks
//!
//! - `session-start`: a random line of flight and journal snippet
//! - `response-reminders`: reminders whose verbosity shrinks as the
//!   session grows (progressive disclosure)
//! - `skill-invitation`: suggests skills whose triggers match the prompt
//! - `permission-check`: a fixed reminder shown on permission prompts

pub mod permission_check;
pub mod response_reminders;
pub mod session_start;
pub mod skill_invitation;

use std::fmt;
use std::io::{self, Read, Write};

use crate::config::{AriaPaths, HookConfig};
use crate::error::Result;
use crate::input::HookInput;
use crate::picker::Picker;

/// Closing line of every hook message
pub const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// What a hook prints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutput {
    /// Nothing to show
    Silent,
    /// Text for the host to display
    Message(String),
}

impl HookOutput {
    pub fn message(&self) -> Option<&str> {
        match self {
            HookOutput::Message(text) => Some(text),
            HookOutput::Silent => None,
        }
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, HookOutput::Silent)
    }

    /// Print the message, if any, followed by a newline
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        if let HookOutput::Message(text) = self {
            writeln!(writer, "{text}")?;
            writer.flush()?;
        }
        Ok(())
    }
}

/// Resolved environment shared by all hooks
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    pub paths: &'a AriaPaths,
    pub config: &'a HookConfig,
}

impl<'a> HookContext<'a> {
    pub fn new(paths: &'a AriaPaths, config: &'a HookConfig) -> Self {
        Self { paths, config }
    }
}

/// The hooks this binary implements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    SessionStart,
    ResponseReminders,
    SkillInvitation,
    PermissionCheck,
}

impl HookKind {
    pub const ALL: [HookKind; 4] = [
        HookKind::SessionStart,
        HookKind::SkillInvitation,
        HookKind::ResponseReminders,
        HookKind::PermissionCheck,
    ];

    /// Subcommand name
    pub fn name(&self) -> &'static str {
        match self {
            HookKind::SessionStart => "session-start",
            HookKind::ResponseReminders => "response-reminders",
            HookKind::SkillInvitation => "skill-invitation",
            HookKind::PermissionCheck => "permission-check",
        }
    }

    /// Host lifecycle event the hook is registered under
    pub fn event(&self) -> &'static str {
        match self {
            HookKind::SessionStart => "SessionStart",
            HookKind::ResponseReminders | HookKind::SkillInvitation => "UserPromptSubmit",
            HookKind::PermissionCheck => "PermissionRequest",
        }
    }

    fn reads_input(&self) -> bool {
        !matches!(self, HookKind::SessionStart)
    }

    /// Run the hook against `stdin`, never failing
    pub fn run<R: Read>(&self, ctx: &HookContext<'_>, stdin: R, picker: &mut dyn Picker) -> HookOutput {
        match self.try_run(ctx, stdin, picker) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(hook = self.name(), "{e}");
                HookOutput::Silent
            }
        }
    }

    fn try_run<R: Read>(
        &self,
        ctx: &HookContext<'_>,
        stdin: R,
        picker: &mut dyn Picker,
    ) -> Result<HookOutput> {
        let input = if self.reads_input() {
            HookInput::read_from(stdin)?
        } else {
            HookInput::default()
        };

        match self {
            HookKind::SessionStart => Ok(session_start::run(ctx, picker)),
            HookKind::ResponseReminders => response_reminders::run(ctx, &input),
            HookKind::SkillInvitation => skill_invitation::run(ctx, &input),
            HookKind::PermissionCheck => Ok(permission_check::run()),
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
