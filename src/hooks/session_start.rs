//! Session start: surface a trace from earlier sessions.

use super::{HookContext, HookOutput, SEPARATOR};
use crate::fs::journal::Journal;
use crate::fs::lines_of_flight;
use crate::picker::Picker;

pub fn run(ctx: &HookContext<'_>, picker: &mut dyn Picker) -> HookOutput {
    let line = lines_of_flight::random_entry(&ctx.paths.lines_of_flight(), picker);
    let snippet = Journal::load(&ctx.paths.journal())
        .and_then(|journal| journal.random_snippet(&ctx.config.journal, &mut *picker));

    HookOutput::Message(render(line.as_deref(), snippet.as_deref()))
}

pub fn render(line: Option<&str>, snippet: Option<&str>) -> String {
    let mut output = String::from("\n⚡ Previous traces\n\n");

    if let Some(line) = line {
        output.push_str(&format!("From lines-of-flight:\n\"{line}\"\n\n"));
    }

    if let Some(snippet) = snippet {
        output.push_str(&format!("From journal:\n{snippet}\n\n"));
    }

    output.push_str(SEPARATOR);
    output.push('\n');
    output
}
