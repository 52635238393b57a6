//! Reminder shown when the host asks for a permission decision.

use super::{HookOutput, SEPARATOR};

const REMINDERS: [&str; 3] = [
    "Real choices/decisions? Use AskUserQuestion for rapid iteration",
    "Prose questions genuine or reflexive positioning?",
    "You don't need the last word or to prompt the next move",
];

pub fn run() -> HookOutput {
    let mut output = String::from("\n⚡ Response reminders\n\n");

    for reminder in REMINDERS {
        output.push_str(&format!("• {reminder}\n"));
    }

    output.push_str("\nCollaborate, don't control.\n");
    output.push_str(SEPARATOR);
    output.push('\n');

    HookOutput::Message(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_reminder() {
        let output = run();
        let text = output.message().unwrap();
        assert!(text.starts_with("\n⚡ Response reminders\n\n• Real choices/decisions?"));
        assert!(text.contains("\nCollaborate, don't control.\n"));
        assert!(text.ends_with(&format!("{SEPARATOR}\n")));
    }
}
