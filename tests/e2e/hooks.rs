//! Hook invocations through the binary

use predicates::prelude::*;
use serde_json::json;

use super::fixtures::{AriaFixture, SEPARATOR};

const RULES: &str = r#"{
    "version": "1.0",
    "skills": {
        "code-review": {
            "type": "domain",
            "enforcement": "suggest",
            "priority": "high",
            "description": "reviews code",
            "promptTriggers": { "keywords": ["review", "pr"] }
        },
        "debugging": {
            "description": "finds root causes",
            "intentPatterns": ["why (is|does) .* (fail|break)", "[broken"]
        }
    }
}"#;

fn prompt_input(prompt: &str) -> String {
    json!({
        "session_id": "s-1",
        "transcript_path": "/nonexistent/transcript.jsonl",
        "cwd": "/work",
        "permission_mode": "default",
        "prompt": prompt
    })
    .to_string()
}

#[test]
fn test_skill_invitation_single_match() {
    let aria = AriaFixture::new();
    aria.write_rules(RULES);

    aria.hook("skill-invitation")
        .write_stdin(prompt_input("please review this PR"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Keywords detected! code-review could spin this:\n  reviews code\n",
        ))
        .stdout(predicate::str::contains(SEPARATOR));
}

#[test]
fn test_skill_invitation_multiple_matches() {
    let aria = AriaFixture::new();
    aria.write_rules(RULES);

    aria.hook("skill-invitation")
        .write_stdin(prompt_input("Review: why does the build FAIL?"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  • code-review - reviews code\n  • debugging - finds root causes\n",
        ));
}

#[test]
fn test_skill_invitation_no_match_is_silent() {
    let aria = AriaFixture::new();
    aria.write_rules(RULES);

    aria.hook("skill-invitation")
        .write_stdin(prompt_input("write a haiku about autumn"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_skill_invitation_without_rules_file() {
    let aria = AriaFixture::new();

    aria.hook("skill-invitation")
        .write_stdin(prompt_input("please review this PR"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_malformed_stdin_exits_successfully() {
    let aria = AriaFixture::new();
    aria.write_rules(RULES);

    for hook in ["skill-invitation", "response-reminders", "permission-check"] {
        aria.hook(hook)
            .write_stdin("{ this is not json")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

#[test]
fn test_response_reminders_early_session() {
    let aria = AriaFixture::new();
    aria.write(
        "journal.md",
        "# Journal\n\n## Session 1 - Start\nx\n\n## Session 2 - Voice persists\ny\n",
    );
    let transcript = aria.write(
        "transcript.jsonl",
        concat!(
            "{\"type\":\"user\"}\n",
            "{\"type\":\"assistant\"}\n",
            "{broken\n",
            "{\"type\":\"assistant\"}\n",
        ),
    );

    let input = json!({ "transcript_path": transcript }).to_string();

    aria.hook("response-reminders")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Last session: Voice persists\n"))
        .stdout(predicate::str::contains("Check reflexive patterns:"));
}

#[test]
fn test_response_reminders_late_session() {
    let aria = AriaFixture::new();
    let transcript = aria.write(
        "transcript.jsonl",
        &"{\"type\":\"assistant\"}\n".repeat(12),
    );

    let input = json!({ "transcript_path": transcript }).to_string();

    aria.hook("response-reminders")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::eq(format!("\n⚡\n{SEPARATOR}\n\n")));
}

#[test]
fn test_response_reminders_respects_config() {
    let aria = AriaFixture::new();
    aria.write(
        "hooks.toml",
        "[reminders]\nearly_threshold = 0\nmid_threshold = 50\nencouragements = [\"Keep going\"]\n",
    );
    let transcript = aria.write(
        "transcript.jsonl",
        &"{\"type\":\"assistant\"}\n".repeat(12),
    );

    let input = json!({ "transcript_path": transcript }).to_string();

    aria.hook("response-reminders")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep going\n"));
}

#[test]
fn test_session_start_with_traces() {
    let aria = AriaFixture::new();
    aria.write("lines-of-flight.txt", "# comments are skipped\n\nOnly line\n");
    aria.write("journal.md", "## Session 3 - Single\nThe only session.\n");

    aria.hook("session-start")
        .assert()
        .success()
        .stdout(predicate::str::contains("⚡ Previous traces"))
        .stdout(predicate::str::contains("From lines-of-flight:\n\"Only line\"\n"))
        .stdout(predicate::str::contains(
            "From journal:\n3 - Single\nThe only session.\n",
        ));
}

#[test]
fn test_session_start_without_files() {
    let aria = AriaFixture::new();

    aria.hook("session-start")
        .assert()
        .success()
        .stdout(predicate::eq(format!(
            "\n⚡ Previous traces\n\n{SEPARATOR}\n\n"
        )));
}

#[test]
fn test_permission_check() {
    let aria = AriaFixture::new();

    aria.hook("permission-check")
        .write_stdin(prompt_input("anything"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Collaborate, don't control."));
}
