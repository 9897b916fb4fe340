//! The portfolio command surface.
//!
//! Parsing and execution are pure: `(input, Profile) → Reply`. The TUI
//! appends replies to its scrollback; the `exec` subcommand prints them.
//! Formatting follows the same rule as everything else here — data in,
//! String out, no I/O.

use serde::{Deserialize, Serialize};

use crate::profile::{Profile, Project};

// ============================================================================
// PARSING
// ============================================================================

/// The closed command set understood by the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    WhoAmI,
    Clear,
    /// `cat <project>` — show a project writeup.
    Cat(String),
    /// `run <project>` — replay a project's boot log.
    Run(String),
    /// `view notes` — study notes.
    ViewNotes,
    /// `ssh gateway` — AI gateway banner (no real backend).
    SshGateway,
    /// Anything else. Carries the original input for the error message.
    Unknown(String),
}

impl Command {
    /// Parse a raw input line. Case-insensitive, whitespace-tolerant.
    pub fn parse(input: &str) -> Command {
        let normalized = input.trim().to_lowercase();
        let mut words = normalized.split_whitespace();

        match (words.next(), words.next(), words.next()) {
            (Some("help"), None, _) => Command::Help,
            (Some("whoami"), None, _) => Command::WhoAmI,
            (Some("clear"), None, _) => Command::Clear,
            (Some("cat"), Some(name), None) => Command::Cat(name.to_string()),
            (Some("run"), Some(name), None) => Command::Run(name.to_string()),
            (Some("view"), Some("notes"), None) => Command::ViewNotes,
            (Some("ssh"), Some("gateway"), None) => Command::SshGateway,
            _ => Command::Unknown(input.trim().to_string()),
        }
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Broad reply category, mirrored into the JSON output of `exec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Text,
    Error,
    /// The gateway banner; a kind of its own so a frontend could open a
    /// chat session on it.
    ChatInit,
}

/// Rendering hint: which content family the text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    Bio,
    Project,
    Notes,
    Log,
}

/// One rendered reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    pub kind: OutputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<OutputStyle>,
    pub content: String,
}

/// What executing a command asks the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(CommandOutput),
    /// Wipe the scrollback. Handled by the caller; produces no text.
    Clear,
}

/// Execute a parsed command against a profile.
pub fn execute(command: &Command, profile: &Profile) -> Reply {
    match command {
        Command::Help => text(OutputStyle::Notes, format_help(profile)),
        Command::WhoAmI => text(OutputStyle::Bio, format_whoami(profile)),
        Command::Clear => Reply::Clear,
        Command::Cat(name) => match profile.project(name) {
            Some(project) => text(OutputStyle::Project, format_project(project)),
            None => not_found(&format!("cat {}", name)),
        },
        Command::Run(name) => match profile.project(name) {
            Some(project) if !project.run_log.is_empty() => {
                text(OutputStyle::Log, format_run_log(project))
            }
            Some(project) => error(format!("{} has no run log. Try `cat {}`.", name, project.name)),
            None => not_found(&format!("run {}", name)),
        },
        Command::ViewNotes => text(OutputStyle::Notes, format_notes(profile)),
        Command::SshGateway => Reply::Output(CommandOutput {
            kind: OutputKind::ChatInit,
            style: Some(OutputStyle::Bio),
            content: format_gateway(),
        }),
        Command::Unknown(input) => not_found(input),
    }
}

fn text(style: OutputStyle, content: String) -> Reply {
    Reply::Output(CommandOutput {
        kind: OutputKind::Text,
        style: Some(style),
        content,
    })
}

fn error(content: String) -> Reply {
    Reply::Output(CommandOutput {
        kind: OutputKind::Error,
        style: None,
        content,
    })
}

fn not_found(input: &str) -> Reply {
    error(format!(
        "Command not found: {}\nType 'help' for available commands.",
        input
    ))
}

// ============================================================================
// FORMATTERS
// ============================================================================

fn format_help(profile: &Profile) -> String {
    let mut out = String::from("Available commands:\n");
    out.push_str("  whoami           → about this portfolio\n");
    for project in &profile.projects {
        out.push_str(&format!("  cat {:<12} → {}\n", project.name, project.summary));
        if !project.run_log.is_empty() {
            out.push_str(&format!("  run {:<12} → replay its boot log\n", project.name));
        }
    }
    out.push_str("  view notes       → study notes\n");
    out.push_str("  ssh gateway      → AI gateway session\n");
    out.push_str("  help             → this message\n");
    out.push_str("  clear            → clear the screen\n");
    out
}

fn format_whoami(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", profile.name));
    out.push_str(&format!("Role    : {}\n", profile.role));
    if !profile.focus.is_empty() {
        out.push_str(&format!("Focus   : {}\n", profile.focus.join(", ")));
    }
    if !profile.stack.is_empty() {
        out.push_str(&format!("Stack   : {}\n", profile.stack.join(" · ")));
    }
    if !profile.contact.is_empty() {
        out.push_str(&format!("Contact : {}\n", profile.contact));
    }
    if !profile.tagline.is_empty() {
        out.push_str(&format!("\n> \"{}\"\n", profile.tagline));
    }
    out
}

fn format_project(project: &Project) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", project.title));
    out.push_str(&format!("{}\n", project.summary));
    if !project.highlights.is_empty() {
        out.push('\n');
        for line in &project.highlights {
            out.push_str(&format!("  • {}\n", line));
        }
    }
    if !project.status.is_empty() {
        out.push_str(&format!("\nStatus: {}\n", project.status));
    }
    out
}

fn format_run_log(project: &Project) -> String {
    let mut out = String::new();
    for line in &project.run_log {
        out.push_str(&format!("[{}] {}\n", project.name, line));
    }
    out
}

fn format_notes(profile: &Profile) -> String {
    let mut out = String::from("=== Notes ===\n");
    for note in &profile.notes {
        out.push_str(&format!("  → {}\n", note));
    }
    out
}

fn format_gateway() -> String {
    "Connecting to AI Gateway...\n\
     ✓ tunnel established\n\
     ✓ authentication successful\n\
     \n\
     This demo gateway has no live backend; in the deployed portfolio it\n\
     proxies chat to an LLM behind prompt sanitization and rate limits.\n"
        .to_string()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::default()
    }

    // -- Parsing --

    #[test]
    fn parse_bare_commands() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("whoami"), Command::WhoAmI);
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("view notes"), Command::ViewNotes);
        assert_eq!(Command::parse("ssh gateway"), Command::SshGateway);
    }

    #[test]
    fn parse_is_case_and_whitespace_insensitive() {
        assert_eq!(Command::parse("  HELP  "), Command::Help);
        assert_eq!(Command::parse("WhoAmI"), Command::WhoAmI);
        assert_eq!(Command::parse("View   Notes"), Command::ViewNotes);
    }

    #[test]
    fn parse_cat_and_run_carry_the_argument() {
        assert_eq!(Command::parse("cat pygit"), Command::Cat("pygit".into()));
        assert_eq!(Command::parse("run job_scraper"), Command::Run("job_scraper".into()));
    }

    #[test]
    fn parse_trailing_garbage_is_unknown() {
        assert_eq!(
            Command::parse("cat a b"),
            Command::Unknown("cat a b".into())
        );
        assert_eq!(Command::parse("view stuff"), Command::Unknown("view stuff".into()));
    }

    #[test]
    fn parse_unknown_preserves_input() {
        assert_eq!(
            Command::parse("  sudo rm -rf  "),
            Command::Unknown("sudo rm -rf".into())
        );
    }

    // -- Execution --

    #[test]
    fn whoami_renders_bio_text() {
        let reply = execute(&Command::WhoAmI, &profile());
        match reply {
            Reply::Output(out) => {
                assert_eq!(out.kind, OutputKind::Text);
                assert_eq!(out.style, Some(OutputStyle::Bio));
                assert!(out.content.contains("Role"));
            }
            Reply::Clear => panic!("whoami must produce output"),
        }
    }

    #[test]
    fn help_lists_every_project() {
        let p = profile();
        let reply = execute(&Command::Help, &p);
        let Reply::Output(out) = reply else {
            panic!("help must produce output")
        };
        for project in &p.projects {
            assert!(out.content.contains(&project.name));
        }
        assert!(out.content.contains("clear"));
    }

    #[test]
    fn clear_produces_no_output() {
        assert_eq!(execute(&Command::Clear, &profile()), Reply::Clear);
    }

    #[test]
    fn cat_known_project_is_project_styled() {
        let reply = execute(&Command::Cat("pygit".into()), &profile());
        let Reply::Output(out) = reply else {
            panic!("cat must produce output")
        };
        assert_eq!(out.kind, OutputKind::Text);
        assert_eq!(out.style, Some(OutputStyle::Project));
        assert!(out.content.contains("PyGit"));
    }

    #[test]
    fn cat_unknown_project_is_an_error() {
        let reply = execute(&Command::Cat("nope".into()), &profile());
        let Reply::Output(out) = reply else {
            panic!("cat must produce output")
        };
        assert_eq!(out.kind, OutputKind::Error);
        assert!(out.content.contains("not found"));
    }

    #[test]
    fn run_with_log_is_log_styled() {
        let reply = execute(&Command::Run("job_scraper".into()), &profile());
        let Reply::Output(out) = reply else {
            panic!("run must produce output")
        };
        assert_eq!(out.style, Some(OutputStyle::Log));
        assert!(out.content.contains("job_scraper"));
    }

    #[test]
    fn run_without_log_is_an_error() {
        // pygit has a writeup but no run log in the default profile.
        let reply = execute(&Command::Run("pygit".into()), &profile());
        let Reply::Output(out) = reply else {
            panic!("run must produce output")
        };
        assert_eq!(out.kind, OutputKind::Error);
    }

    #[test]
    fn gateway_is_chat_init() {
        let reply = execute(&Command::SshGateway, &profile());
        let Reply::Output(out) = reply else {
            panic!("ssh gateway must produce output")
        };
        assert_eq!(out.kind, OutputKind::ChatInit);
    }

    #[test]
    fn unknown_command_names_help() {
        let reply = execute(&Command::Unknown("frobnicate".into()), &profile());
        let Reply::Output(out) = reply else {
            panic!("unknown must produce output")
        };
        assert_eq!(out.kind, OutputKind::Error);
        assert!(out.content.contains("frobnicate"));
        assert!(out.content.contains("help"));
    }

    // -- JSON surface --

    #[test]
    fn output_serializes_with_snake_case_kind() {
        let out = CommandOutput {
            kind: OutputKind::ChatInit,
            style: Some(OutputStyle::Bio),
            content: "hi".into(),
        };
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("\"chat_init\""));
        assert!(json.contains("\"bio\""));
    }

    #[test]
    fn output_omits_absent_style() {
        let out = CommandOutput {
            kind: OutputKind::Error,
            style: None,
            content: "boom".into(),
        };
        let json = serde_json::to_string(&out).unwrap();
        assert!(!json.contains("style"));
    }
}
