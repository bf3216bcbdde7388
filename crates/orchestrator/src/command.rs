//! `*` command grammar.
//!
//! Commands never fail. Anything that starts with the prefix is a command;
//! unrecognized tokens degrade to a pointer at `*help`.

use airwave_core::persona::{PERSONAS, PersonaDescriptor, find_persona};
use airwave_core::workflow::{WORKFLOWS, find_workflow};
use serde::Serialize;

use crate::templates::{self, render};

/// Prefix that marks a command.
pub const COMMAND_PREFIX: char = '*';

/// Maximum number of autocomplete suggestions returned by [`suggest`].
pub const MAX_SUGGESTIONS: usize = 6;

/// Outcome of [`parse_command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    NotCommand,
    Command {
        command: String,
        args: Vec<String>,
        response_text: String,
    },
}

impl CommandResult {
    pub fn is_command(&self) -> bool {
        matches!(self, CommandResult::Command { .. })
    }

    /// The persona an `*agent <id>` command switches to.
    ///
    /// Unknown ids are returned as typed; activation is lenient.
    pub fn activated_persona(&self) -> Option<&str> {
        match self {
            CommandResult::Command { command, args, .. } if command == "agent" => {
                args.first().map(String::as_str)
            }
            _ => None,
        }
    }
}

/// Parse `input` as a command.
pub fn parse_command(input: &str) -> CommandResult {
    let Some(body) = input.trim().strip_prefix(COMMAND_PREFIX) else {
        return CommandResult::NotCommand;
    };

    // First token ends at the first whitespace; a space right after the
    // prefix leaves it empty.
    let (command, rest) = match body.find(char::is_whitespace) {
        Some(i) => body.split_at(i),
        None => (body, ""),
    };
    let args: Vec<String> = rest.split_whitespace().map(str::to_string).collect();

    let response_text = respond(command, &args);
    CommandResult::Command {
        command: command.to_string(),
        args,
        response_text,
    }
}

fn respond(command: &str, args: &[String]) -> String {
    match command {
        "help" => templates::HELP.to_string(),
        "agent" => match args.first() {
            None => agents_menu(),
            Some(id) => match find_persona(id) {
                Some(persona) => activation(persona),
                None => render(
                    templates::AGENT_UNKNOWN,
                    &[("id", id.as_str()), ("ids", persona_ids().join(", ").as_str())],
                ),
            },
        },
        "workflow" => match args.first() {
            None => workflows_menu(),
            Some(id) => workflow_start(id),
        },
        "status" => render(
            templates::STATUS,
            &[
                ("persona_count", PERSONAS.len().to_string().as_str()),
                ("workflow_count", WORKFLOWS.len().to_string().as_str()),
            ],
        ),
        "chat-mode" => templates::CHAT_MODE.to_string(),
        "exit" => templates::EXIT.to_string(),
        "party-mode" => templates::PARTY_MODE.to_string(),
        "kb-mode" => templates::KB_MODE.to_string(),
        other => render(templates::UNKNOWN_COMMAND, &[("command", other)]),
    }
}

fn persona_ids() -> Vec<&'static str> {
    PERSONAS.iter().map(|p| p.id.as_str()).collect()
}

fn agents_menu() -> String {
    let entries: Vec<String> = PERSONAS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let domain = p.domain_summary.split(':').next().unwrap_or(p.domain_summary);
            render(
                templates::AGENTS_MENU_ENTRY,
                &[
                    ("n", (i + 1).to_string().as_str()),
                    ("id", p.id.as_str()),
                    ("icon", p.icon),
                    ("first_name", p.first_name),
                    ("domain", domain),
                ],
            )
        })
        .collect();
    render(templates::AGENTS_MENU, &[("entries", entries.join("\n").as_str())])
}

/// The activation message for a known persona.
pub fn activation(persona: &PersonaDescriptor) -> String {
    let focus: Vec<String> = persona
        .focus_areas
        .iter()
        .map(|a| {
            render(
                templates::FOCUS_AREA_ENTRY,
                &[("name", a.name), ("detail", a.detail)],
            )
        })
        .collect();

    render(
        templates::AGENT_ACTIVATION,
        &[
            ("title", persona.title),
            ("icon", persona.icon),
            ("display_name", persona.display_name),
            ("greeting", persona.greeting),
            ("focus_areas", focus.join("\n").as_str()),
            ("closing", persona.closing),
        ],
    )
}

fn workflows_menu() -> String {
    let entries: Vec<String> = WORKFLOWS
        .iter()
        .enumerate()
        .map(|(i, w)| {
            render(
                templates::WORKFLOWS_MENU_ENTRY,
                &[
                    ("n", (i + 1).to_string().as_str()),
                    ("id", w.id),
                    ("summary", w.summary),
                ],
            )
        })
        .collect();
    render(templates::WORKFLOWS_MENU, &[("entries", entries.join("\n").as_str())])
}

fn workflow_start(id: &str) -> String {
    let mut text = render(templates::WORKFLOW_START, &[("id", id)]);
    if let Some(wf) = find_workflow(id) {
        text.push_str(&render(
            templates::WORKFLOW_DETAIL,
            &[("icon", wf.icon), ("name", wf.name), ("summary", wf.summary)],
        ));
    }
    text
}

/// An autocomplete entry for a partially typed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSuggestion {
    pub command: String,
    pub description: String,
}

const BASE_COMMANDS: [(&str, &str); 7] = [
    ("*help", "Show all available commands and agents"),
    ("*status", "Check current system status"),
    ("*workflow", "Start a structured workflow"),
    ("*chat-mode", "Begin conversational assistance"),
    ("*kb-mode", "Access knowledge base"),
    ("*party-mode", "Consult all agents together"),
    ("*exit", "Return to orchestrator"),
];

/// Suggest completions for a typed prefix such as `*ag`.
///
/// Matching is a case-insensitive substring test over base commands,
/// then persona activations, then workflow starts. Input that does not
/// start with the prefix, or is only the prefix, yields nothing.
pub fn suggest(typed: &str) -> Vec<CommandSuggestion> {
    if !typed.starts_with(COMMAND_PREFIX) || typed.len() <= 1 {
        return Vec::new();
    }
    let needle = typed.to_lowercase();

    let base = BASE_COMMANDS.iter().map(|(command, description)| CommandSuggestion {
        command: command.to_string(),
        description: description.to_string(),
    });
    let personas = PERSONAS.iter().map(|p| CommandSuggestion {
        command: format!("*agent {}", p.id),
        description: format!("Switch to {} ({})", p.display_name, p.title),
    });
    let workflows = WORKFLOWS.iter().map(|w| CommandSuggestion {
        command: format!("*workflow {}", w.id),
        description: w.summary.to_string(),
    });

    base.chain(personas)
        .chain(workflows)
        .filter(|s| s.command.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use airwave_core::PersonaId;

    fn text_of(result: &CommandResult) -> &str {
        match result {
            CommandResult::Command { response_text, .. } => response_text,
            CommandResult::NotCommand => panic!("expected a command"),
        }
    }

    #[test]
    fn plain_text_is_not_a_command() {
        for input in ["", "   ", "hello *help", "help", "what is *status"] {
            assert_eq!(parse_command(input), CommandResult::NotCommand, "{input:?}");
        }
    }

    #[test]
    fn leading_whitespace_is_trimmed() {
        let result = parse_command("   *status  ");
        assert!(result.is_command());
        assert!(text_of(&result).contains("Current Status"));
    }

    #[test]
    fn splits_command_and_args() {
        match parse_command("*workflow   membership-campaign  extra") {
            CommandResult::Command { command, args, .. } => {
                assert_eq!(command, "workflow");
                assert_eq!(args, vec!["membership-campaign", "extra"]);
            }
            CommandResult::NotCommand => panic!("expected a command"),
        }
    }

    #[test]
    fn unknown_agent_echoes_id_verbatim() {
        let result = parse_command("*agent {ids}");
        assert_eq!(result.activated_persona(), Some("{ids}"));
        assert!(text_of(&result).contains("Switching to {ids} agent..."));
    }

    #[test]
    fn space_after_prefix_gives_empty_command() {
        match parse_command("* help") {
            CommandResult::Command { command, args, response_text } => {
                assert_eq!(command, "");
                assert_eq!(args, vec!["help"]);
                assert!(response_text.contains("Unknown command: `*`"));
            }
            CommandResult::NotCommand => panic!("expected a command"),
        }
    }

    #[test]
    fn help_is_stable_and_has_marker() {
        let a = parse_command("*help");
        let b = parse_command("*help");
        assert_eq!(a, b);
        assert!(text_of(&a).contains("Available Commands"));
    }

    #[test]
    fn zero_arg_templates_are_stable() {
        for cmd in ["*status", "*chat-mode", "*exit", "*party-mode", "*kb-mode", "*agent", "*workflow"] {
            assert_eq!(text_of(&parse_command(cmd)), text_of(&parse_command(cmd)));
        }
    }

    #[test]
    fn agent_menu_lists_every_persona() {
        let result = parse_command("*agent");
        let text = text_of(&result);
        assert!(text.starts_with("**👥 Available Agents:**"));
        for id in PersonaId::ALL {
            assert!(text.contains(id.as_str()));
        }
        assert!(text.contains("1. **development-director** 💝 - Sarah (Fundraising & Development)"));
        assert_eq!(result.activated_persona(), None);
    }

    #[test]
    fn agent_activation_names_the_persona() {
        for id in PersonaId::ALL {
            let result = parse_command(&format!("*agent {id}"));
            let persona = id.descriptor();
            assert!(text_of(&result).contains(persona.display_name));
            assert!(text_of(&result).contains(persona.closing));
            assert_eq!(result.activated_persona(), Some(id.as_str()));
        }
    }

    #[test]
    fn unknown_agent_is_lenient() {
        let result = parse_command("*agent station-manager");
        assert!(result.is_command());
        let text = text_of(&result);
        assert!(text.contains("Switching to station-manager agent..."));
        assert!(text.contains("development-director, marketing-director"));
        assert_eq!(result.activated_persona(), Some("station-manager"));
    }

    #[test]
    fn workflow_menu_and_start() {
        let menu = parse_command("*workflow");
        assert!(text_of(&menu).contains("6. **crisis-response** - Crisis management planning"));

        let start = parse_command("*workflow annual-planning");
        assert!(text_of(&start).starts_with("🔄 Starting annual-planning workflow..."));
        assert!(text_of(&start).contains("Annual Strategic Planning"));

        let custom = parse_command("*workflow budget-review");
        assert_eq!(text_of(&custom), "🔄 Starting budget-review workflow...");
    }

    #[test]
    fn unknown_command_names_the_attempt() {
        let result = parse_command("*dance");
        assert_eq!(
            text_of(&result),
            "❓ Unknown command: `*dance`\n\nUse `*help` to see available commands."
        );
    }

    #[test]
    fn suggest_requires_prefix_and_more() {
        assert!(suggest("").is_empty());
        assert!(suggest("*").is_empty());
        assert!(suggest("agent").is_empty());
    }

    #[test]
    fn suggest_matches_agents() {
        let found = suggest("*agent");
        assert_eq!(found.len(), 4);
        assert_eq!(found[0].command, "*agent development-director");
        assert_eq!(found[0].description, "Switch to Sarah Chen (Development Director)");
    }

    #[test]
    fn suggest_is_case_insensitive_and_capped() {
        let found = suggest("*W");
        assert!(found.len() <= MAX_SUGGESTIONS);
        assert_eq!(found[0].command, "*workflow");
        assert!(found.iter().all(|s| s.command.contains('w')));

        let found = suggest("*workflow ");
        assert_eq!(found.len(), MAX_SUGGESTIONS);
        assert_eq!(found[0].command, "*workflow annual-planning");
    }
}
