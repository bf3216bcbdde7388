//! Inbound chat requests and the per-request result types.

use crate::message::Message;
use crate::persona::ORCHESTRATOR_ID;
use serde::{Deserialize, Serialize};

/// Which model provider a request should be sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat completions (primary)
    #[default]
    OpenAi,
    /// Anthropic messages (secondary)
    Anthropic,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            other => Err(crate::Error::Config {
                message: format!("unknown provider '{other}' (expected openai or anthropic)"),
            }),
        }
    }
}

/// The station the user works for, as supplied by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub format: String,
}

impl StationProfile {
    /// The one-line station description placed in the system turn.
    pub fn context_line(station: Option<&StationProfile>) -> String {
        match station {
            Some(s) => format!(
                "Station Context: {} in {} ({} format)",
                s.name, s.location, s.format
            ),
            None => "Station Context: Not provided".to_string(),
        }
    }
}

/// One inbound chat message plus everything needed to answer it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The new message. Absent is treated as empty.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub station: Option<StationProfile>,

    /// Prior conversation turns, oldest first.
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Persona the client believes is active.
    #[serde(default)]
    pub agent_id: Option<String>,

    #[serde(default)]
    pub provider: ProviderKind,
}

impl ChatRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_agent(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_station(mut self, station: StationProfile) -> Self {
        self.station = Some(station);
        self
    }

    /// The active persona id, ignoring a blank one.
    pub fn active_persona(&self) -> Option<&str> {
        self.agent_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// The persona id reported on model responses.
    pub fn persona_or_orchestrator(&self) -> &str {
        self.active_persona().unwrap_or(ORCHESTRATOR_ID)
    }
}

/// How a request was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKind {
    /// A `*` command handled by the command parser.
    Command { command: String, args: Vec<String> },
    /// A canned routing suggestion; no model was called.
    RoutedSuggestion,
    /// Text produced by a model provider.
    ModelResponse,
}

/// The outcome of handling one [`ChatRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub response_text: String,
    /// Persona the reply speaks for, when there is one.
    pub resolved_persona_id: Option<String>,
    pub kind: ResponseKind,
}

impl DispatchResult {
    pub fn command(
        command: impl Into<String>,
        args: Vec<String>,
        response_text: impl Into<String>,
        persona: Option<String>,
    ) -> Self {
        Self {
            response_text: response_text.into(),
            resolved_persona_id: persona,
            kind: ResponseKind::Command {
                command: command.into(),
                args,
            },
        }
    }

    pub fn routed(response_text: impl Into<String>) -> Self {
        Self {
            response_text: response_text.into(),
            resolved_persona_id: None,
            kind: ResponseKind::RoutedSuggestion,
        }
    }

    pub fn model(response_text: impl Into<String>, persona: impl Into<String>) -> Self {
        Self {
            response_text: response_text.into(),
            resolved_persona_id: Some(persona.into()),
            kind: ResponseKind::ModelResponse,
        }
    }
}

/// JSON shape returned to chat clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatResponse {
    Command {
        command: String,
        args: Vec<String>,
        message: String,
        #[serde(rename = "agentId", skip_serializing_if = "Option::is_none")]
        agent_id: Option<String>,
    },
    Orchestrator {
        content: String,
    },
    Message {
        content: String,
        #[serde(rename = "agentId")]
        agent_id: String,
    },
}

impl From<DispatchResult> for ChatResponse {
    fn from(result: DispatchResult) -> Self {
        match result.kind {
            ResponseKind::Command { command, args } => ChatResponse::Command {
                command,
                args,
                message: result.response_text,
                agent_id: result.resolved_persona_id,
            },
            ResponseKind::RoutedSuggestion => ChatResponse::Orchestrator {
                content: result.response_text,
            },
            ResponseKind::ModelResponse => ChatResponse::Message {
                content: result.response_text,
                agent_id: result
                    .resolved_persona_id
                    .unwrap_or_else(|| ORCHESTRATOR_ID.to_string()),
            },
        }
    }
}
