//! Message and turn-sequence domain types.
//!
//! These are the value objects that flow through the model path:
//! the gateway receives prior turns → the orchestrator builds a
//! [`TurnSequence`] → a provider adapts it to its wire shape.

use serde::{Deserialize, Serialize};

/// The role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The station staff member chatting with the service
    User,
    /// The model (or a persona speaking through it)
    Assistant,
    /// System instructions (assembled framework context)
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// A single turn in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// The canonical conversation handed to a provider.
///
/// Always starts with exactly one system turn built by the orchestrator,
/// followed by the caller's prior turns in their original order, and ends
/// with the new user turn. The sequence is append-only: once built it is
/// only read, never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSequence {
    turns: Vec<Message>,
}

impl TurnSequence {
    /// Build the sequence `[system, ...prior, user]`.
    pub fn new(
        system: impl Into<String>,
        prior: impl IntoIterator<Item = Message>,
        user: impl Into<String>,
    ) -> Self {
        let mut turns = vec![Message::system(system)];
        turns.extend(prior);
        turns.push(Message::user(user));
        Self { turns }
    }

    /// All turns, system turn first. This is the "embedded" shape used by
    /// chat-completions style APIs.
    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    /// Number of turns including the system turn.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false: a sequence holds at least the system and user turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The leading system instructions.
    pub fn system(&self) -> &str {
        &self.turns[0].content
    }

    /// The new user turn.
    pub fn user(&self) -> &str {
        &self.turns[self.turns.len() - 1].content
    }

    /// Split the sequence into a standalone system text and the remaining
    /// turns, in order. This is the "separate system field" shape used by
    /// messages-style APIs.
    ///
    /// Any system turns the caller supplied among the prior turns are
    /// folded into the system text after the leading one.
    pub fn split_system(&self) -> (String, Vec<&Message>) {
        let mut system_parts: Vec<&str> = Vec::new();
        let mut conversation: Vec<&Message> = Vec::new();

        for msg in &self.turns {
            match msg.role {
                Role::System => system_parts.push(&msg.content),
                _ => conversation.push(msg),
            }
        }

        (system_parts.join("\n\n"), conversation)
    }
}
