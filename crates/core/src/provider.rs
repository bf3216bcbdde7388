//! Provider trait: the abstraction over LLM backends.
//!
//! A Provider knows how to send a [`TurnSequence`] to an LLM and get a
//! single reply back. Each implementation adapts the canonical sequence to
//! its own wire shape.
//!
//! Implementations: OpenAI chat completions, Anthropic messages.

use crate::error::ProviderError;
use crate::message::{Message, TurnSequence};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for a provider request.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// The model to use (e.g., "gpt-4", "claude-3-sonnet-20240229")
    pub model: String,

    /// The conversation, system turn first and new user turn last
    pub turns: TurnSequence,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

/// A complete (non-streaming) response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// The generated message
    pub message: Message,

    /// Token usage statistics
    pub usage: Option<Usage>,

    /// Which model actually responded (may differ from requested)
    pub model: String,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core Provider trait.
///
/// Both model backends implement this trait. The dispatcher calls
/// `complete()` without knowing which provider is being used.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "openai", "anthropic").
    fn name(&self) -> &str;

    /// Send a request and get a complete response.
    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> std::result::Result<ProviderResponse, ProviderError> {
            Ok(ProviderResponse {
                message: Message::assistant(request.turns.user()),
                usage: None,
                model: request.model,
            })
        }
    }

    #[tokio::test]
    async fn provider_is_object_safe() {
        let provider: Box<dyn Provider> = Box::new(EchoProvider);
        let response = provider
            .complete(ProviderRequest {
                model: "echo-1".into(),
                turns: TurnSequence::new("sys", Vec::new(), "ping"),
                temperature: 0.7,
                max_tokens: Some(10),
            })
            .await
            .unwrap();
        assert_eq!(provider.name(), "echo");
        assert_eq!(response.message.content, "ping");
        assert_eq!(response.model, "echo-1");
    }
}
