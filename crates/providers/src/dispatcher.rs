//! Provider dispatcher: picks the primary or secondary backend for a
//! request and wraps the reply as a [`DispatchResult`].
//!
//! The secondary backend only exists when its credential is configured.
//! Asking for it otherwise silently falls back to the primary.

use std::sync::Arc;

use airwave_core::error::ProviderError;
use airwave_core::provider::{Provider, ProviderRequest};
use airwave_core::{DispatchResult, ProviderKind, TurnSequence};
use tracing::{debug, info, warn};

use crate::anthropic::AnthropicProvider;
use crate::openai::OpenAiProvider;

/// A provider paired with the model it should be asked for.
#[derive(Clone)]
pub struct ProviderSlot {
    pub provider: Arc<dyn Provider>,
    pub model: String,
}

impl ProviderSlot {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

/// Routes model calls to one of two interchangeable providers.
pub struct ProviderDispatcher {
    primary: ProviderSlot,
    secondary: Option<ProviderSlot>,
    temperature: f32,
    max_tokens: u32,
}

impl ProviderDispatcher {
    pub fn new(primary: ProviderSlot) -> Self {
        Self {
            primary,
            secondary: None,
            temperature: 0.7,
            max_tokens: 1000,
        }
    }

    pub fn with_secondary(mut self, secondary: ProviderSlot) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn with_generation(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    /// The slot that will serve a request for `kind`.
    pub fn select(&self, kind: ProviderKind) -> &ProviderSlot {
        match (kind, &self.secondary) {
            (ProviderKind::Anthropic, Some(secondary)) => secondary,
            (ProviderKind::Anthropic, None) => {
                debug!("Secondary provider not configured, using primary");
                &self.primary
            }
            (ProviderKind::OpenAi, _) => &self.primary,
        }
    }

    /// Send `turns` to the selected provider and wrap the reply.
    ///
    /// `persona` is reported back as the resolved persona id.
    pub async fn dispatch(
        &self,
        kind: ProviderKind,
        turns: TurnSequence,
        persona: &str,
    ) -> Result<DispatchResult, ProviderError> {
        let slot = self.select(kind);
        let request = ProviderRequest {
            model: slot.model.clone(),
            turns,
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
        };

        let response = slot.provider.complete(request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                provider = slot.provider.name(),
                model = %response.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Provider call complete"
            );
        }

        Ok(DispatchResult::model(response.message.content, persona))
    }
}

/// Build the dispatcher from configuration.
///
/// OpenAI is always the primary. Anthropic is added only when it has a key.
pub fn build_from_config(config: &airwave_config::AppConfig) -> ProviderDispatcher {
    let openai_config = &config.providers.openai;
    if !openai_config.has_api_key() {
        warn!("No OpenAI API key configured; model requests will fail until OPENAI_API_KEY is set");
    }

    let mut openai = OpenAiProvider::new(openai_config.api_key.clone().unwrap_or_default());
    if let Some(url) = &openai_config.api_url {
        openai = openai.with_base_url(url);
    }

    let mut dispatcher =
        ProviderDispatcher::new(ProviderSlot::new(Arc::new(openai), &openai_config.model))
            .with_generation(config.generation.temperature, config.generation.max_tokens);

    let anthropic_config = &config.providers.anthropic;
    if let Some(key) = anthropic_config.api_key.as_deref().filter(|_| anthropic_config.has_api_key()) {
        let mut anthropic = AnthropicProvider::new(key);
        if let Some(url) = &anthropic_config.api_url {
            anthropic = anthropic.with_base_url(url);
        }
        dispatcher = dispatcher.with_secondary(ProviderSlot::new(
            Arc::new(anthropic),
            &anthropic_config.model,
        ));
        info!("Anthropic provider enabled");
    }

    dispatcher
}
