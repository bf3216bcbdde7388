//! `airwave ask`: Send one message through the orchestrator.

use airwave_config::AppConfig;
use airwave_core::{ChatRequest, ProviderKind, ResponseKind};
use airwave_orchestrator::RequestHandler;

pub async fn run(
    message: String,
    agent: Option<String>,
    provider: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let provider: ProviderKind = provider.parse()?;

    let mut request = ChatRequest::new(message).with_provider(provider);
    if let Some(agent) = agent {
        request = request.with_agent(agent);
    }

    let handler = RequestHandler::from_config(&config);
    let result = handler.handle(&request).await?;

    let speaker = match &result.kind {
        ResponseKind::Command { command, .. } => format!("*{command}"),
        ResponseKind::RoutedSuggestion => "orchestrator".to_string(),
        ResponseKind::ModelResponse => result
            .resolved_persona_id
            .clone()
            .unwrap_or_else(|| request.persona_or_orchestrator().to_string()),
    };

    println!("[{speaker}]");
    println!("{}", result.response_text);

    Ok(())
}
