//! `airwave status`: Show configuration and framework status.

use airwave_config::AppConfig;
use airwave_orchestrator::{default_sources, load_framework};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let framework = load_framework(&default_sources(&config.framework));
    let key_state = |configured: bool| if configured { "configured" } else { "missing" };

    println!("📻 Airwave Status");
    println!("=================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Gateway:      {}:{}", config.gateway.host, config.gateway.port);
    println!(
        "  OpenAI:       {} ({})",
        config.providers.openai.model,
        key_state(config.providers.openai.has_api_key())
    );
    println!(
        "  Anthropic:    {} ({})",
        config.providers.anthropic.model,
        key_state(config.providers.anthropic.has_api_key())
    );
    println!("  Max tokens:   {}", config.generation.max_tokens);
    println!("  Temperature:  {}", config.generation.temperature);
    println!(
        "  Budgets:      complex {} / persona {} / plain {} tokens",
        config.budgets.complex, config.budgets.persona, config.budgets.plain
    );
    println!("  Bundle path:  {}", config.framework.bundle_path.display());
    println!("  Raw path:     {}", config.framework.raw_path.display());
    println!("  Framework:    {}", framework.tier().as_str());
    println!("  Workflows:    {}", framework.workflows().len());

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `airwave init` to create one");
    }

    Ok(())
}
