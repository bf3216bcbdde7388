//! `airwave serve`: Start the HTTP API server.

use airwave_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("📻 Airwave Gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!(
        "   CORS origin: {}",
        config.gateway.allowed_origin.as_deref().unwrap_or("same-origin only")
    );

    airwave_gateway::start(config).await?;

    Ok(())
}
