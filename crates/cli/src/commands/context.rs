//! `airwave context`: Show what a message would be sent with.

use airwave_config::AppConfig;
use airwave_orchestrator::RequestHandler;

pub async fn run(
    message: String,
    agent: Option<String>,
    summary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let handler = RequestHandler::from_config(&config);
    let preview = handler.preview(&message, agent.as_deref());
    let plan = &preview.plan;
    let meta = &preview.context.metadata;

    println!("🧭 Context Preview");
    println!("==================");
    println!("  Source:      {}", meta.tier.as_str());
    println!(
        "  Complexity:  score {} ({}){}",
        plan.complexity.score,
        if plan.complexity.is_complex { "complex" } else { "simple" },
        if plan.complexity.signals.is_empty() {
            String::new()
        } else {
            format!(" [{}]", plan.complexity.signals.join(", "))
        }
    );
    println!("  Tier:        {:?}", plan.tier);
    println!(
        "  Budget:      {} tokens ({} chars)",
        plan.budget_tokens, meta.max_chars
    );
    println!(
        "  Assembled:   {} chars (~{} tokens)",
        meta.total_chars, meta.approx_tokens
    );

    println!("\n  Sections:");
    for section in &meta.sections {
        let marker = if section.truncated { " (truncated)" } else { "" };
        println!("    + {:<10} {:<32} {:>7} chars{marker}", section.layer, section.name, section.chars);
    }
    if !meta.drops.is_empty() {
        println!("\n  Dropped:");
        for drop in &meta.drops {
            println!("    - {:<10} {:<32} {:>7} chars  {}", drop.layer, drop.name, drop.chars, drop.reason);
        }
    }

    if !summary {
        println!("\n{}", preview.context.text);
    }

    Ok(())
}
