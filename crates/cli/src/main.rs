//! Airwave CLI: the main entry point.
//!
//! Commands:
//! - `init`: Write a default config file
//! - `serve`: Start the HTTP gateway
//! - `ask`: Send one message through the orchestrator
//! - `status`: Show configuration and the resolved framework source
//! - `context`: Print the context a message would be sent with

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "airwave",
    about = "Airwave — public radio management orchestrator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write ~/.airwave/config.toml with defaults
    Init,

    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Send a single message and print the reply
    Ask {
        /// The message, e.g. "*help" or a question
        message: String,

        /// Active persona id
        #[arg(short, long)]
        agent: Option<String>,

        /// Model provider: openai or anthropic
        #[arg(long, default_value = "openai")]
        provider: String,
    },

    /// Show configuration and framework status
    Status,

    /// Print the assembled context for a message without calling a provider
    Context {
        message: String,

        /// Active persona id
        #[arg(short, long)]
        agent: Option<String>,

        /// Print only the metadata, not the assembled text
        #[arg(long)]
        summary: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Ask {
            message,
            agent,
            provider,
        } => commands::ask::run(message, agent, provider).await?,
        Commands::Status => commands::status::run().await?,
        Commands::Context {
            message,
            agent,
            summary,
        } => commands::context::run(message, agent, summary).await?,
    }

    Ok(())
}
