//! Propuestas CLI: the main entry point.
//!
//! Commands:
//! - `generate`    : Turn a business need into a technical proposal
//! - `areas`       : List the registered business areas
//! - `architecture`: Print an architecture blueprint
//! - `plan`        : Blueprint plus orchestration plan for a need
//! - `gateway`     : Start the HTTP API server
//! - `onboard`     : Write the default config file
//! - `config`      : Show, locate or validate the config
//! - `status`      : Show current settings

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "propuestas",
    about = "Propuestas: technical proposal generator",
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
    /// Generate a technical proposal from a business need
    Generate {
        /// Business need, in Spanish
        need: String,

        /// Force a business area instead of detecting it
        #[arg(short, long)]
        area: Option<String>,

        /// Print the execution trace summary
        #[arg(short, long)]
        trace: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Write the proposal with the configured LLM provider
        #[arg(long, conflicts_with_all = ["area", "json", "trace", "trace_out"])]
        llm: bool,

        /// Write the execution trace as JSON to this file
        #[arg(long, value_name = "FILE")]
        trace_out: Option<PathBuf>,
    },

    /// List the registered business areas
    Areas,

    /// Print an architecture blueprint
    Architecture {
        /// microservicios, serverless, event_driven, monolito or hibrida
        style: String,

        /// Business service (or function) to include; repeatable
        #[arg(short, long = "service")]
        services: Vec<String>,
    },

    /// Print an architecture blueprint and an orchestration plan for a need
    Plan {
        /// Business need, in Spanish
        need: String,

        /// Architecture style
        #[arg(short, long, default_value = "microservicios")]
        style: String,

        /// Orchestration pattern
        #[arg(short, long, default_value = "secuencial")]
        pattern: String,
    },

    /// Start the HTTP gateway server
    Gateway {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write the default configuration file
    Onboard,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show current settings
    Status,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Validate the config file
    Validate,
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
        Commands::Generate {
            need,
            area,
            trace,
            json,
            llm,
            trace_out,
        } => {
            let options = commands::generate::GenerateOptions {
                area,
                trace,
                json,
                trace_out,
            };
            if llm {
                commands::generate::run_llm(&need).await?
            } else {
                commands::generate::run(&need, options).await?
            }
        }
        Commands::Areas => commands::areas::run().await?,
        Commands::Architecture { style, services } => {
            commands::skills::architecture(&style, services).await?
        }
        Commands::Plan {
            need,
            style,
            pattern,
        } => commands::skills::plan(&need, &style, &pattern).await?,
        Commands::Gateway { port } => commands::gateway::run(port).await?,
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
        Commands::Status => commands::status::run().await?,
    }

    Ok(())
}
