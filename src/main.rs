//! skillhub - aggregate expert skill documents and serve them over MCP.
//!
//! Main entry point for the skillhub CLI and stdio server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::adapter::{format_skill, SkillToolAdapter};
use crate::discovery::SkillRegistry;
use crate::loader::SkillLoader;
use crate::resolver::resolve_sources;
use crate::server::McpServer;

mod adapter;
mod discovery;
mod loader;
mod parser;
mod resolver;
mod server;

/// skillhub CLI.
#[derive(Parser)]
#[command(name = "skillhub")]
#[command(about = "Serve expert skills to agents over the Model Context Protocol")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve skills over stdio (default)
    Serve,

    /// Skill inspection commands
    Skills {
        #[command(subcommand)]
        action: SkillsAction,
    },
}

#[derive(Subcommand)]
enum SkillsAction {
    /// List all discoverable skills
    List,

    /// Print one skill's content
    Show {
        /// Skill name
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();

    info!("Starting skillhub v{}", env!("CARGO_PKG_VERSION"));

    let sources = resolve_sources();
    for source in &sources {
        info!(
            "Skill directory ({}): {}",
            source.label(),
            source.path().display()
        );
    }

    let registry = Arc::new(SkillRegistry::new(sources));
    let loader = SkillLoader::new(registry.clone());

    match cli.command {
        None | Some(Commands::Serve) => {
            let adapter = SkillToolAdapter::new(registry, loader);
            McpServer::new(adapter).run().await?;
        }
        Some(Commands::Skills { action }) => match action {
            SkillsAction::List => skills_list(&registry, &loader).await,
            SkillsAction::Show { name } => skills_show(&registry, &loader, &name).await?,
        },
    }

    Ok(())
}

/// Print the current skill catalog to stdout.
async fn skills_list(registry: &SkillRegistry, loader: &SkillLoader) {
    let names = registry.discover().await;

    if names.is_empty() {
        println!("No skills found.");
        println!("\nConfigured skill directories:");
        for source in registry.sources() {
            println!("  {} ({})", source.path().display(), source.label());
        }
        return;
    }

    println!("{:<24} {}", "NAME", "DESCRIPTION");
    println!("{}", "-".repeat(72));
    for name in &names {
        match loader.metadata(name).await {
            Ok(meta) => println!("{:<24} {}", name, meta.description),
            Err(_) => println!("{:<24} -", name),
        }
    }
}

/// Print one skill's formatted content to stdout.
async fn skills_show(
    registry: &SkillRegistry,
    loader: &SkillLoader,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    registry.discover().await;

    let skill = loader.load(name).await?;
    println!("{}", format_skill(&skill));

    Ok(())
}

/// Initialize tracing with stderr and file output.
///
/// stdout carries protocol frames, so console logging goes to stderr. Log
/// files are written to ~/.skillhub/debug/ with daily rotation.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".skillhub")
        .join("debug");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("skillhub")
        .filename_suffix("log")
        .max_log_files(7)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the writer guard alive for the program duration.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}
