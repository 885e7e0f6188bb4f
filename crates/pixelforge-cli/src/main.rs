mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pixelforge_core::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pixelforge", about = "Resolution canvas preview tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config file (presets, margins, title)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the resolution presets
    Presets(commands::presets::PresetsArgs),
    /// Print the aspect-fit display rect for a window and target size
    Layout(commands::layout::LayoutArgs),
    /// Render the canvas to a PNG file
    Render(commands::render::RenderArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config =
        AppConfig::load_or_default(cli.config.as_deref()).with_context(|| match &cli.config {
            Some(path) => format!("Failed to load config from {}", path.display()),
            None => "Failed to build default config".to_string(),
        })?;

    match &cli.command {
        Commands::Presets(args) => commands::presets::run(args, &config),
        Commands::Layout(args) => commands::layout::run(args, &config),
        Commands::Render(args) => commands::render::run(args, &config),
        Commands::Config(args) => commands::config::run(args),
    }
}
