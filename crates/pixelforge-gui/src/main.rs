mod app;
mod convert;
mod messages;
mod panels;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pixelforge_core::config::AppConfig;

#[derive(Parser)]
#[command(name = "pixelforge-gui", about = "Resolution canvas preview")]
#[command(version)]
struct Cli {
    /// TOML config file (presets, margins, title)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load config")?;

    let min_width = config.sidebar_width as f32 + 200.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.initial_width as f32, config.initial_height as f32])
            .with_min_inner_size([min_width, 300.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "PixelForge",
        options,
        Box::new(move |cc| {
            let app = app::PixelForgeApp::new(&cc.egui_ctx, config)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
