use anyhow::{bail, Result};
use clap::Args;
use pixelforge_core::config::AppConfig;
use pixelforge_core::layout::compute_display_rect;

use crate::commands::{container_for_client, default_client, parse_size};
use crate::summary::print_layout;

#[derive(Args)]
pub struct LayoutArgs {
    /// Target size as WIDTHxHEIGHT
    pub target: String,

    /// Window client size as WIDTHxHEIGHT (sidebar included)
    #[arg(long)]
    pub client: Option<String>,

    /// Margin around the display rect (defaults to the config value)
    #[arg(long)]
    pub margin: Option<i32>,
}

pub fn run(args: &LayoutArgs, config: &AppConfig) -> Result<()> {
    let client = args.client.clone().unwrap_or_else(|| default_client(config));
    let container = container_for_client(&client, config)?;
    let (tw, th) = parse_size(&args.target)?;
    if tw == 0 || th == 0 {
        bail!("Target size must be non-zero, got {}", args.target);
    }
    let margin = args.margin.unwrap_or(config.margin);

    let display = compute_display_rect(&container, tw as i32, th as i32, margin);
    print_layout(&container, (tw, th), display);
    Ok(())
}
