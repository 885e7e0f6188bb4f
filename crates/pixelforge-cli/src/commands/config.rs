use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pixelforge_core::config::AppConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the default config to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    let text = AppConfig::default().to_toml_string()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Saved default config to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
