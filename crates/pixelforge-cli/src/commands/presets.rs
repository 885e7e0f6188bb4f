use anyhow::Result;
use clap::Args;
use pixelforge_core::config::AppConfig;

use crate::summary::print_presets;

#[derive(Args)]
pub struct PresetsArgs {
    /// Print `WIDTHxHEIGHT` per line instead of the table
    #[arg(long)]
    pub plain: bool,
}

pub fn run(args: &PresetsArgs, config: &AppConfig) -> Result<()> {
    let catalog = config.catalog()?;
    if args.plain {
        for preset in catalog.presets() {
            println!("{}x{}", preset.width, preset.height);
        }
    } else {
        print_presets(&catalog);
    }
    Ok(())
}
