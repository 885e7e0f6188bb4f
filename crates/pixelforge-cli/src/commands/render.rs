use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use pixelforge_core::config::AppConfig;
use pixelforge_core::controller::{CanvasController, CanvasEvent, HostRequest};
use pixelforge_core::image_slot::ImageSource;
use pixelforge_core::raster::{rasterize, save_png};
use tracing::{debug, info};

use crate::commands::{container_for_client, default_client, split_size};
use crate::summary::print_render_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Output PNG path
    #[arg(short, long, default_value = "canvas.png")]
    pub output: PathBuf,

    /// Window client size as WIDTHxHEIGHT (sidebar included)
    #[arg(long)]
    pub client: Option<String>,

    /// Select a preset by index (see `pixelforge presets`)
    #[arg(long, conflicts_with_all = ["size", "image"])]
    pub preset: Option<usize>,

    /// Custom target size as WIDTHxHEIGHT
    #[arg(long, conflicts_with = "image")]
    pub size: Option<String>,

    /// Open an image and size the canvas to it
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl RenderArgs {
    fn selection_event(&self) -> Result<Option<CanvasEvent>> {
        if let Some(index) = self.preset {
            return Ok(Some(CanvasEvent::SelectPreset(index)));
        }
        if let Some(size) = &self.size {
            let (width, height) = split_size(size)?;
            return Ok(Some(CanvasEvent::ApplyCustomSize { width, height }));
        }
        Ok(self
            .image
            .as_ref()
            .map(|path| CanvasEvent::OpenImageResult(Some(ImageSource::Path(path.clone())))))
    }
}

fn dispatch(controller: &mut CanvasController, event: CanvasEvent) -> Result<Vec<HostRequest>> {
    let requests = controller.handle(event);
    for request in &requests {
        match request {
            HostRequest::ShowWarning(message) => bail!("{message}"),
            HostRequest::SetWindowTitle(title) => info!(title = %title, "Title"),
            other => debug!(?other, "Ignoring host request"),
        }
    }
    Ok(requests)
}

pub fn run(args: &RenderArgs, config: &AppConfig) -> Result<()> {
    let client = args.client.clone().unwrap_or_else(|| default_client(config));
    let container = container_for_client(&client, config)?;
    if container.is_empty() {
        bail!("Client size {client} leaves no room beside the sidebar");
    }

    let mut controller = CanvasController::from_config(config)?;
    dispatch(&mut controller, CanvasEvent::Resize(container))?;
    if let Some(event) = args.selection_event()? {
        dispatch(&mut controller, event)?;
    }

    let requests = dispatch(&mut controller, CanvasEvent::Paint)?;
    let Some(plan) = requests.into_iter().find_map(|r| match r {
        HostRequest::RenderPrimitives(plan) => Some(plan),
        _ => None,
    }) else {
        bail!("Controller produced no render plan");
    };

    print_render_summary(controller.state(), &container, plan.display_rect, &args.output);

    let buffer = rasterize(&plan, &container, controller.state().image());
    save_png(&buffer, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());
    Ok(())
}
