//! Per-window event handling.
//!
//! The host shell turns its native events into [`CanvasEvent`]s, resolves
//! the owning controller through the window registry, and executes the
//! [`HostRequest`]s that come back.

use tracing::{debug, warn};

use crate::catalog::ResolutionCatalog;
use crate::config::AppConfig;
use crate::error::{PixelForgeError, Result};
use crate::geometry::{ContainerRect, Rect};
use crate::image_slot::{ImageCrateDecoder, ImageDecoder, ImageSource};
use crate::render::{build_render_plan, RenderPlan, RenderStyle};
use crate::state::{CanvasState, TargetSize};

/// Inbound event from the host shell.
#[derive(Clone, Debug)]
pub enum CanvasEvent {
    /// A preset button was clicked.
    SelectPreset(usize),
    /// The custom-size Apply button was clicked with the raw field texts.
    ApplyCustomSize { width: String, height: String },
    /// The open-image dialog closed; `None` when the user cancelled.
    OpenImageResult(Option<ImageSource>),
    /// The drawable area changed.
    Resize(ContainerRect),
    /// The host is about to draw the canvas.
    Paint,
}

impl CanvasEvent {
    /// Short name for logging; avoids dumping image bytes.
    pub fn kind(&self) -> &'static str {
        match self {
            CanvasEvent::SelectPreset(_) => "select_preset",
            CanvasEvent::ApplyCustomSize { .. } => "apply_custom_size",
            CanvasEvent::OpenImageResult(_) => "open_image_result",
            CanvasEvent::Resize(_) => "resize",
            CanvasEvent::Paint => "paint",
        }
    }
}

/// Outbound request for the host shell to carry out.
#[derive(Clone, Debug, PartialEq)]
pub enum HostRequest {
    ShowWarning(String),
    SetWindowTitle(String),
    /// Redraw the given region.
    Invalidate(Rect),
    RenderPrimitives(RenderPlan),
    /// Make the canvas `width` x `height`; only sent when the controller is
    /// configured to follow the target size with the window.
    ResizeWindow { width: u32, height: u32 },
}

/// Owns one window's canvas state and reacts to its events.
pub struct CanvasController {
    title: String,
    catalog: ResolutionCatalog,
    style: RenderStyle,
    state: CanvasState,
    container: ContainerRect,
    decoder: Box<dyn ImageDecoder>,
    resize_window_to_target: bool,
}

impl CanvasController {
    pub fn new(title: impl Into<String>, catalog: ResolutionCatalog, style: RenderStyle) -> Self {
        Self {
            title: title.into(),
            catalog,
            style,
            state: CanvasState::new(),
            container: ContainerRect::default(),
            decoder: Box::new(ImageCrateDecoder),
            resize_window_to_target: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let mut controller = Self::new(
            config.title.clone(),
            config.catalog()?,
            config.render_style(),
        );
        controller.state = CanvasState::with_failure_policy(config.on_failed_load);
        controller.resize_window_to_target = config.resize_window_to_target;
        Ok(controller)
    }

    /// Replace the image decoder used for `OpenImageResult` events.
    pub fn with_decoder(mut self, decoder: Box<dyn ImageDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn catalog(&self) -> &ResolutionCatalog {
        &self.catalog
    }

    pub fn container(&self) -> ContainerRect {
        self.container
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Process one event to completion and return what the host must do.
    pub fn handle(&mut self, event: CanvasEvent) -> Vec<HostRequest> {
        debug!(event = event.kind(), "Canvas event");
        match event {
            CanvasEvent::SelectPreset(index) => {
                let result = self.state.select_preset(&self.catalog, index);
                self.after_size_change(result)
            }
            CanvasEvent::ApplyCustomSize { width, height } => {
                let result = self.state.apply_custom_size(&width, &height);
                self.after_size_change(result)
            }
            CanvasEvent::OpenImageResult(None) => {
                debug!("Open image cancelled");
                Vec::new()
            }
            CanvasEvent::OpenImageResult(Some(source)) => self.open_image(&source),
            CanvasEvent::Resize(container) => {
                if container == self.container {
                    return Vec::new();
                }
                self.container = container;
                vec![HostRequest::Invalidate(container)]
            }
            CanvasEvent::Paint => vec![HostRequest::RenderPrimitives(self.render_plan())],
        }
    }

    /// Plan for the current container and state.
    pub fn render_plan(&self) -> RenderPlan {
        build_render_plan(&self.container, &self.state, &self.style)
    }

    /// Window title for a target size, with the image name when one is loaded.
    pub fn format_title(&self, size: TargetSize, image_name: Option<&str>) -> String {
        match image_name {
            Some(name) => format!("{} - {} ({})", self.title, name, size),
            None => format!("{} ({})", self.title, size),
        }
    }

    fn after_size_change(&mut self, result: Result<TargetSize>) -> Vec<HostRequest> {
        match result {
            Ok(size) => {
                let mut requests = vec![HostRequest::SetWindowTitle(self.format_title(size, None))];
                if self.resize_window_to_target {
                    requests.push(HostRequest::ResizeWindow {
                        width: size.width,
                        height: size.height,
                    });
                }
                requests.push(HostRequest::Invalidate(self.container));
                requests
            }
            Err(e) => vec![warning(e)],
        }
    }

    fn open_image(&mut self, source: &ImageSource) -> Vec<HostRequest> {
        let revision = self.state.image_revision();
        match self.state.load_image(source, self.decoder.as_ref()) {
            Ok(size) => {
                let name = self.state.image().and_then(|slot| slot.name());
                vec![
                    HostRequest::SetWindowTitle(self.format_title(size, name)),
                    HostRequest::Invalidate(self.container),
                ]
            }
            Err(e) => {
                let mut requests = vec![warning(e)];
                if self.state.image_revision() != revision {
                    requests.push(HostRequest::Invalidate(self.container));
                }
                requests
            }
        }
    }
}

fn warning(error: PixelForgeError) -> HostRequest {
    warn!(error = %error, "Rejected canvas input");
    HostRequest::ShowWarning(error.to_string())
}
