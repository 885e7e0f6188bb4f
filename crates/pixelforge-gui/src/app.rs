use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use pixelforge_core::config::AppConfig;
use pixelforge_core::controller::{CanvasController, CanvasEvent, HostRequest};
use pixelforge_core::error::Result;
use pixelforge_core::image_slot::ImageSource;
use pixelforge_core::registry::{WindowHandle, WindowInstanceRegistry};
use pixelforge_core::render::RenderPlan;
use tracing::{debug, warn};

use crate::convert::slot_to_color_image;
use crate::messages::DialogResult;
use crate::panels;

/// Texture for the currently loaded image, tagged with the state revision
/// it was uploaded from.
pub struct ImageTexture {
    pub handle: egui::TextureHandle,
    pub revision: u64,
}

pub struct PixelForgeApp {
    pub config: AppConfig,
    pub registry: WindowInstanceRegistry<CanvasController>,
    /// Keeps the main window's controller alive; the registry only holds a
    /// weak reference.
    controller: Rc<RefCell<CanvasController>>,
    pub handle: WindowHandle,
    pub dialog_tx: mpsc::Sender<DialogResult>,
    pub dialog_rx: mpsc::Receiver<DialogResult>,
    pub dialog_open: bool,
    pub custom_width: String,
    pub custom_height: String,
    pub warning: Option<String>,
    pub texture: Option<ImageTexture>,
}

impl PixelForgeApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Result<Self> {
        let controller = Rc::new(RefCell::new(CanvasController::from_config(&config)?));
        let handle = WindowHandle(ctx.viewport_id().0.value());

        let mut registry = WindowInstanceRegistry::new();
        registry.register(handle, &controller)?;

        let (dialog_tx, dialog_rx) = mpsc::channel();

        Ok(Self {
            config,
            registry,
            controller,
            handle,
            dialog_tx,
            dialog_rx,
            dialog_open: false,
            custom_width: String::new(),
            custom_height: String::new(),
            warning: None,
            texture: None,
        })
    }

    /// Route `event` to the window's controller and carry out what it asks.
    /// Returns the render plan when the event was a paint.
    pub fn dispatch(&mut self, ctx: &egui::Context, event: CanvasEvent) -> Option<RenderPlan> {
        let Some(controller) = self.registry.lookup(self.handle) else {
            warn!(handle = %self.handle, "No controller registered for window");
            return None;
        };
        let requests = controller.borrow_mut().handle(event);

        let mut plan = None;
        for request in requests {
            match request {
                HostRequest::ShowWarning(message) => self.warning = Some(message),
                HostRequest::SetWindowTitle(title) => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
                }
                HostRequest::Invalidate(region) => {
                    debug!(%region, "Invalidate");
                    ctx.request_repaint();
                }
                HostRequest::RenderPrimitives(p) => plan = Some(p),
                HostRequest::ResizeWindow { width, height } => {
                    let size = egui::vec2(
                        width as f32 + self.config.sidebar_width as f32,
                        height as f32,
                    );
                    ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
                }
            }
        }
        plan
    }

    /// Spawn the open-image dialog on a helper thread.
    pub fn open_image_dialog(&mut self) {
        if self.dialog_open {
            return;
        }
        self.dialog_open = true;
        let tx = self.dialog_tx.clone();
        std::thread::spawn(move || {
            let picked = rfd::FileDialog::new()
                .add_filter("Image Files", pixelforge_core::consts::IMAGE_EXTENSIONS)
                .add_filter("All Files", &["*"])
                .pick_file();
            let _ = tx.send(DialogResult::ImagePicked(picked));
        });
    }

    /// Drain pending dialog results.
    fn poll_dialogs(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.dialog_rx.try_recv() {
            match result {
                DialogResult::ImagePicked(path) => {
                    self.dialog_open = false;
                    let source = path.map(ImageSource::Path);
                    self.dispatch(ctx, CanvasEvent::OpenImageResult(source));
                }
            }
        }
    }

    /// Keep the image texture in step with the controller's image slot.
    pub fn sync_texture(&mut self, ctx: &egui::Context) {
        let controller = self.controller.borrow();
        let state = controller.state();
        let revision = state.image_revision();
        if self.texture.as_ref().map(|t| t.revision) == Some(revision) {
            return;
        }
        let max_side = ctx.input(|i| i.max_texture_side);
        self.texture = state.image().map(|slot| {
            let image = slot_to_color_image(slot, max_side);
            if image.size != [slot.width() as usize, slot.height() as usize] {
                debug!(
                    width = slot.width(),
                    height = slot.height(),
                    max_side,
                    "Image downscaled to fit the texture limit"
                );
            }
            ImageTexture {
                handle: ctx.load_texture("canvas-image", image, egui::TextureOptions::LINEAR),
                revision,
            }
        });
    }
}

impl eframe::App for PixelForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_dialogs(ctx);
        if self.dialog_open {
            // Keep polling while the dialog thread is running.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        panels::sidebar::show(ctx, self);
        panels::canvas::show(ctx, self);
        panels::warning::show(ctx, self);
    }
}

impl Drop for PixelForgeApp {
    fn drop(&mut self) {
        self.registry.unregister(self.handle);
    }
}
