use pixelforge_core::controller::CanvasEvent;

use crate::app::PixelForgeApp;
use crate::panels::section_header;

const SIDEBAR_FILL: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);
const SIDEBAR_PADDING: f32 = 10.0;

pub fn show(ctx: &egui::Context, app: &mut PixelForgeApp) {
    egui::SidePanel::left("sidebar")
        .exact_width(app.config.sidebar_width as f32)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(SIDEBAR_FILL)
                .inner_margin(SIDEBAR_PADDING),
        )
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(&app.config.title)
                    .size(18.0)
                    .strong()
                    .color(egui::Color32::from_gray(40)),
            );
            ui.add_space(8.0);

            preset_buttons(ctx, ui, app);
            custom_size(ctx, ui, app);

            section_header(ui, "Image");
            let width = ui.available_width();
            let open = ui.add_enabled(
                !app.dialog_open,
                egui::Button::new("Open Image...").min_size(egui::vec2(width, 28.0)),
            );
            if open.clicked() {
                app.open_image_dialog();
            }
        });
}

fn preset_buttons(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut PixelForgeApp) {
    section_header(ui, "Resolution");

    let labels: Vec<String> = match app.registry.lookup(app.handle) {
        Some(controller) => controller
            .borrow()
            .catalog()
            .presets()
            .iter()
            .map(|p| p.label.clone())
            .collect(),
        None => Vec::new(),
    };

    let width = ui.available_width();
    for (index, label) in labels.iter().enumerate() {
        let button = egui::Button::new(label.as_str()).min_size(egui::vec2(width, 28.0));
        if ui.add(button).clicked() {
            app.dispatch(ctx, CanvasEvent::SelectPreset(index));
        }
    }
}

fn custom_size(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut PixelForgeApp) {
    section_header(ui, "Custom");

    let field_width = (ui.available_width() - 20.0) / 2.0;
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.custom_width)
                .hint_text("Width")
                .desired_width(field_width),
        );
        ui.label("×");
        ui.add(
            egui::TextEdit::singleline(&mut app.custom_height)
                .hint_text("Height")
                .desired_width(field_width),
        );
    });

    let width = ui.available_width();
    if ui
        .add(egui::Button::new("Apply").min_size(egui::vec2(width, 24.0)))
        .clicked()
    {
        let event = CanvasEvent::ApplyCustomSize {
            width: app.custom_width.clone(),
            height: app.custom_height.clone(),
        };
        app.dispatch(ctx, event);
    }
}
