use crate::app::PixelForgeApp;

pub fn show(ctx: &egui::Context, app: &mut PixelForgeApp) {
    let Some(message) = app.warning.clone() else {
        return;
    };

    egui::Window::new("Warning")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    app.warning = None;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        app.warning = None;
    }
}
