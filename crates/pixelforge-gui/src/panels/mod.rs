pub mod canvas;
pub mod sidebar;
pub mod warning;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str) {
    ui.add_space(8.0);
    ui.strong(label);
    ui.add_space(4.0);
}
