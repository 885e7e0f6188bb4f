use image::imageops::FilterType;
use pixelforge_core::geometry::{Rect, Rgb};
use pixelforge_core::image_slot::ImageSlot;

/// Size with the same aspect ratio whose longer side is at most `max_side`.
/// Sizes that already fit are returned unchanged.
pub fn texture_size(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let max_side = max_side.max(1);
    let longest = width.max(height);
    if longest <= max_side {
        return (width, height);
    }
    let scale = max_side as f64 / longest as f64;
    let fit = |v: u32| ((v as f64 * scale).round() as u32).clamp(1, max_side);
    (fit(width), fit(height))
}

/// Convert a loaded image slot to an egui ColorImage no larger than the
/// GPU's `max_side` texture limit.
pub fn slot_to_color_image(slot: &ImageSlot, max_side: usize) -> egui::ColorImage {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX);
    let (w, h) = texture_size(slot.width(), slot.height(), max_side);
    if (w, h) == (slot.width(), slot.height()) {
        let size = [w as usize, h as usize];
        return egui::ColorImage::from_rgba_unmultiplied(size, slot.pixels().as_raw());
    }
    let scaled = image::imageops::resize(slot.pixels(), w, h, FilterType::Triangle);
    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], scaled.as_raw())
}

pub fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Canvas rect (whole points) to egui.
pub fn to_egui_rect(rect: &Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        egui::pos2(rect.left as f32, rect.top as f32),
        egui::pos2(rect.right as f32, rect.bottom as f32),
    )
}

/// egui rect to canvas coordinates, rounded to whole points.
pub fn from_egui_rect(rect: egui::Rect) -> Rect {
    Rect::new(
        rect.min.x.round() as i32,
        rect.min.y.round() as i32,
        rect.max.x.round() as i32,
        rect.max.y.round() as i32,
    )
}
