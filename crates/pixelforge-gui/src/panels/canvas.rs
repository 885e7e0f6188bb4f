use pixelforge_core::controller::CanvasEvent;
use pixelforge_core::layout::checkerboard_cells;
use pixelforge_core::render::{DrawPrimitive, RenderPlan};

use crate::app::PixelForgeApp;
use crate::convert::{color32, from_egui_rect, to_egui_rect};

const PLACEHOLDER_FONT_SIZE: f32 = 18.0;
const LABEL_FONT_SIZE: f32 = 11.0;
const LABEL_TEXT_INSET: f32 = 4.0;

pub fn show(ctx: &egui::Context, app: &mut PixelForgeApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let container = from_egui_rect(ui.max_rect());
            app.dispatch(ctx, CanvasEvent::Resize(container));
            app.sync_texture(ctx);

            if let Some(plan) = app.dispatch(ctx, CanvasEvent::Paint) {
                let texture = app.texture.as_ref().map(|t| t.handle.id());
                paint_plan(ui.painter(), &plan, texture);
            }
        });
}

fn paint_plan(painter: &egui::Painter, plan: &RenderPlan, texture: Option<egui::TextureId>) {
    for primitive in &plan.primitives {
        match primitive {
            DrawPrimitive::FillRect { rect, color } => {
                painter.rect_filled(to_egui_rect(rect), 0.0, color32(*color));
            }
            DrawPrimitive::Text { rect, text, color } => {
                painter.text(
                    to_egui_rect(rect).center(),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(PLACEHOLDER_FONT_SIZE),
                    color32(*color),
                );
            }
            DrawPrimitive::Checkerboard {
                rect,
                cell_size,
                light,
                dark,
            } => {
                painter.rect_filled(to_egui_rect(rect), 0.0, color32(*light));
                let dark = color32(*dark);
                for cell in checkerboard_cells(*rect, *cell_size).filter(|c| c.dark) {
                    painter.rect_filled(to_egui_rect(&cell.rect), 0.0, dark);
                }
            }
            DrawPrimitive::Image { rect } => {
                if let Some(texture_id) = texture {
                    draw_image(painter, texture_id, to_egui_rect(rect));
                }
            }
            DrawPrimitive::StrokeRect { rect, color } => {
                painter.rect_stroke(
                    to_egui_rect(rect),
                    0.0,
                    egui::Stroke::new(1.0, color32(*color)),
                    egui::StrokeKind::Inside,
                );
            }
            DrawPrimitive::Label {
                rect,
                text,
                color,
                background,
            } => {
                let r = to_egui_rect(rect);
                painter.rect_filled(r, 0.0, color32(*background));
                painter.text(
                    r.left_center() + egui::vec2(LABEL_TEXT_INSET, 0.0),
                    egui::Align2::LEFT_CENTER,
                    text,
                    egui::FontId::monospace(LABEL_FONT_SIZE),
                    color32(*color),
                );
            }
        }
    }
}

fn draw_image(painter: &egui::Painter, texture_id: egui::TextureId, img_rect: egui::Rect) {
    painter.image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}
