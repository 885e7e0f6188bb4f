//! Software renderer for render plans.
//!
//! Executes a [`RenderPlan`] into an RGBA buffer covering the container. Text
//! needs a font, so `Text` primitives and label glyphs are not drawn; label
//! backgrounds are.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::Result;
use crate::geometry::{ContainerRect, Rect};
use crate::image_slot::ImageSlot;
use crate::layout::is_dark_checker_pixel;
use crate::render::{DrawPrimitive, RenderPlan};

/// Draw `plan` into a buffer the size of `container`.
///
/// Buffer pixel `(0, 0)` corresponds to `(container.left, container.top)`.
/// `image` is what `Image` primitives blit; they are skipped without one.
pub fn rasterize(
    plan: &RenderPlan,
    container: &ContainerRect,
    image: Option<&ImageSlot>,
) -> RgbaImage {
    let width = container.width().max(0) as u32;
    let height = container.height().max(0) as u32;
    let mut buffer = RgbaImage::new(width, height);
    let origin = (container.left, container.top);

    for primitive in &plan.primitives {
        match primitive {
            DrawPrimitive::FillRect { rect, color } => {
                let px = color.to_rgba();
                paint_region(&mut buffer, origin, rect, |_, _| px);
            }
            DrawPrimitive::Checkerboard {
                rect,
                cell_size,
                light,
                dark,
            } => {
                let anchor = (rect.left, rect.top);
                let (light, dark) = (light.to_rgba(), dark.to_rgba());
                paint_region(&mut buffer, origin, rect, |x, y| {
                    if is_dark_checker_pixel(anchor, *cell_size, x, y) {
                        dark
                    } else {
                        light
                    }
                });
            }
            DrawPrimitive::Image { rect } => {
                if let Some(slot) = image {
                    blit(&mut buffer, origin, rect, slot);
                }
            }
            DrawPrimitive::StrokeRect { rect, color } => {
                let px = color.to_rgba();
                for edge in outline(rect) {
                    paint_region(&mut buffer, origin, &edge, |_, _| px);
                }
            }
            DrawPrimitive::Label { rect, background, .. } => {
                let px = background.to_rgba();
                paint_region(&mut buffer, origin, rect, |_, _| px);
            }
            DrawPrimitive::Text { .. } => {}
        }
    }

    buffer
}

/// Save a rasterized canvas as PNG.
pub fn save_png(buffer: &RgbaImage, path: &Path) -> Result<()> {
    buffer.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn blit(buffer: &mut RgbaImage, origin: (i32, i32), rect: &Rect, slot: &ImageSlot) {
    if rect.is_empty() {
        return;
    }
    let (dst_w, dst_h) = (rect.width() as u32, rect.height() as u32);
    let (left, top) = (rect.left, rect.top);
    paint_region(buffer, origin, rect, |x, y| {
        let src = slot.sample_scaled((x - left) as u32, (y - top) as u32, dst_w, dst_h);
        blend_over_opaque(src)
    });
}

// Output is opaque: image alpha is flattened against mid gray.
fn blend_over_opaque(px: [u8; 4]) -> [u8; 4] {
    let a = px[3] as u32;
    let mix = |c: u8| ((c as u32 * a + 128 * (255 - a)) / 255) as u8;
    [mix(px[0]), mix(px[1]), mix(px[2]), 255]
}

fn outline(rect: &Rect) -> [Rect; 4] {
    [
        Rect::new(rect.left, rect.top, rect.right, rect.top + 1),
        Rect::new(rect.left, rect.bottom - 1, rect.right, rect.bottom),
        Rect::new(rect.left, rect.top, rect.left + 1, rect.bottom),
        Rect::new(rect.right - 1, rect.top, rect.right, rect.bottom),
    ]
}

/// Overwrite every pixel of `rect` (canvas coordinates) with `shade(x, y)`,
/// clipped to the buffer. Large regions are painted row-parallel.
fn paint_region<F>(buffer: &mut RgbaImage, origin: (i32, i32), rect: &Rect, shade: F)
where
    F: Fn(i32, i32) -> [u8; 4] + Sync,
{
    let bounds = Rect::from_origin_size(
        origin.0,
        origin.1,
        buffer.width() as i32,
        buffer.height() as i32,
    );
    let Some(clip) = rect.intersection(&bounds) else {
        return;
    };

    let stride = buffer.width() as usize * 4;
    let x0 = (clip.left - origin.0) as usize;
    let x1 = (clip.right - origin.0) as usize;
    let y0 = (clip.top - origin.1) as usize;
    let y1 = (clip.bottom - origin.1) as usize;

    let data: &mut [u8] = &mut *buffer;
    let rows = &mut data[y0 * stride..y1 * stride];
    let paint_row = |(i, row): (usize, &mut [u8])| {
        let y = clip.top + i as i32;
        for x in x0..x1 {
            let px = shade(origin.0 + x as i32, y);
            row[x * 4..x * 4 + 4].copy_from_slice(&px);
        }
    };

    if clip.area() as usize >= PARALLEL_PIXEL_THRESHOLD {
        rows.par_chunks_mut(stride).enumerate().for_each(paint_row);
    } else {
        rows.chunks_mut(stride).enumerate().for_each(paint_row);
    }
}
