//! Aspect-fit geometry for the canvas.
//!
//! Everything here is a pure function of its arguments: the display rect is
//! recomputed from the container on every paint and never cached.

use crate::geometry::{ContainerRect, DisplayRect, Rect};

/// Compute the centered, aspect-preserving rect for a `target_w` x `target_h`
/// canvas inside `container`, keeping `margin` units free on the
/// constraining axis.
///
/// Returns `None` when the target has no area, which callers treat as
/// "show the placeholder message". A container too small to hold the margins
/// yields a zero-size rect at the container center.
pub fn compute_display_rect(
    container: &ContainerRect,
    target_w: i32,
    target_h: i32,
    margin: i32,
) -> Option<DisplayRect> {
    if target_w <= 0 || target_h <= 0 {
        return None;
    }

    let cw = container.width();
    let ch = container.height();
    let margin = margin.max(0).saturating_mul(2);
    let avail_w = cw.saturating_sub(margin);
    let avail_h = ch.saturating_sub(margin);

    if avail_w <= 0 || avail_h <= 0 {
        let (cx, cy) = container.center();
        return Some(Rect::new(cx, cy, cx, cy));
    }

    let container_ratio = cw as f64 / ch as f64;
    let target_ratio = target_w as f64 / target_h as f64;

    let (display_w, display_h) = if target_ratio > container_ratio {
        let w = avail_w;
        let h = (w as f64 / target_ratio).round() as i32;
        (w, h)
    } else {
        let h = avail_h;
        let w = (h as f64 * target_ratio).round() as i32;
        (w, h)
    };
    let display_w = display_w.clamp(0, cw);
    let display_h = display_h.clamp(0, ch);

    let left = container.left + (cw - display_w) / 2;
    let top = container.top + (ch - display_h) / 2;
    Some(Rect::from_origin_size(left, top, display_w, display_h))
}

/// One tile of the transparency checkerboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckerCell {
    pub rect: Rect,
    pub dark: bool,
}

/// Number of (columns, rows) needed to cover `rect` with `cell_size` tiles.
pub fn checker_grid_size(rect: &Rect, cell_size: i32) -> (i32, i32) {
    if rect.is_empty() || cell_size <= 0 {
        return (0, 0);
    }
    let cols = (rect.width() - 1) / cell_size + 1;
    let rows = (rect.height() - 1) / cell_size + 1;
    (cols, rows)
}

/// Tiles covering `rect`, row by row.
///
/// The grid is anchored at the rect's top-left corner so the pattern does not
/// shift when the rect moves. Cells on the right and bottom edges are clipped.
/// A cell is dark when `(col + row)` is odd.
pub fn checkerboard_cells(rect: Rect, cell_size: i32) -> impl Iterator<Item = CheckerCell> {
    let (cols, rows) = checker_grid_size(&rect, cell_size);
    (0..rows).flat_map(move |row| {
        (0..cols).map(move |col| {
            let left = rect.left + col * cell_size;
            let top = rect.top + row * cell_size;
            CheckerCell {
                rect: Rect::new(
                    left,
                    top,
                    left.saturating_add(cell_size).min(rect.right),
                    top.saturating_add(cell_size).min(rect.bottom),
                ),
                dark: (col + row) % 2 == 1,
            }
        })
    })
}

/// Whether the pixel at `(x, y)` falls on a dark tile of a checkerboard
/// anchored at `origin`.
pub fn is_dark_checker_pixel(origin: (i32, i32), cell_size: i32, x: i32, y: i32) -> bool {
    if cell_size <= 0 {
        return false;
    }
    let cell = i64::from(cell_size);
    let col = (i64::from(x) - i64::from(origin.0)).div_euclid(cell);
    let row = (i64::from(y) - i64::from(origin.1)).div_euclid(cell);
    (col + row).rem_euclid(2) == 1
}
