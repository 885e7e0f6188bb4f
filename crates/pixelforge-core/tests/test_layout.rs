//! Aspect-fit invariants of the layout engine.
//!
//! 1. The display rect lies inside the container.
//! 2. Its aspect ratio matches the target within one unit of rounding.
//! 3. It is centered within +/-1 unit on both axes.
//! 4. One side fills the container minus the margins.
//! 5. Same inputs give the same output.

use approx::assert_relative_eq;
use pixelforge_core::consts::DEFAULT_MARGIN;
use pixelforge_core::geometry::Rect;
use pixelforge_core::layout::{checker_grid_size, checkerboard_cells, compute_display_rect};
use proptest::prelude::*;

fn container_strategy() -> impl Strategy<Value = Rect> {
    (-500i32..=500, -500i32..=500, 0i32..=3000, 0i32..=3000)
        .prop_map(|(x, y, w, h)| Rect::from_origin_size(x, y, w, h))
}

fn target_strategy() -> impl Strategy<Value = (i32, i32)> {
    (1i32..=10_000, 1i32..=10_000)
}

proptest! {
    #[test]
    fn display_rect_inside_container(c in container_strategy(), (tw, th) in target_strategy()) {
        let r = compute_display_rect(&c, tw, th, DEFAULT_MARGIN).unwrap();
        prop_assert!(c.contains_rect(&r), "{r:?} escapes {c:?}");
        prop_assert!(r.width() >= 0 && r.height() >= 0, "negative area: {r:?}");
    }

    #[test]
    fn display_rect_keeps_aspect(c in container_strategy(), (tw, th) in target_strategy()) {
        let r = compute_display_rect(&c, tw, th, DEFAULT_MARGIN).unwrap();
        if !r.is_empty() {
            // |dw/dh - tw/th| scaled to integers: the rounded side is off by at most 0.5.
            let err = (r.width() as i64 * th as i64 - r.height() as i64 * tw as i64).abs();
            prop_assert!(
                2 * err <= tw.max(th) as i64,
                "aspect drift: {}x{} for target {tw}x{th}", r.width(), r.height()
            );
        }
    }

    #[test]
    fn display_rect_is_centered(c in container_strategy(), (tw, th) in target_strategy()) {
        let r = compute_display_rect(&c, tw, th, DEFAULT_MARGIN).unwrap();
        let dx = (r.left - c.left) - (c.right - r.right);
        let dy = (r.top - c.top) - (c.bottom - r.bottom);
        prop_assert!(dx.abs() <= 1, "horizontal offset {dx} for {r:?} in {c:?}");
        prop_assert!(dy.abs() <= 1, "vertical offset {dy} for {r:?} in {c:?}");
    }

    #[test]
    fn one_side_fills_available_space(c in container_strategy(), (tw, th) in target_strategy()) {
        let avail_w = c.width() - 2 * DEFAULT_MARGIN;
        let avail_h = c.height() - 2 * DEFAULT_MARGIN;
        prop_assume!(avail_w > 0 && avail_h > 0);
        let r = compute_display_rect(&c, tw, th, DEFAULT_MARGIN).unwrap();
        prop_assert!(r.width() == avail_w || r.height() == avail_h, "{r:?} in {c:?}");
    }

    #[test]
    fn layout_is_pure(
        c in container_strategy(),
        (tw, th) in target_strategy(),
        margin in 0i32..=50,
    ) {
        prop_assert_eq!(
            compute_display_rect(&c, tw, th, margin),
            compute_display_rect(&c, tw, th, margin)
        );
    }

    #[test]
    fn checker_cells_tile_exactly(
        (x, y, w, h) in (-100i32..=100, -100i32..=100, 0i32..=300, 0i32..=300),
        cell in 1i32..=40,
    ) {
        let rect = Rect::from_origin_size(x, y, w, h);
        let area: i64 = checkerboard_cells(rect, cell).map(|c| c.rect.area()).sum();
        prop_assert_eq!(area, rect.area());
        for c in checkerboard_cells(rect, cell) {
            prop_assert!(rect.contains_rect(&c.rect));
        }
    }
}

#[test]
fn test_zero_target_means_placeholder() {
    let c = Rect::new(0, 0, 800, 600);
    assert_eq!(compute_display_rect(&c, 0, 600, DEFAULT_MARGIN), None);
    assert_eq!(compute_display_rect(&c, 800, 0, DEFAULT_MARGIN), None);
    assert_eq!(compute_display_rect(&c, -1, 600, DEFAULT_MARGIN), None);
}

#[test]
fn test_square_container_square_target() {
    let c = Rect::new(0, 0, 500, 500);
    let r = compute_display_rect(&c, 1000, 1000, DEFAULT_MARGIN).unwrap();
    assert_eq!(r, Rect::new(20, 20, 480, 480));
}

#[test]
fn test_full_hd_in_default_window() {
    let c = Rect::new(190, 0, 1280, 750);
    let r = compute_display_rect(&c, 1920, 1080, DEFAULT_MARGIN).unwrap();
    // 1090x750 container is narrower than 16:9, so width constrains.
    assert_eq!(r.width(), 1050);
    assert_eq!(r.height(), 591);
    assert_eq!(r.left, 210);
    assert_eq!(r.top, 79);
}

#[test]
fn test_portrait_target_is_height_constrained() {
    let c = Rect::new(190, 0, 1280, 750);
    let r = compute_display_rect(&c, 900, 1200, DEFAULT_MARGIN).unwrap();
    assert_eq!(r.height(), 710);
    assert_eq!(r.width(), 533);
    assert_eq!(r.top, 20);
}

#[test]
fn test_preset_aspect_ratios_preserved() {
    let c = Rect::new(190, 0, 1280, 750);
    for (tw, th) in [(1280, 720), (2560, 1440), (3840, 2160), (800, 600)] {
        let r = compute_display_rect(&c, tw, th, DEFAULT_MARGIN).unwrap();
        let shown = r.width() as f64 / r.height() as f64;
        assert_relative_eq!(shown, tw as f64 / th as f64, max_relative = 0.005);
    }
}

#[test]
fn test_container_smaller_than_margins_collapses() {
    let c = Rect::new(190, 0, 220, 600);
    let r = compute_display_rect(&c, 1920, 1080, DEFAULT_MARGIN).unwrap();
    assert!(r.is_empty());
    assert_eq!(r.width(), 0);
    assert_eq!(r.height(), 0);
    assert_eq!((r.left, r.top), c.center());
}

#[test]
fn test_huge_margin_collapses_instead_of_overflowing() {
    let c = Rect::new(190, 0, 1280, 750);
    let r = compute_display_rect(&c, 1920, 1080, 1_500_000_000).unwrap();
    assert!(r.is_empty());
    let r = compute_display_rect(&c, 1920, 1080, i32::MAX).unwrap();
    assert_eq!((r.left, r.top), c.center());
}

#[test]
fn test_huge_checker_cell_is_one_clipped_tile() {
    let rect = Rect::new(210, 79, 1260, 670);
    assert_eq!(checker_grid_size(&rect, 2_147_483_000), (1, 1));
    let cells: Vec<_> = checkerboard_cells(rect, i32::MAX).collect();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].rect, rect);
}

#[test]
fn test_zero_height_container_collapses() {
    let c = Rect::new(0, 0, 800, 0);
    let r = compute_display_rect(&c, 1920, 1080, 0).unwrap();
    assert!(r.is_empty());
}

#[test]
fn test_layout_follows_container_resize() {
    let narrow = compute_display_rect(&Rect::new(0, 0, 600, 800), 1600, 900, 20).unwrap();
    let wide = compute_display_rect(&Rect::new(0, 0, 2000, 800), 1600, 900, 20).unwrap();
    assert_eq!(narrow.width(), 560);
    assert_eq!(wide.height(), 760);
}

#[test]
fn test_checker_grid_size_rounds_up() {
    assert_eq!(checker_grid_size(&Rect::new(0, 0, 25, 10), 10), (3, 1));
    assert_eq!(checker_grid_size(&Rect::new(0, 0, 20, 20), 10), (2, 2));
    assert_eq!(checker_grid_size(&Rect::new(0, 0, 20, 20), 0), (0, 0));
}

#[test]
fn test_checker_pattern_anchored_at_top_left() {
    let a: Vec<bool> = checkerboard_cells(Rect::new(0, 0, 40, 20), 10)
        .map(|c| c.dark)
        .collect();
    let b: Vec<bool> = checkerboard_cells(Rect::new(7, 13, 47, 33), 10)
        .map(|c| c.dark)
        .collect();
    assert_eq!(a, b);
    assert_eq!(a, vec![false, true, false, true, true, false, true, false]);
}
