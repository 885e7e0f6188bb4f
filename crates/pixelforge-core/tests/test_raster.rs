mod common;

use pixelforge_core::catalog::ResolutionCatalog;
use pixelforge_core::geometry::{Rect, Rgb};
use pixelforge_core::image_slot::ImageCrateDecoder;
use pixelforge_core::raster::{rasterize, save_png};
use pixelforge_core::render::{build_render_plan, RenderStyle};
use pixelforge_core::state::CanvasState;

use common::{default_container, png_source, IMAGE_COLOR};

fn pixel_at(img: &image::RgbaImage, container: &Rect, x: i32, y: i32) -> [u8; 4] {
    img.get_pixel((x - container.left) as u32, (y - container.top) as u32).0
}

#[test]
fn test_buffer_matches_container_size() {
    let container = default_container();
    let plan = build_render_plan(&container, &CanvasState::new(), &RenderStyle::default());
    let img = rasterize(&plan, &container, None);
    assert_eq!(img.dimensions(), (1090, 750));
}

#[test]
fn test_placeholder_is_plain_background() {
    let container = Rect::new(0, 0, 64, 48);
    let plan = build_render_plan(&container, &CanvasState::new(), &RenderStyle::default());
    let img = rasterize(&plan, &container, None);
    assert!(img.pixels().all(|p| p.0 == Rgb::WHITE.to_rgba()));
}

#[test]
fn test_checkerboard_and_border() {
    let container = default_container();
    let mut state = CanvasState::new();
    state.select_preset(&ResolutionCatalog::default(), 0).unwrap();
    let style = RenderStyle::default();
    let plan = build_render_plan(&container, &state, &style);
    let img = rasterize(&plan, &container, None);
    let display = plan.display_rect.unwrap();
    let (cx, cy) = display.center();

    // Margin stays background.
    assert_eq!(pixel_at(&img, &container, container.left + 5, cy), Rgb::WHITE.to_rgba());

    // Border on the left edge, away from the label.
    assert_eq!(pixel_at(&img, &container, display.left, cy), style.border.to_rgba());

    // Interior is checkered in the two tones.
    let light = style.checker_light.to_rgba();
    let dark = style.checker_dark.to_rgba();
    let a = pixel_at(&img, &container, cx, cy);
    let b = pixel_at(&img, &container, cx + style.cell_size, cy);
    assert!(a == light || a == dark, "got {a:?}");
    assert_ne!(a, b);

    // Tiles are counted from the display rect corner.
    let rows_down = (display.height() - 2) / style.cell_size;
    let expected = if rows_down % 2 == 0 { light } else { dark };
    assert_eq!(
        pixel_at(&img, &container, display.left + 1, display.bottom - 2),
        expected
    );
}

#[test]
fn test_image_is_blitted_into_display_rect() {
    let container = default_container();
    let mut state = CanvasState::new();
    state
        .load_image(&png_source(1200, 900, "photo.png"), &ImageCrateDecoder)
        .unwrap();
    let plan = build_render_plan(&container, &state, &RenderStyle::default());
    let img = rasterize(&plan, &container, state.image());
    let (cx, cy) = plan.display_rect.unwrap().center();

    assert_eq!(pixel_at(&img, &container, cx, cy), IMAGE_COLOR);
}

#[test]
fn test_image_primitive_without_slot_is_skipped() {
    let container = default_container();
    let mut state = CanvasState::new();
    state
        .load_image(&png_source(40, 30, "photo.png"), &ImageCrateDecoder)
        .unwrap();
    let plan = build_render_plan(&container, &state, &RenderStyle::default());
    let img = rasterize(&plan, &container, None);
    let (cx, cy) = plan.display_rect.unwrap().center();
    assert_ne!(pixel_at(&img, &container, cx, cy), IMAGE_COLOR);
}

#[test]
fn test_save_png_roundtrip() {
    let container = Rect::new(0, 0, 320, 200);
    let mut state = CanvasState::new();
    state.apply_custom_size("1600", "900").unwrap();
    let plan = build_render_plan(&container, &state, &RenderStyle::default());
    let img = rasterize(&plan, &container, None);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");
    save_png(&img, &path).unwrap();

    let reloaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(reloaded.dimensions(), (320, 200));
    assert_eq!(reloaded, img);
}
