mod common;

use pixelforge_core::catalog::ResolutionCatalog;
use pixelforge_core::geometry::{Rect, Rgb};
use pixelforge_core::image_slot::ImageCrateDecoder;
use pixelforge_core::layout::compute_display_rect;
use pixelforge_core::render::{build_render_plan, DrawPrimitive, RenderStyle};
use pixelforge_core::state::CanvasState;

use common::{default_container, garbage_source, png_source};

fn kinds(primitives: &[DrawPrimitive]) -> Vec<&'static str> {
    primitives
        .iter()
        .map(|p| match p {
            DrawPrimitive::FillRect { .. } => "fill",
            DrawPrimitive::Text { .. } => "text",
            DrawPrimitive::Checkerboard { .. } => "checker",
            DrawPrimitive::Image { .. } => "image",
            DrawPrimitive::StrokeRect { .. } => "stroke",
            DrawPrimitive::Label { .. } => "label",
        })
        .collect()
}

#[test]
fn test_no_target_renders_placeholder() {
    let state = CanvasState::new();
    let style = RenderStyle::default();
    let plan = build_render_plan(&default_container(), &state, &style);

    assert!(plan.is_placeholder());
    assert_eq!(kinds(&plan.primitives), vec!["fill", "text"]);
    match &plan.primitives[1] {
        DrawPrimitive::Text { rect, text, color } => {
            assert_eq!(*rect, default_container());
            assert_eq!(text, "Select a resolution or open an image to begin");
            assert_eq!(*color, Rgb::gray(120));
        }
        other => panic!("expected placeholder text, got {other:?}"),
    }
}

#[test]
fn test_background_fills_container_first() {
    let state = CanvasState::new();
    let plan = build_render_plan(&default_container(), &state, &RenderStyle::default());
    assert_eq!(
        plan.primitives[0],
        DrawPrimitive::FillRect {
            rect: default_container(),
            color: Rgb::WHITE
        }
    );
}

#[test]
fn test_preset_without_image_order() {
    let mut state = CanvasState::new();
    state.select_preset(&ResolutionCatalog::default(), 0).unwrap();
    let plan = build_render_plan(&default_container(), &state, &RenderStyle::default());

    assert_eq!(kinds(&plan.primitives), vec!["fill", "checker", "stroke", "label"]);
    assert_eq!(plan.image_blits().count(), 0);

    let display = plan.display_rect.unwrap();
    match &plan.primitives[3] {
        DrawPrimitive::Label { rect, text, .. } => {
            assert_eq!(text, "1280 × 720");
            assert!(display.contains_rect(rect));
            assert!(rect.left > display.left && rect.top > display.top);
        }
        other => panic!("expected label, got {other:?}"),
    }
}

#[test]
fn test_loaded_image_emits_one_blit_sized_to_display_rect() {
    let mut state = CanvasState::new();
    state.apply_custom_size("300", "300").unwrap();
    state
        .load_image(&png_source(1200, 900, "photo.png"), &ImageCrateDecoder)
        .unwrap();

    let container = default_container();
    let plan = build_render_plan(&container, &state, &RenderStyle::default());
    let expected = compute_display_rect(&container, 1200, 900, 20).unwrap();

    assert_eq!(
        kinds(&plan.primitives),
        vec!["fill", "checker", "image", "stroke", "label"]
    );
    let blits: Vec<_> = plan.image_blits().collect();
    assert_eq!(blits, vec![&expected]);
    assert_eq!(plan.display_rect, Some(expected));
}

#[test]
fn test_failed_load_without_prior_image_emits_no_blit() {
    let mut state = CanvasState::new();
    state.apply_custom_size("800", "600").unwrap();
    assert!(state.load_image(&garbage_source(), &ImageCrateDecoder).is_err());

    let plan = build_render_plan(&default_container(), &state, &RenderStyle::default());
    assert_eq!(plan.image_blits().count(), 0);
    assert!(!plan.is_placeholder());
}

#[test]
fn test_checkerboard_uses_style() {
    let mut state = CanvasState::new();
    state.apply_custom_size("800", "600").unwrap();
    let style = RenderStyle {
        cell_size: 16,
        ..RenderStyle::default()
    };
    let plan = build_render_plan(&default_container(), &state, &style);
    match &plan.primitives[1] {
        DrawPrimitive::Checkerboard {
            rect,
            cell_size,
            light,
            dark,
        } => {
            assert_eq!(Some(*rect), plan.display_rect);
            assert_eq!(*cell_size, 16);
            assert_ne!(light, dark);
        }
        other => panic!("expected checkerboard, got {other:?}"),
    }
}

#[test]
fn test_tiny_container_draws_only_background() {
    let mut state = CanvasState::new();
    state.apply_custom_size("800", "600").unwrap();
    let container = Rect::new(190, 0, 210, 30);
    let plan = build_render_plan(&container, &state, &RenderStyle::default());

    assert_eq!(kinds(&plan.primitives), vec!["fill"]);
    assert!(plan.display_rect.unwrap().is_empty());
}

#[test]
fn test_plan_is_deterministic() {
    let mut state = CanvasState::new();
    state
        .load_image(&png_source(64, 32, "a.png"), &ImageCrateDecoder)
        .unwrap();
    let style = RenderStyle::default();
    let a = build_render_plan(&default_container(), &state, &style);
    let b = build_render_plan(&default_container(), &state, &style);
    assert_eq!(a, b);
}

#[test]
fn test_plan_tracks_container_changes() {
    let mut state = CanvasState::new();
    state.apply_custom_size("1600", "900").unwrap();
    let style = RenderStyle::default();
    let small = build_render_plan(&Rect::new(190, 0, 800, 600), &state, &style);
    let large = build_render_plan(&Rect::new(190, 0, 2000, 1200), &state, &style);

    let (s, l) = (small.display_rect.unwrap(), large.display_rect.unwrap());
    assert!(l.width() > s.width());
    assert_eq!(s.width(), 570);
    assert_eq!(l.width(), 1770);
}
