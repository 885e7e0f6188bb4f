use std::path::Path;

use console::Style;
use pixelforge_core::catalog::ResolutionCatalog;
use pixelforge_core::geometry::{ContainerRect, DisplayRect};
use pixelforge_core::state::CanvasState;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    index: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            index: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn heading(s: &Styles, text: &str) {
    println!();
    println!("  {}", s.title.apply_to(text));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(text.chars().count())));
    println!();
}

pub fn print_presets(catalog: &ResolutionCatalog) {
    let s = Styles::new();
    heading(&s, "Resolution Presets");

    if catalog.is_empty() {
        println!("  {}", s.disabled.apply_to("(no presets configured)"));
    }
    for (index, preset) in catalog.presets().iter().enumerate() {
        println!(
            "  {:<6}{:<24}{}",
            s.index.apply_to(index),
            s.value.apply_to(&preset.label),
            s.label.apply_to(format!("{}x{}", preset.width, preset.height)),
        );
    }
    println!();
}

pub fn print_layout(container: &ContainerRect, target: (u32, u32), display: Option<DisplayRect>) {
    let s = Styles::new();
    heading(&s, "Canvas Layout");

    println!("  {:<14}{}", s.label.apply_to("Container"), s.value.apply_to(container));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Target"),
        s.value.apply_to(format!("{}x{}", target.0, target.1))
    );
    match display {
        Some(rect) if rect.is_empty() => println!(
            "  {:<14}{}",
            s.label.apply_to("Display"),
            s.disabled.apply_to(format!("{rect} (collapsed)"))
        ),
        Some(rect) => println!("  {:<14}{}", s.label.apply_to("Display"), s.value.apply_to(rect)),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Display"),
            s.disabled.apply_to("none")
        ),
    }
    println!();
}

pub fn print_render_summary(
    state: &CanvasState,
    container: &ContainerRect,
    display: Option<DisplayRect>,
    output: &Path,
) {
    let s = Styles::new();
    heading(&s, "PixelForge Render");

    let target = match state.target() {
        Some(size) => s.value.apply_to(size.to_string()),
        None => s.disabled.apply_to("none".to_string()),
    };
    println!("  {:<14}{}", s.label.apply_to("Target"), target);
    if let Some(image) = state.image() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Image"),
            s.value.apply_to(image.name().unwrap_or("(unnamed)"))
        );
    }
    println!("  {:<14}{}", s.label.apply_to("Container"), s.value.apply_to(container));
    if let Some(rect) = display {
        println!("  {:<14}{}", s.label.apply_to("Display"), s.value.apply_to(rect));
    }
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!();
}
