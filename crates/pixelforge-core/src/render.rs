//! Translation of canvas state into an ordered list of draw primitives.

use tracing::debug;

use crate::consts::{DEFAULT_CHECKER_CELL, DEFAULT_MARGIN, PLACEHOLDER_TEXT};
use crate::geometry::{ContainerRect, DisplayRect, Rect, Rgb};
use crate::layout::compute_display_rect;
use crate::state::CanvasState;

/// Approximate advance of one label glyph, used to size the label box.
const LABEL_CHAR_WIDTH: i32 = 7;
const LABEL_HEIGHT: i32 = 18;
const LABEL_INSET: i32 = 4;
const LABEL_PADDING: i32 = 4;

/// A single drawing instruction for the host renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    /// Solid fill.
    FillRect { rect: Rect, color: Rgb },
    /// Single line of text centered in `rect`.
    Text { rect: Rect, text: String, color: Rgb },
    /// Alternating tiles anchored at `rect`'s top-left; a tile is dark when
    /// `(col + row)` is odd.
    Checkerboard {
        rect: Rect,
        cell_size: i32,
        light: Rgb,
        dark: Rgb,
    },
    /// The loaded image scaled into `rect`. Filtering is up to the host.
    Image { rect: Rect },
    /// One-unit outline drawn inside `rect`.
    StrokeRect { rect: Rect, color: Rgb },
    /// Text on an opaque box, left-aligned inside `rect`.
    Label {
        rect: Rect,
        text: String,
        color: Rgb,
        background: Rgb,
    },
}

/// Colors and metrics used when building a plan.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    pub background: Rgb,
    pub placeholder_color: Rgb,
    pub placeholder_text: String,
    pub checker_light: Rgb,
    pub checker_dark: Rgb,
    pub border: Rgb,
    pub label_text: Rgb,
    pub label_background: Rgb,
    pub margin: i32,
    pub cell_size: i32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            placeholder_color: Rgb::gray(120),
            placeholder_text: PLACEHOLDER_TEXT.to_string(),
            checker_light: Rgb::gray(240),
            checker_dark: Rgb::gray(204),
            border: Rgb::gray(180),
            label_text: Rgb::WHITE,
            label_background: Rgb::gray(60),
            margin: DEFAULT_MARGIN,
            cell_size: DEFAULT_CHECKER_CELL,
        }
    }
}

/// Output of [`build_render_plan`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderPlan {
    pub primitives: Vec<DrawPrimitive>,
    /// Where content was placed; `None` on the placeholder path.
    pub display_rect: Option<DisplayRect>,
}

impl RenderPlan {
    pub fn is_placeholder(&self) -> bool {
        self.display_rect.is_none()
    }

    pub fn image_blits(&self) -> impl Iterator<Item = &Rect> {
        self.primitives.iter().filter_map(|p| match p {
            DrawPrimitive::Image { rect } => Some(rect),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Build the draw list for one paint of `container`.
///
/// Deterministic and infallible: inconsistent input falls back to the
/// placeholder message.
pub fn build_render_plan(
    container: &ContainerRect,
    state: &CanvasState,
    style: &RenderStyle,
) -> RenderPlan {
    let mut primitives = vec![DrawPrimitive::FillRect {
        rect: *container,
        color: style.background,
    }];

    let Some(target) = state.target() else {
        primitives.push(placeholder(container, style));
        return RenderPlan {
            primitives,
            display_rect: None,
        };
    };

    let Some(display) = compute_display_rect(
        container,
        target.width as i32,
        target.height as i32,
        style.margin,
    ) else {
        primitives.push(placeholder(container, style));
        return RenderPlan {
            primitives,
            display_rect: None,
        };
    };

    // Window shrunk past the margins: nothing but the background fits.
    if display.is_empty() {
        debug!(container = %container, "Display rect collapsed");
        return RenderPlan {
            primitives,
            display_rect: Some(display),
        };
    }

    primitives.push(DrawPrimitive::Checkerboard {
        rect: display,
        cell_size: style.cell_size,
        light: style.checker_light,
        dark: style.checker_dark,
    });
    if state.has_image() {
        primitives.push(DrawPrimitive::Image { rect: display });
    }
    primitives.push(DrawPrimitive::StrokeRect {
        rect: display,
        color: style.border,
    });

    let text = target.to_string();
    primitives.push(DrawPrimitive::Label {
        rect: label_rect(&display, &text),
        text,
        color: style.label_text,
        background: style.label_background,
    });

    RenderPlan {
        primitives,
        display_rect: Some(display),
    }
}

fn placeholder(container: &ContainerRect, style: &RenderStyle) -> DrawPrimitive {
    DrawPrimitive::Text {
        rect: *container,
        text: style.placeholder_text.clone(),
        color: style.placeholder_color,
    }
}

fn label_rect(display: &DisplayRect, text: &str) -> Rect {
    let width = text.chars().count() as i32 * LABEL_CHAR_WIDTH + 2 * LABEL_PADDING;
    let left = display.left.saturating_add(LABEL_INSET);
    let top = display.top.saturating_add(LABEL_INSET);
    let rect = Rect::new(
        left,
        top,
        left.saturating_add(width),
        top.saturating_add(LABEL_HEIGHT),
    );
    rect.intersection(display).unwrap_or(Rect::new(
        display.left,
        display.top,
        display.left,
        display.top,
    ))
}
