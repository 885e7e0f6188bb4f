/// Smallest width or height accepted from the custom size inputs.
pub const MIN_CUSTOM_DIM: u32 = 100;

/// Largest width or height accepted from the custom size inputs, and the
/// upper bound for any target size.
pub const MAX_DIM: u32 = 10_000;

/// Gap (device units) kept between the container edge and the display rect.
pub const DEFAULT_MARGIN: i32 = 20;

/// Edge length of one checkerboard cell in device units.
pub const DEFAULT_CHECKER_CELL: i32 = 10;

/// Largest checkerboard cell accepted from config.
pub const MAX_CHECKER_CELL: i32 = 1_000;

/// Width of the host sidebar that is subtracted from the client area.
pub const DEFAULT_SIDEBAR_WIDTH: i32 = 190;

/// Window title used when no config overrides it.
pub const DEFAULT_TITLE: &str = "PixelForge";

/// Initial client-area size of the main window.
pub const DEFAULT_INITIAL_WIDTH: u32 = 1280;
pub const DEFAULT_INITIAL_HEIGHT: u32 = 750;

/// Message shown in the canvas until a target size exists.
pub const PLACEHOLDER_TEXT: &str = "Select a resolution or open an image to begin";

/// Minimum pixel count of a fill to use row-level Rayon parallelism
/// in the software rasterizer.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// File extensions offered by the open-image dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["bmp", "jpg", "jpeg", "png", "gif"];
