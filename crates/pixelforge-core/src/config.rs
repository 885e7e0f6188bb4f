use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_presets, ResolutionCatalog, ResolutionPreset};
use crate::consts::{
    DEFAULT_CHECKER_CELL, DEFAULT_INITIAL_HEIGHT, DEFAULT_INITIAL_WIDTH, DEFAULT_MARGIN,
    DEFAULT_SIDEBAR_WIDTH, DEFAULT_TITLE, MAX_CHECKER_CELL, MAX_DIM,
};
use crate::error::{PixelForgeError, Result};
use crate::render::RenderStyle;
use crate::state::DecodeFailurePolicy;

/// Startup configuration shared by the GUI and CLI. Read once, never written
/// back by the application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_initial_width")]
    pub initial_width: u32,
    #[serde(default = "default_initial_height")]
    pub initial_height: u32,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: i32,
    /// Gap between the canvas edge and the display rect.
    #[serde(default = "default_margin")]
    pub margin: i32,
    /// Checkerboard tile size.
    #[serde(default = "default_checker_cell")]
    pub checker_cell: i32,
    /// Ask the host to resize its window when a preset or custom size is applied.
    #[serde(default)]
    pub resize_window_to_target: bool,
    #[serde(default)]
    pub on_failed_load: DecodeFailurePolicy,
    #[serde(default = "default_presets")]
    pub presets: Vec<ResolutionPreset>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_initial_width() -> u32 {
    DEFAULT_INITIAL_WIDTH
}
fn default_initial_height() -> u32 {
    DEFAULT_INITIAL_HEIGHT
}
fn default_sidebar_width() -> i32 {
    DEFAULT_SIDEBAR_WIDTH
}
fn default_margin() -> i32 {
    DEFAULT_MARGIN
}
fn default_checker_cell() -> i32 {
    DEFAULT_CHECKER_CELL
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            initial_width: DEFAULT_INITIAL_WIDTH,
            initial_height: DEFAULT_INITIAL_HEIGHT,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            margin: DEFAULT_MARGIN,
            checker_cell: DEFAULT_CHECKER_CELL,
            resize_window_to_target: false,
            on_failed_load: DecodeFailurePolicy::default(),
            presets: default_presets(),
        }
    }
}

impl AppConfig {
    /// Parse and range-check a config document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject numeric settings the layout and window code cannot honour.
    pub fn validate(&self) -> Result<()> {
        let max = i64::from(MAX_DIM);
        check_range("initial_width", i64::from(self.initial_width), 1, max)?;
        check_range("initial_height", i64::from(self.initial_height), 1, max)?;
        check_range("sidebar_width", i64::from(self.sidebar_width), 0, max)?;
        check_range("margin", i64::from(self.margin), 0, max)?;
        check_range(
            "checker_cell",
            i64::from(self.checker_cell),
            1,
            i64::from(MAX_CHECKER_CELL),
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn catalog(&self) -> Result<ResolutionCatalog> {
        ResolutionCatalog::new(self.presets.clone())
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            margin: self.margin,
            cell_size: self.checker_cell,
            ..RenderStyle::default()
        }
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PixelForgeError::InvalidSetting {
            field,
            value,
            min,
            max,
        })
    }
}
