pub mod config;
pub mod layout;
pub mod presets;
pub mod render;

use anyhow::{bail, Result};
use pixelforge_core::config::AppConfig;
use pixelforge_core::geometry::{ContainerRect, Rect};

/// Split a `WIDTHxHEIGHT` argument into its two raw parts.
pub fn split_size(text: &str) -> Result<(String, String)> {
    let lower = text.to_ascii_lowercase();
    match lower.split_once(['x', '×']) {
        Some((w, h)) => Ok((w.trim().to_string(), h.trim().to_string())),
        None => bail!("Expected WIDTHxHEIGHT, got '{text}'"),
    }
}

/// Parse a `WIDTHxHEIGHT` argument into numbers.
pub fn parse_size(text: &str) -> Result<(u32, u32)> {
    let (w, h) = split_size(text)?;
    Ok((w.parse()?, h.parse()?))
}

/// Canvas area of a window with the given client size.
pub fn container_for_client(client: &str, config: &AppConfig) -> Result<ContainerRect> {
    let (w, h) = parse_size(client)?;
    Ok(Rect::right_of_sidebar(
        w as i32,
        h as i32,
        config.sidebar_width,
    ))
}

/// Default `--client` value from the config.
pub fn default_client(config: &AppConfig) -> String {
    format!("{}x{}", config.initial_width, config.initial_height)
}
