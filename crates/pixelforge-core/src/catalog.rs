use serde::{Deserialize, Serialize};

use crate::consts::MAX_DIM;
use crate::error::{PixelForgeError, Result};

/// A named target size offered for one-click selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionPreset {
    pub width: u32,
    pub height: u32,
    pub label: String,
}

impl ResolutionPreset {
    pub fn new(width: u32, height: u32, label: impl Into<String>) -> Self {
        Self {
            width,
            height,
            label: label.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.width > MAX_DIM || self.height > MAX_DIM {
            return Err(PixelForgeError::InvalidPreset {
                label: self.label.clone(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Presets shipped with the application, in display order.
pub fn default_presets() -> Vec<ResolutionPreset> {
    vec![
        ResolutionPreset::new(1280, 720, "1280 x 720 (HD)"),
        ResolutionPreset::new(1920, 1080, "1920 x 1080 (Full HD)"),
        ResolutionPreset::new(2560, 1440, "2560 x 1440 (QHD)"),
        ResolutionPreset::new(3840, 2160, "3840 x 2160 (4K)"),
        ResolutionPreset::new(1280, 750, "1280 x 750 (Custom)"),
        ResolutionPreset::new(800, 600, "800 x 600 (SVGA)"),
    ]
}

/// Immutable, ordered list of presets. Display order is selection order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionCatalog {
    presets: Vec<ResolutionPreset>,
}

impl ResolutionCatalog {
    /// Build a catalog, rejecting presets with a zero or oversized dimension.
    pub fn new(presets: Vec<ResolutionPreset>) -> Result<Self> {
        for preset in &presets {
            preset.validate()?;
        }
        Ok(Self { presets })
    }

    pub fn presets(&self) -> &[ResolutionPreset] {
        &self.presets
    }

    pub fn get(&self, index: usize) -> Option<&ResolutionPreset> {
        self.presets.get(index)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for ResolutionCatalog {
    fn default() -> Self {
        Self {
            presets: default_presets(),
        }
    }
}
