use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::ResolutionCatalog;
use crate::consts::{MAX_DIM, MIN_CUSTOM_DIM};
use crate::error::{PixelForgeError, Result};
use crate::image_slot::{ImageDecoder, ImageSlot, ImageSource};

/// Active logical canvas dimensions. Both values lie in `[1, MAX_DIM]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let valid = |v: u32| (1..=MAX_DIM).contains(&v);
        (valid(width) && valid(height)).then_some(Self { width, height })
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

/// What last set the target size through the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeSource {
    #[default]
    None,
    Preset(usize),
    Custom,
}

/// What happens to an already loaded image when the next load fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeFailurePolicy {
    /// Keep showing the last image that decoded.
    #[default]
    KeepPrevious,
    /// Empty the slot.
    Discard,
}

/// Per-window canvas state: target size, its origin, and the loaded image.
#[derive(Debug, Default)]
pub struct CanvasState {
    target: Option<TargetSize>,
    image: Option<ImageSlot>,
    source: SizeSource,
    image_revision: u64,
    failure_policy: DecodeFailurePolicy,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure_policy(failure_policy: DecodeFailurePolicy) -> Self {
        Self {
            failure_policy,
            ..Self::default()
        }
    }

    pub fn target(&self) -> Option<TargetSize> {
        self.target
    }

    pub fn has_target_size(&self) -> bool {
        self.target.is_some()
    }

    pub fn image(&self) -> Option<&ImageSlot> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn source(&self) -> SizeSource {
        self.source
    }

    /// Bumped whenever the image slot changes, so hosts can refresh textures.
    pub fn image_revision(&self) -> u64 {
        self.image_revision
    }

    /// Set the target size from `catalog[index]`. A loaded image stays loaded.
    pub fn select_preset(
        &mut self,
        catalog: &ResolutionCatalog,
        index: usize,
    ) -> Result<TargetSize> {
        let preset = catalog.get(index).ok_or(PixelForgeError::OutOfRange {
            index,
            total: catalog.len(),
        })?;
        let size = TargetSize::new(preset.width, preset.height).ok_or_else(|| {
            PixelForgeError::InvalidPreset {
                label: preset.label.clone(),
                width: preset.width,
                height: preset.height,
            }
        })?;

        self.target = Some(size);
        self.source = SizeSource::Preset(index);
        info!(index, label = %preset.label, size = %size, "Preset selected");
        Ok(size)
    }

    /// Parse and validate the custom width/height inputs.
    /// The state is untouched unless both values are valid.
    pub fn apply_custom_size(&mut self, width_text: &str, height_text: &str) -> Result<TargetSize> {
        let width = parse_dimension("width", width_text)?;
        let height = parse_dimension("height", height_text)?;
        let size = TargetSize { width, height };

        self.target = Some(size);
        self.source = SizeSource::Custom;
        info!(size = %size, "Custom size applied");
        Ok(size)
    }

    /// Decode `source` and make it the canvas image; the target size follows
    /// the image's native dimensions.
    ///
    /// On failure the target size is left as it was. The previous image is
    /// kept or dropped according to the configured [`DecodeFailurePolicy`].
    pub fn load_image(
        &mut self,
        source: &ImageSource,
        decoder: &dyn ImageDecoder,
    ) -> Result<TargetSize> {
        let loaded = ImageSlot::load(source, decoder).and_then(|slot| {
            let size = TargetSize::new(slot.width(), slot.height()).ok_or_else(|| {
                PixelForgeError::Decode(format!("image size exceeds the {MAX_DIM} pixel limit"))
            })?;
            Ok((slot, size))
        });

        let (slot, size) = match loaded {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(error = %e, "Image load failed");
                match self.failure_policy {
                    DecodeFailurePolicy::KeepPrevious => {}
                    DecodeFailurePolicy::Discard => self.clear_image(),
                }
                return Err(e);
            }
        };

        info!(
            name = slot.name().unwrap_or("<memory>"),
            size = %size,
            "Image loaded"
        );
        self.image = Some(slot);
        self.image_revision += 1;
        self.target = Some(size);
        Ok(size)
    }

    /// Drop the loaded image, keeping the current target size.
    pub fn clear_image(&mut self) {
        if self.image.take().is_some() {
            self.image_revision += 1;
            info!("Image cleared");
        }
    }
}

fn parse_dimension(field: &'static str, text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let value: i64 = match trimmed.parse() {
        Ok(v) => v,
        Err(e) => {
            let value = match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => {
                    return Err(PixelForgeError::InvalidInput {
                        field,
                        text: text.to_string(),
                    })
                }
            };
            return Err(out_of_bounds(field, value));
        }
    };

    if value < MIN_CUSTOM_DIM as i64 || value > MAX_DIM as i64 {
        return Err(out_of_bounds(field, value));
    }
    Ok(value as u32)
}

fn out_of_bounds(field: &'static str, value: i64) -> PixelForgeError {
    PixelForgeError::OutOfBounds {
        field,
        value,
        min: MIN_CUSTOM_DIM,
        max: MAX_DIM,
    }
}
