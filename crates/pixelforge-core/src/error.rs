use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelForgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {field}: '{text}' is not a whole number")]
    InvalidInput { field: &'static str, text: String },

    #[error("Invalid {field}: {value} is outside the allowed range {min}-{max}")]
    OutOfBounds {
        field: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },

    #[error("Preset index {index} out of range (total: {total})")]
    OutOfRange { index: usize, total: usize },

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Window handle {0} is already registered")]
    DuplicateHandle(u64),

    #[error("Invalid preset '{label}': {width}x{height}")]
    InvalidPreset {
        label: String,
        width: u32,
        height: u32,
    },

    #[error("Invalid config value {field} = {value}: expected {min}-{max}")]
    InvalidSetting {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

impl PixelForgeError {
    /// True for the kinds the canvas recovers from by warning the user.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::OutOfBounds { .. }
                | Self::OutOfRange { .. }
                | Self::Decode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PixelForgeError>;
