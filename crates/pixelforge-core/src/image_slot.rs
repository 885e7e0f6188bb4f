use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{PixelForgeError, Result};

/// Raw input handed over by the host after the open-image dialog.
#[derive(Clone, Debug)]
pub enum ImageSource {
    /// A file chosen by the user.
    Path(PathBuf),
    /// Encoded bytes already in memory, with an optional display name.
    Bytes { data: Vec<u8>, name: Option<String> },
}

impl ImageSource {
    /// File base name shown in the window title, if known.
    pub fn display_name(&self) -> Option<String> {
        match self {
            ImageSource::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
            ImageSource::Bytes { name, .. } => name.clone(),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

/// Turns an [`ImageSource`] into RGBA pixels.
pub trait ImageDecoder {
    fn decode(&self, source: &ImageSource) -> Result<RgbaImage>;
}

/// Decoder backed by the `image` crate; format support is whatever it provides.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, source: &ImageSource) -> Result<RgbaImage> {
        let decoded = match source {
            ImageSource::Path(path) => image::open(path),
            ImageSource::Bytes { data, .. } => image::load_from_memory(data),
        };
        decoded
            .map(|img| img.to_rgba8())
            .map_err(|e| PixelForgeError::Decode(e.to_string()))
    }
}

/// Exclusively owned decoded image. Dropping or replacing the slot frees
/// the pixel buffer.
#[derive(Debug)]
pub struct ImageSlot {
    pixels: RgbaImage,
    name: Option<String>,
}

impl ImageSlot {
    /// Wrap decoded pixels, rejecting zero-area images.
    pub fn new(pixels: RgbaImage, name: Option<String>) -> Result<Self> {
        let (w, h) = pixels.dimensions();
        if w == 0 || h == 0 {
            return Err(PixelForgeError::Decode(format!(
                "image has no area ({w}x{h})"
            )));
        }
        Ok(Self { pixels, name })
    }

    /// Decode `source` with `decoder` into a new slot.
    pub fn load(source: &ImageSource, decoder: &dyn ImageDecoder) -> Result<Self> {
        let pixels = decoder.decode(source)?;
        Self::new(pixels, source.display_name())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// RGBA value at `(x, y)` scaled from a `dst_w` x `dst_h` blit,
    /// nearest-neighbour.
    pub fn sample_scaled(&self, x: u32, y: u32, dst_w: u32, dst_h: u32) -> [u8; 4] {
        let sx = (x as u64 * self.width() as u64 / dst_w.max(1) as u64) as u32;
        let sy = (y as u64 * self.height() as u64 / dst_h.max(1) as u64) as u32;
        let sx = sx.min(self.width() - 1);
        let sy = sy.min(self.height() - 1);
        self.pixels.get_pixel(sx, sy).0
    }
}
