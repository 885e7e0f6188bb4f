#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use pixelforge_core::error::{PixelForgeError, Result};
use pixelforge_core::geometry::Rect;
use pixelforge_core::image_slot::{ImageDecoder, ImageSource};

/// Fill color of every synthetic test image.
pub const IMAGE_COLOR: [u8; 4] = [200, 10, 10, 255];

/// Canvas area of a 1280x750 client window with the 190-unit sidebar.
pub fn default_container() -> Rect {
    Rect::new(190, 0, 1280, 750)
}

/// Encode a solid-color PNG of the given size in memory.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(IMAGE_COLOR));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("encode PNG");
    buf.into_inner()
}

/// In-memory image source with a display name.
pub fn png_source(width: u32, height: u32, name: &str) -> ImageSource {
    ImageSource::Bytes {
        data: png_bytes(width, height),
        name: Some(name.to_string()),
    }
}

/// Bytes no decoder will accept.
pub fn garbage_source() -> ImageSource {
    ImageSource::Bytes {
        data: b"definitely not an image".to_vec(),
        name: Some("broken.png".to_string()),
    }
}

/// Write a PNG to a temporary file and return the handle.
///
/// The file stays alive as long as the returned `NamedTempFile` is not dropped.
pub fn write_test_png(width: u32, height: u32) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("create temp file");
    f.write_all(&png_bytes(width, height)).expect("write PNG data");
    f.flush().expect("flush");
    f
}

/// Decoder that hands back a fixed-size buffer regardless of input.
pub struct FixedSizeDecoder {
    pub width: u32,
    pub height: u32,
}

impl ImageDecoder for FixedSizeDecoder {
    fn decode(&self, _source: &ImageSource) -> Result<RgbaImage> {
        Ok(RgbaImage::new(self.width, self.height))
    }
}

/// Decoder that always fails.
pub struct FailingDecoder;

impl ImageDecoder for FailingDecoder {
    fn decode(&self, _source: &ImageSource) -> Result<RgbaImage> {
        Err(PixelForgeError::Decode("unsupported".into()))
    }
}
