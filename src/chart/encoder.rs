use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};

use super::BoxError;

/// Turns a raw RGB8 frame into transferable image bytes.
pub trait FrameEncoder: Send + Sync {
    /// MIME type of the bytes `encode` produces.
    fn content_type(&self) -> &'static str;

    fn encode(&self, rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, BoxError>;
}

/// Lossless PNG output.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngFrameEncoder;

impl FrameEncoder for PngFrameEncoder {
    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn encode(&self, rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, BoxError> {
        let mut out = Vec::with_capacity(rgb.len() / 8);
        PngEncoder::new(&mut out).write_image(rgb, width, height, ColorType::Rgb8)?;
        Ok(out)
    }
}
