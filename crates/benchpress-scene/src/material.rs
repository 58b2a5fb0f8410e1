//! Materials decoded from texture payloads

use benchpress_core::{BenchError, Result};

/// A material backed by one decoded image
#[derive(Debug, Clone)]
pub struct Material {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixel data, row-major
    pub pixels: Vec<u8>,
    /// Nearest-neighbor sampling; pixel-art atlases blur badly under
    /// bilinear filtering
    pub nearest_sampling: bool,
}

impl Material {
    /// Decode encoded image bytes (PNG in practice) into a material
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| BenchError::TextureDecode(e.to_string()))?;
        let rgba = image.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
            nearest_sampling: true,
        })
    }
}
