//! PNG encoding for raster layers, backed by the `image` crate.

use flatskin_traits::{EncodeError, RasterEncoder};
use flatskin_types::RasterData;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Encodes RGBA buffers to PNG and passes pre-encoded PNG through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngRasterEncoder;

impl PngRasterEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl RasterEncoder for PngRasterEncoder {
    fn encode_png(&self, raster: &RasterData) -> Result<Vec<u8>, EncodeError> {
        match raster {
            RasterData::Png(bytes) => {
                if !bytes.starts_with(&PNG_SIGNATURE) {
                    return Err(EncodeError::NotPng);
                }
                Ok(bytes.clone())
            }
            RasterData::Rgba {
                width,
                height,
                pixels,
            } => {
                let (width, height) = (*width, *height);
                if width == 0 || height == 0 {
                    return Err(EncodeError::Empty { width, height });
                }
                let expected = (width as usize)
                    .checked_mul(height as usize)
                    .and_then(|area| area.checked_mul(4));
                if expected != Some(pixels.len()) {
                    return Err(EncodeError::BufferSize {
                        width,
                        height,
                        len: pixels.len(),
                    });
                }

                let mut png_data = Vec::new();
                PngEncoder::new(&mut png_data)
                    .write_image(pixels, width, height, ExtendedColorType::Rgba8)
                    .map_err(|e| EncodeError::Encoder(e.to_string()))?;
                Ok(png_data)
            }
        }
    }
}
