use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::Path;

use crate::error::ViewerError;
use crate::navigator::RenderInstruction;
use crate::ui::render::{blend_over, BG_COLOR};

// ---------------------------------------------------------------------------
// Decoded image data (CPU side, before packing for softbuffer)
// ---------------------------------------------------------------------------

pub struct DecodedImage {
    pub rgba: RgbaImage,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Resample to the instruction's scaled size and pack for display.
    /// Sides that truncated to zero are drawn one pixel wide.
    pub fn scale_to(&self, instr: &RenderInstruction) -> Frame {
        let width = instr.width.max(1);
        let height = instr.height.max(1);

        if (width, height) == self.rgba.dimensions() {
            Frame::from_rgba(&self.rgba)
        } else {
            // Triangle is bilinear
            let resized = imageops::resize(&self.rgba, width, height, FilterType::Triangle);
            Frame::from_rgba(&resized)
        }
    }
}

pub fn decode(path: &Path) -> Result<DecodedImage, ViewerError> {
    let img = image::open(path).map_err(|source| ViewerError::DecodeFailure {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(DecodedImage { rgba: img.to_rgba8() })
}

// ---------------------------------------------------------------------------
// Packed frame (u32 per pixel, 0x00RRGGBB)
// ---------------------------------------------------------------------------

pub struct Frame {
    pub pixels: Vec<u32>,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    /// Pack RGBA, compositing translucent pixels over the background colour.
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let pixels = img
            .pixels()
            .map(|p| blend_over(p.0, BG_COLOR))
            .collect();
        Self {
            pixels,
            width: img.width(),
            height: img.height(),
        }
    }
}
