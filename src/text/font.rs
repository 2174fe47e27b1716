use std::path::Path;

use ab_glyph::{Font as _, FontArc, PxScale};
use anyhow::Context;
use image::{Rgba, RgbaImage};

use crate::foundation::core::TextSize;
use crate::foundation::error::{CaptionError, CaptionResult};

/// Probe string whose measured height defines one caption line (ascender plus descender).
pub const LINE_HEIGHT_PROBE: &str = "hg";

/// Extra vertical space between consecutive caption lines, in pixels.
pub const DEFAULT_LINE_GAP_PX: u32 = 5;

/// Default caption point size.
pub const DEFAULT_FONT_SIZE_PX: f32 = 30.0;

/// Text measurement bound to one typeface and size.
pub trait TextMeasure {
    /// Pixel extent of `text` rendered on a single line.
    fn measure(&self, text: &str) -> TextSize;

    /// Height of one caption line: the probe's height plus `gap_px`.
    fn line_height(&self, gap_px: u32) -> u32 {
        self.measure(LINE_HEIGHT_PROBE).height + gap_px
    }
}

/// A measurable font that can also rasterize a line onto an RGBA frame.
///
/// Implementations are immutable after construction so one instance can be shared across
/// threads and requests.
pub trait CaptionFont: TextMeasure + Send + Sync {
    /// Draw `text` with its top-left corner at (`x`, `y`). Coordinates may lie off-canvas.
    fn draw_line(&self, canvas: &mut RgbaImage, text: &str, x: i32, y: i32, fill: Rgba<u8>);
}

/// TrueType/OpenType font at a fixed pixel size.
#[derive(Clone)]
pub struct FontMetrics {
    font: FontArc,
    scale: PxScale,
    size_px: f32,
}

impl std::fmt::Debug for FontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMetrics")
            .field("size_px", &self.size_px)
            .field("scale", &self.scale)
            .field("glyph_count", &self.font.glyph_count())
            .finish()
    }
}

impl FontMetrics {
    /// Parse font data. `size_px` is the em size in pixels.
    pub fn from_bytes(bytes: Vec<u8>, size_px: f32) -> CaptionResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CaptionError::validation(format!(
                "font size must be finite and > 0, got {size_px}"
            )));
        }

        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| CaptionError::resource_unavailable(format!("parse font: {e}")))?;

        // ab_glyph scales by ascent-to-descent height; convert so the em box is `size_px`.
        let scale = match font.units_per_em() {
            Some(upem) if upem > 0.0 => size_px * font.height_unscaled() / upem,
            _ => size_px,
        };

        Ok(Self {
            font,
            scale: PxScale::from(scale),
            size_px,
        })
    }

    /// Read and parse a font file.
    pub fn load(path: &Path, size_px: f32) -> CaptionResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font '{}'", path.display()))
            .map_err(|e| CaptionError::resource_unavailable(format!("{e:#}")))?;
        Self::from_bytes(bytes, size_px)
    }

    /// Em size in pixels.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

impl TextMeasure for FontMetrics {
    fn measure(&self, text: &str) -> TextSize {
        let (width, height) = imageproc::drawing::text_size(self.scale, &self.font, text);
        TextSize { width, height }
    }
}

impl CaptionFont for FontMetrics {
    fn draw_line(&self, canvas: &mut RgbaImage, text: &str, x: i32, y: i32, fill: Rgba<u8>) {
        imageproc::drawing::draw_text_mut(canvas, fill, x, y, self.scale, &self.font, text);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
