use std::path::Path;
use std::sync::Arc;

use crate::assets::decode::decode_animation;
use crate::assets::source::{AnimationBytes, AnimationSource};
use crate::encode::gif::encode_animation;
use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::CaptionResult;
use crate::layout::caption::CaptionLayout;
use crate::text::font::{CaptionFont, DEFAULT_LINE_GAP_PX, FontMetrics};

/// Output file name given to captioned animations unless overridden.
pub const DEFAULT_OUTPUT_NAME: &str = "caption.gif";

/// Static rendering parameters shared by every caption a [`Compositor`] produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionStyle {
    /// Extra pixels between consecutive lines.
    pub line_gap_px: u32,
    /// Glyph fill color (always fully opaque).
    pub fill: Rgb8,
    /// Name attached to captioned output streams.
    pub output_name: String,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            line_gap_px: DEFAULT_LINE_GAP_PX,
            fill: Rgb8::WHITE,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

/// Which path a composite request takes; chosen once from the caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    /// Source bytes are returned untouched.
    PassThrough,
    /// Frames are decoded, captioned and re-encoded.
    Captioned,
}

impl CompositeMode {
    /// Absent, empty and whitespace-only captions all pass through.
    pub fn for_caption(caption: Option<&str>) -> Self {
        match caption {
            Some(text) if !text.trim().is_empty() => Self::Captioned,
            _ => Self::PassThrough,
        }
    }
}

/// Burns a caption into every frame of an animation.
///
/// Holds only immutable state: the font is shared read-only, so one compositor can serve
/// any number of requests, including concurrent ones.
#[derive(Debug)]
pub struct Compositor<F> {
    font: Arc<F>,
    style: CaptionStyle,
}

impl<F> Clone for Compositor<F> {
    fn clone(&self) -> Self {
        Self {
            font: Arc::clone(&self.font),
            style: self.style.clone(),
        }
    }
}

impl<F: CaptionFont> Compositor<F> {
    /// Build around an already shared font.
    pub fn new(font: Arc<F>, style: CaptionStyle) -> Self {
        Self { font, style }
    }

    /// Build around a font this compositor will own.
    pub fn from_font(font: F, style: CaptionStyle) -> Self {
        Self::new(Arc::new(font), style)
    }

    /// Font used for measuring and drawing.
    pub fn font(&self) -> &F {
        &self.font
    }

    /// Rendering parameters.
    pub fn style(&self) -> &CaptionStyle {
        &self.style
    }

    /// Layout the caption would get on a canvas of the given size.
    pub fn layout(&self, caption: &str, canvas: Canvas) -> CaptionLayout {
        CaptionLayout::compute(caption, self.font.as_ref(), canvas, self.style.line_gap_px)
    }

    /// Caption every frame of `source`, or return it unchanged when there is no caption.
    ///
    /// All-or-nothing: on any failure no bytes are returned.
    #[tracing::instrument(
        skip(self, source),
        fields(source_name = source.name(), len = source.len())
    )]
    pub fn composite(
        &self,
        source: &AnimationBytes,
        caption: Option<&str>,
    ) -> CaptionResult<AnimationBytes> {
        let caption = match (CompositeMode::for_caption(caption), caption) {
            (CompositeMode::Captioned, Some(text)) => text,
            _ => return Ok(source.clone()),
        };

        let decoded = decode_animation(source.as_bytes())?;
        let layout = self.layout(caption, decoded.canvas);

        let mut frames = decoded.frames;
        for frame in &mut frames {
            layout.draw(self.font.as_ref(), frame.buffer_mut(), self.style.fill);
        }

        let bytes = encode_animation(frames)?;
        Ok(AnimationBytes::new(self.style.output_name.clone(), bytes))
    }
}

/// Load the font and source for this call only, then composite.
///
/// Nothing is cached between calls. Prefer a long-lived [`Compositor`] when serving many
/// requests with the same font.
pub fn composite_from_files(
    source: &AnimationSource,
    font_path: &Path,
    font_size_px: f32,
    caption: Option<&str>,
) -> CaptionResult<AnimationBytes> {
    let bytes = source.load()?;
    if CompositeMode::for_caption(caption) == CompositeMode::PassThrough {
        return Ok(bytes);
    }
    let font = FontMetrics::load(font_path, font_size_px)?;
    Compositor::from_font(font, CaptionStyle::default()).composite(&bytes, caption)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
