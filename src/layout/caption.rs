use image::RgbaImage;

use crate::foundation::core::{Canvas, PixelRect, Rgb8, TextSize};
use crate::text::font::{CaptionFont, TextMeasure};
use crate::text::wrap::wrap_text;

/// One wrapped caption line with its draw origin (top-left) on the frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedLine {
    /// Line content.
    pub text: String,
    /// Left edge; negative when the line is wider than the canvas.
    pub x: i32,
    /// Top edge; negative when the block is taller than the canvas.
    pub y: i32,
    /// Measured width and height of `text`.
    pub size: TextSize,
}

impl PlacedLine {
    /// Measured box of the line at its draw origin.
    pub fn rect(&self) -> PixelRect {
        PixelRect {
            x: self.x,
            y: self.y,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

/// Caption block anchored to the bottom edge of a canvas, lines centered horizontally.
///
/// Computed once per caption and reused unchanged for every frame, so the caption stays
/// pixel-identical while the background animates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionLayout {
    canvas: Canvas,
    line_height: u32,
    top: i32,
    lines: Vec<PlacedLine>,
}

impl CaptionLayout {
    /// Wrap `caption` to the canvas width and place every line.
    ///
    /// The block's bottom edge sits on the canvas's bottom edge. A block taller than the
    /// canvas starts at a negative `top` and its first lines are drawn off-canvas.
    pub fn compute<M: TextMeasure + ?Sized>(
        caption: &str,
        font: &M,
        canvas: Canvas,
        line_gap_px: u32,
    ) -> Self {
        let wrapped = wrap_text(caption, font, canvas.width);
        let line_height = font.line_height(line_gap_px);

        let block_height = i64::from(line_height) * wrapped.len() as i64;
        let top = clamp_i32(i64::from(canvas.height) - block_height);

        let mut lines = Vec::with_capacity(wrapped.len());
        let mut y = i64::from(top);
        for text in wrapped {
            let size = font.measure(&text);
            let x = (i64::from(canvas.width) - i64::from(size.width)).div_euclid(2);
            lines.push(PlacedLine {
                text,
                x: clamp_i32(x),
                y: clamp_i32(y),
                size,
            });
            y += i64::from(line_height);
        }

        tracing::debug!(
            line_count = lines.len(),
            line_height,
            top,
            "caption layout computed"
        );

        Self {
            canvas,
            line_height,
            top,
            lines,
        }
    }

    /// Canvas the layout was computed for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Placed lines, top to bottom.
    pub fn lines(&self) -> &[PlacedLine] {
        &self.lines
    }

    /// True when the caption wrapped to no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Vertical advance between lines.
    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    /// Vertical offset of the first line (`y0`).
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Union of the measured line rectangles.
    pub fn bounds(&self) -> PixelRect {
        self.lines.iter().fold(
            PixelRect {
                x: 0,
                y: self.top,
                width: 0,
                height: 0,
            },
            |acc, line| acc.union(line.rect()),
        )
    }

    /// Draw every line onto `frame` at its fixed position.
    pub fn draw<F: CaptionFont + ?Sized>(&self, font: &F, frame: &mut RgbaImage, fill: Rgb8) {
        let fill = fill.to_rgba();
        for line in &self.lines {
            font.draw_line(frame, &line.text, line.x, line.y, fill);
        }
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/caption.rs"]
mod tests;
