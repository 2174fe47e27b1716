use std::io::Cursor;

use anyhow::Context;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Frame, ImageDecoder};

use crate::foundation::core::Canvas;
use crate::foundation::error::{CaptionError, CaptionResult};

/// Every frame of an animation, fully composited to the logical screen size.
pub struct DecodedAnimation {
    /// Logical screen size shared by every frame.
    pub canvas: Canvas,
    /// RGBA frames in display order, each carrying its source delay.
    pub frames: Vec<Frame>,
}

impl std::fmt::Debug for DecodedAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedAnimation")
            .field("canvas", &self.canvas)
            .field("frames", &self.frames.len())
            .finish()
    }
}

impl DecodedAnimation {
    /// Number of decoded frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Decode a GIF into full-color RGBA frames.
///
/// Palette and transparency are resolved per frame, so later drawing works in true color.
/// A well-formed GIF with no image blocks decodes to zero frames.
pub fn decode_animation(bytes: &[u8]) -> CaptionResult<DecodedAnimation> {
    match decode_gif(bytes) {
        Ok(decoded) => Ok(decoded),
        Err(err) => match frameless_gif_canvas(bytes) {
            Some(canvas) => Ok(DecodedAnimation {
                canvas,
                frames: Vec::new(),
            }),
            None => Err(CaptionError::resource_unavailable(format!("{err:#}"))),
        },
    }
}

fn decode_gif(bytes: &[u8]) -> anyhow::Result<DecodedAnimation> {
    let decoder = GifDecoder::new(Cursor::new(bytes)).context("read gif header")?;
    let (width, height) = decoder.dimensions();
    let frames = decoder
        .into_frames()
        .collect_frames()
        .context("decode gif frames")?;

    Ok(DecodedAnimation {
        canvas: Canvas { width, height },
        frames,
    })
}

/// Canvas of a GIF whose block stream reaches the trailer without any image descriptor.
fn frameless_gif_canvas(bytes: &[u8]) -> Option<Canvas> {
    let rest = bytes
        .strip_prefix(b"GIF89a")
        .or_else(|| bytes.strip_prefix(b"GIF87a"))?;
    let lsd = rest.get(..7)?;
    let canvas = Canvas {
        width: u32::from(u16::from_le_bytes([lsd[0], lsd[1]])),
        height: u32::from(u16::from_le_bytes([lsd[2], lsd[3]])),
    };
    let flags = lsd[4];
    let mut pos = 7;
    if flags & 0x80 != 0 {
        pos += 3 * (1usize << ((flags & 0x07) + 1));
    }

    loop {
        match *rest.get(pos)? {
            0x3B => return Some(canvas),
            0x21 => {
                // extension: label, then data sub-blocks until a zero length
                pos += 2;
                loop {
                    let len = usize::from(*rest.get(pos)?);
                    pos += 1;
                    if len == 0 {
                        break;
                    }
                    pos += len;
                }
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
