use image::Frame;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::foundation::error::{CaptionError, CaptionResult};

/// Quantizer speed passed to the GIF encoder: 1 is the slowest, highest-fidelity setting.
///
/// Frames with at most 256 distinct colors are written with an exact palette at any speed;
/// the slowest setting only matters for frames that need quantizing.
pub const GIF_ENCODE_SPEED: i32 = 1;

/// Encode frames, in the given order, into one looping GIF.
///
/// Each frame keeps its own delay and offset. Fully transparent pixels map to the frame's
/// transparent palette index. Zero frames is an [`CaptionError::EncodingFailure`].
pub fn encode_animation(frames: Vec<Frame>) -> CaptionResult<Vec<u8>> {
    if frames.is_empty() {
        return Err(CaptionError::encoding_failure(
            "cannot encode an animation with zero frames",
        ));
    }

    let frame_count = frames.len();
    let mut out = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut out, GIF_ENCODE_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| CaptionError::encoding_failure(format!("write gif loop extension: {e}")))?;
        encoder
            .encode_frames(frames)
            .map_err(|e| CaptionError::encoding_failure(format!("encode gif frames: {e}")))?;
    }

    tracing::debug!(frame_count, bytes = out.len(), "gif encoded");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
