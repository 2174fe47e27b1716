//! Captioner burns centered, word-wrapped captions into every frame of an animated GIF.
//!
//! # Pipeline overview
//!
//! 1. **Wrap**: `caption + font + frame width -> lines` ([`wrap_text`])
//! 2. **Layout**: lines are centered and the block is anchored to the bottom edge
//!    ([`CaptionLayout`]), computed once per request
//! 3. **Composite**: every decoded frame gets the same lines at the same coordinates
//!    ([`Compositor`])
//! 4. **Encode**: frames are written back, in order, as one looping GIF
//!
//! Requests without a caption take the pass-through path and return the source bytes
//! untouched.
//!
//! The [`CaptionBot`] handlers sit on top of the compositor and talk to a messaging transport
//! only through the [`AnimationSink`] capability.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod bot;
mod compose;
mod config;
mod encode;
mod foundation;
mod layout;
mod text;

pub use assets::decode::{DecodedAnimation, decode_animation};
pub use assets::source::{AnimationBytes, AnimationSource};
pub use bot::handlers::{
    CAPTION_COMMAND, CaptionBot, CaptionRequest, InlineResult, START_CAPTION, StartReply,
    command_argument, normalize_caption,
};
pub use bot::sink::{AnimationSink, ChatId, Delivery, DirectorySink, InMemorySink};
pub use compose::compositor::{
    CaptionStyle, CompositeMode, Compositor, DEFAULT_OUTPUT_NAME, composite_from_files,
};
pub use config::CaptionConfig;
pub use encode::gif::{GIF_ENCODE_SPEED, encode_animation};
pub use foundation::core::{Canvas, PixelRect, Rgb8, TextSize};
pub use foundation::error::{CaptionError, CaptionResult};
pub use layout::caption::{CaptionLayout, PlacedLine};
pub use text::font::{
    CaptionFont, DEFAULT_FONT_SIZE_PX, DEFAULT_LINE_GAP_PX, FontMetrics, LINE_HEIGHT_PROBE,
    TextMeasure,
};
pub use text::wrap::wrap_text;
