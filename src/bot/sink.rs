use std::path::PathBuf;

use anyhow::Context;

use crate::assets::source::AnimationBytes;
use crate::foundation::error::CaptionResult;

/// Chat (or channel) an animation is delivered to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ChatId(pub i64);

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receipt for one delivered animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    /// Chat the animation went to.
    pub chat: ChatId,
    /// Identifier the transport assigned to the stored animation; reusable for inline answers.
    pub file_id: String,
}

/// "Send animation bytes to a destination": the only capability the bot needs from a
/// messaging transport.
pub trait AnimationSink: Send {
    /// Deliver `animation` to `chat`, reading it from offset zero.
    fn send_animation(
        &mut self,
        chat: ChatId,
        animation: AnimationBytes,
    ) -> CaptionResult<Delivery>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    sent: Vec<(ChatId, AnimationBytes)>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Animations in delivery order.
    pub fn sent(&self) -> &[(ChatId, AnimationBytes)] {
        &self.sent
    }
}

impl AnimationSink for InMemorySink {
    fn send_animation(
        &mut self,
        chat: ChatId,
        animation: AnimationBytes,
    ) -> CaptionResult<Delivery> {
        let file_id = format!("mem-{}", self.sent.len());
        self.sent.push((chat, animation));
        Ok(Delivery { chat, file_id })
    }
}

/// Writes each animation to `<root>/<chat>/<seq>-<name>`.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    next_seq: u64,
}

impl DirectorySink {
    /// Sink rooted at `root`; directories are created on demand.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next_seq: 0,
        }
    }

    /// Output root directory.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl AnimationSink for DirectorySink {
    fn send_animation(
        &mut self,
        chat: ChatId,
        animation: AnimationBytes,
    ) -> CaptionResult<Delivery> {
        let dir = self.root.join(chat.to_string());
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;

        let file_name = format!("{:04}-{}", self.next_seq, animation.name());
        let path = dir.join(&file_name);
        std::fs::write(&path, animation.as_bytes())
            .with_context(|| format!("write animation '{}'", path.display()))?;
        self.next_seq += 1;

        Ok(Delivery {
            chat,
            file_id: path.to_string_lossy().into_owned(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bot/sink.rs"]
mod tests;
