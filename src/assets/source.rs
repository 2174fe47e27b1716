use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{CaptionError, CaptionResult};

/// Reference to the fixed source animation a caption is burned into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimationSource {
    /// Animation read from disk on every [`AnimationSource::load`].
    File(PathBuf),
    /// Animation already held in memory.
    Memory {
        /// File name reported for pass-through deliveries.
        name: String,
        /// Encoded animation.
        bytes: Arc<[u8]>,
    },
}

impl AnimationSource {
    /// Source read from `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Source backed by bytes already in memory.
    pub fn memory(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::Memory {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// File name used when the source is delivered unchanged.
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => file_name_or(path, "animation.gif"),
            Self::Memory { name, .. } => name.clone(),
        }
    }

    /// Read the full animation into memory.
    pub fn load(&self) -> CaptionResult<AnimationBytes> {
        match self {
            Self::File(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("read animation '{}'", path.display()))
                    .map_err(|e| CaptionError::resource_unavailable(format!("{e:#}")))?;
                Ok(AnimationBytes::new(self.name(), bytes))
            }
            Self::Memory { name, bytes } => Ok(AnimationBytes::new(name.clone(), bytes.to_vec())),
        }
    }
}

fn file_name_or(path: &Path, fallback: &str) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}

/// A named, fully buffered animation byte stream.
#[derive(Clone, PartialEq, Eq)]
pub struct AnimationBytes {
    name: String,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for AnimationBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationBytes")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl AnimationBytes {
    /// Wrap encoded bytes under a file name.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// File name attached to the stream.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-length stream.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Reader positioned at offset zero.
    pub fn cursor(&self) -> Cursor<&[u8]> {
        Cursor::new(self.bytes.as_slice())
    }

    /// Owning reader positioned at offset zero.
    pub fn into_cursor(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.bytes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
