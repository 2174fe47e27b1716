use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::compose::compositor::{CaptionStyle, DEFAULT_OUTPUT_NAME};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{CaptionError, CaptionResult};
use crate::text::font::{DEFAULT_FONT_SIZE_PX, DEFAULT_LINE_GAP_PX};

/// Static inputs of the captioning engine, loadable from JSON.
///
/// Every field has a default, so `{}` is a valid (if incomplete) configuration: `font_path`
/// and `source_path` must still be supplied before rendering.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptionConfig {
    /// TrueType/OpenType font used for captions.
    pub font_path: Option<PathBuf>,
    /// Em size in pixels.
    pub font_size_px: f32,
    /// Extra pixels between caption lines.
    pub line_gap_px: u32,
    /// Caption fill color.
    pub fill: Rgb8,
    /// Animation every caption is burned into.
    pub source_path: Option<PathBuf>,
    /// File name given to captioned output.
    pub output_name: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            font_size_px: DEFAULT_FONT_SIZE_PX,
            line_gap_px: DEFAULT_LINE_GAP_PX,
            fill: Rgb8::WHITE,
            source_path: None,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl CaptionConfig {
    /// Parse and validate a JSON config file.
    ///
    /// Relative `font_path`/`source_path` entries resolve against the file's directory.
    pub fn from_json_file(path: &Path) -> CaptionResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let mut cfg = Self::from_json_str(&text)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        cfg.font_path = cfg.font_path.map(|p| resolve(base, p));
        cfg.source_path = cfg.source_path.map(|p| resolve(base, p));
        Ok(cfg)
    }

    /// Parse and validate JSON text.
    pub fn from_json_str(text: &str) -> CaptionResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| CaptionError::validation(format!("parse config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject non-positive font sizes and empty output names.
    pub fn validate(&self) -> CaptionResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(CaptionError::validation(format!(
                "font_size_px must be finite and > 0, got {}",
                self.font_size_px
            )));
        }
        if self.output_name.trim().is_empty() {
            return Err(CaptionError::validation("output_name must not be empty"));
        }
        Ok(())
    }

    /// Rendering parameters for a [`crate::Compositor`].
    pub fn style(&self) -> CaptionStyle {
        CaptionStyle {
            line_gap_px: self.line_gap_px,
            fill: self.fill,
            output_name: self.output_name.clone(),
        }
    }

    /// Configured font path, or a validation error.
    pub fn require_font_path(&self) -> CaptionResult<&Path> {
        self.font_path
            .as_deref()
            .ok_or_else(|| CaptionError::validation("font_path is not configured"))
    }

    /// Configured source path, or a validation error.
    pub fn require_source_path(&self) -> CaptionResult<&Path> {
        self.source_path
            .as_deref()
            .ok_or_else(|| CaptionError::validation("source_path is not configured"))
    }
}

fn resolve(base: &Path, p: PathBuf) -> PathBuf {
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
#[path = "../../tests/unit/config/mod.rs"]
mod tests;
