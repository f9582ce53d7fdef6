//! Explicit session state for the input flow.
//!
//! A [`Session`] is an owned value: the caller holds it, passes it into each
//! transition, and keeps the session that comes back. At most one image is
//! active at a time.
//!
//! ```text
//! NoInput --select_mode--> InputSelected --receive--> ImageLoaded
//!                               ^                        |
//!                               +---- select_mode -------+  (different mode)
//! ImageLoaded --receive--> ImageLoaded                      (bytes replaced)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::pipeline::{FilterPipeline, Rendered};

/// Where input bytes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// JPEG or PNG file upload
    Upload,
    /// Frame captured from a camera
    Camera,
}

/// Coarse state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NoInput,
    InputSelected,
    ImageLoaded,
}

/// Input mode plus the most recently received image bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    mode: Option<InputMode>,
    image: Option<Vec<u8>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch input mode.
    ///
    /// Choosing a different mode discards any held image; re-selecting the
    /// current mode keeps it.
    pub fn select_mode(self, mode: InputMode) -> Self {
        if self.mode == Some(mode) {
            return self;
        }
        tracing::debug!(?mode, "Input mode selected");
        Self {
            mode: Some(mode),
            image: None,
        }
    }

    /// Store newly acquired bytes, replacing any previous image.
    pub fn receive(self, bytes: impl Into<Vec<u8>>) -> Result<Self, FilterError> {
        let mode = self.mode.ok_or(FilterError::NoInputMode)?;
        let bytes = bytes.into();
        tracing::debug!(?mode, size_bytes = bytes.len(), "Image received");
        Ok(Self {
            mode: Some(mode),
            image: Some(bytes),
        })
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.mode, &self.image) {
            (None, _) => SessionPhase::NoInput,
            (Some(_), None) => SessionPhase::InputSelected,
            (Some(_), Some(_)) => SessionPhase::ImageLoaded,
        }
    }

    pub fn mode(&self) -> Option<InputMode> {
        self.mode
    }

    pub fn image_bytes(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    /// Run the full pipeline on the held image.
    pub fn render(&self, pipeline: &FilterPipeline) -> Result<Rendered, FilterError> {
        let bytes = self.image_bytes().ok_or(FilterError::NoImage)?;
        pipeline.process(bytes)
    }
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Upload => "upload",
            InputMode::Camera => "camera",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upload" => Ok(InputMode::Upload),
            "camera" => Ok(InputMode::Camera),
            _ => Err(FilterError::UnsupportedInputMode(s.trim().to_string())),
        }
    }
}
