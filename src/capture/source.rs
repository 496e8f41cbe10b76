//! Capture sources: where the single still frame comes from.

use std::path::{Path, PathBuf};

use super::frame_utils::{from_rgba_image, mirror_horizontal};
use super::types::{CaptureError, Frame};

/// Something that can supply one decoded RGBA frame on demand.
pub trait CaptureSource {
    /// Capture a single frame.
    fn capture(&mut self) -> Result<Frame, CaptureError>;
}

/// Reads a still image from disk.
///
/// Any format the `image` crate was built with is accepted; the result is
/// always converted to RGBA8.
#[derive(Debug, Clone)]
pub struct ImageFileSource {
    path: PathBuf,
    mirror: bool,
}

impl ImageFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mirror: false,
        }
    }

    /// Flip captured frames horizontally.
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CaptureSource for ImageFileSource {
    fn capture(&mut self) -> Result<Frame, CaptureError> {
        if !self.path.exists() {
            return Err(CaptureError::NotFound(self.path.clone()));
        }

        let decoded = image::open(&self.path).map_err(|e| CaptureError::Decode {
            path: self.path.clone(),
            source: e,
        })?;

        let mut frame = from_rgba_image(decoded.to_rgba8());
        if frame.width == 0 || frame.height == 0 {
            return Err(CaptureError::EmptyFrame {
                width: frame.width,
                height: frame.height,
            });
        }

        if self.mirror {
            mirror_horizontal(&mut frame);
        }

        log::info!(
            "Captured {}x{} frame from {}",
            frame.width,
            frame.height,
            self.path.display()
        );
        Ok(frame)
    }
}

/// Hands out copies of a frame that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    frame: Frame,
}

impl StaticSource {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }
}

impl CaptureSource for StaticSource {
    fn capture(&mut self) -> Result<Frame, CaptureError> {
        if self.frame.width == 0 || self.frame.height == 0 {
            return Err(CaptureError::EmptyFrame {
                width: self.frame.width,
                height: self.frame.height,
            });
        }
        Ok(self.frame.clone())
    }
}
