//! Frame presentation.
//!
//! Rendered generations are handed to a [`FrameSink`]. The crate ships a
//! sink that writes numbered PNG files and one that discards frames.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::life::Dimensions;

/// Errors that can occur while presenting a frame.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to create output directory '{}': {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write image '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("pixel buffer of {actual} bytes does not match a {dimensions} RGBA frame")]
    InvalidFrame { dimensions: Dimensions, actual: usize },
}

/// Receives each displayed frame.
pub trait FrameSink {
    /// Present one frame. `generation` is the generation shown (0 during
    /// warm-up).
    fn present(
        &mut self,
        pixels: &[u8],
        dimensions: Dimensions,
        generation: u64,
    ) -> Result<(), DisplayError>;
}

/// Discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _: &[u8], _: Dimensions, _: u64) -> Result<(), DisplayError> {
        Ok(())
    }
}

/// Writes every presented frame to `<dir>/frame_NNNNNN.png`.
///
/// Frames are numbered by presentation order, not by generation, so the
/// warm-up frames form the start of the sequence.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    next_index: u64,
}

impl PngSequenceSink {
    /// Create the sink, creating `dir` if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, DisplayError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| DisplayError::CreateDir {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self { dir, next_index: 0 })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn frame_path(&self, index: u64) -> PathBuf {
        self.dir.join(format!("frame_{:06}.png", index))
    }
}

impl FrameSink for PngSequenceSink {
    fn present(
        &mut self,
        pixels: &[u8],
        dimensions: Dimensions,
        generation: u64,
    ) -> Result<(), DisplayError> {
        let path = self.frame_path(self.next_index);
        save_png(pixels, dimensions, &path)?;
        log::debug!("Wrote generation {} to {}", generation, path.display());
        self.next_index += 1;
        Ok(())
    }
}

/// Save an RGBA buffer as a PNG image.
pub fn save_png(pixels: &[u8], dimensions: Dimensions, path: &Path) -> Result<(), DisplayError> {
    let image = RgbaImage::from_raw(dimensions.width, dimensions.height, pixels.to_vec())
        .ok_or(DisplayError::InvalidFrame {
            dimensions,
            actual: pixels.len(),
        })?;

    image.save(path).map_err(|e| DisplayError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
