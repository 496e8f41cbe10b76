//! Converting captured pixel buffers into live/dead grids.
//!
//! The pipeline is grayscale → resample → threshold. A single global
//! threshold is applied to every resampled pixel; there is no adaptivity.

use super::cell::{Cell, Dimensions, Grid};
use super::dimensions::target_dimensions;
use super::error::LifeError;
use super::grayscale::{to_grayscale, BYTES_PER_PIXEL};
use super::resample::resample;

/// Default threshold: mid-gray. Luminance at or above it is alive.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Result of binarizing an image: the generation-0 grid and its size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binarized {
    pub grid: Grid,
    pub dimensions: Dimensions,
}

/// Apply a fixed threshold to an already-sized luminance plane.
pub fn threshold(luma: &[u8], threshold: u8) -> Grid {
    luma.iter().map(|&y| Cell::from(y >= threshold)).collect()
}

/// Binarize an RGBA pixel buffer using the default threshold.
///
/// See [`binarize_with_threshold`].
pub fn binarize(
    pixels: &[u8],
    width: u32,
    height: u32,
    max_dimension: u32,
) -> Result<Binarized, LifeError> {
    binarize_with_threshold(pixels, width, height, max_dimension, DEFAULT_THRESHOLD)
}

/// Binarize an RGBA pixel buffer into a grid whose longer side is
/// `max_dimension` cells.
///
/// # Arguments
/// * `pixels` - Interleaved RGBA samples, `width * height * 4` bytes
/// * `width` - Width of the image in pixels
/// * `height` - Height of the image in pixels
/// * `max_dimension` - Length of the longer side of the output grid
/// * `threshold_value` - Luminance at or above which a cell is alive
///
/// # Errors
/// * `LifeError::InvalidDimensions` - a dimension or `max_dimension` is zero
/// * `LifeError::BufferLengthMismatch` - `pixels` is not `width * height * 4` long
pub fn binarize_with_threshold(
    pixels: &[u8],
    width: u32,
    height: u32,
    max_dimension: u32,
    threshold_value: u8,
) -> Result<Binarized, LifeError> {
    let target = target_dimensions(width, height, max_dimension)?;
    let source = Dimensions::new(width, height);

    let expected = source.area() * BYTES_PER_PIXEL;
    if pixels.len() != expected {
        return Err(LifeError::BufferLengthMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let gray = to_grayscale(pixels);
    let resized = resample(&gray, source, target);
    let grid = threshold(&resized, threshold_value);

    debug_assert_eq!(grid.len(), target.area());

    Ok(Binarized {
        grid,
        dimensions: target,
    })
}
