//! Target-size calculation for binarization.

use super::cell::Dimensions;
use super::error::LifeError;

/// Default length of the longer side after resizing.
pub const DEFAULT_MAX_DIMENSION: u32 = 512;

/// Calculate the resized dimensions of an image so that its longer side
/// becomes exactly `max_dimension`, preserving aspect ratio.
///
/// The shorter side is scaled proportionally and rounded to the nearest
/// integer (half rounds up), but never drops below 1.
///
/// # Arguments
/// * `width` - Width of the source image in pixels
/// * `height` - Height of the source image in pixels
/// * `max_dimension` - Desired length of the longer side
///
/// # Errors
/// `LifeError::InvalidDimensions` if any argument is zero.
///
/// # Example
/// ```
/// use bloom::life::target_dimensions;
///
/// let dims = target_dimensions(800, 400, 512).unwrap();
/// assert_eq!((dims.width, dims.height), (512, 256));
/// ```
pub fn target_dimensions(
    width: u32,
    height: u32,
    max_dimension: u32,
) -> Result<Dimensions, LifeError> {
    if width == 0 || height == 0 || max_dimension == 0 {
        return Err(LifeError::InvalidDimensions {
            width,
            height,
            max_dimension,
        });
    }

    // u64 keeps `short * max_dimension` from overflowing for large inputs
    let scale_short = |short: u32, long: u32| -> u32 {
        let short = short as u64;
        let long = long as u64;
        let scaled = (short * max_dimension as u64 + long / 2) / long;
        scaled.max(1) as u32
    };

    let dims = if width >= height {
        Dimensions::new(max_dimension, scale_short(height, width))
    } else {
        Dimensions::new(scale_short(width, height), max_dimension)
    };

    Ok(dims)
}
