//! Area-average resampling of single-channel planes.

use super::cell::Dimensions;

/// Source pixel span `[start, end)` covered by output index `i`.
///
/// Uses integer math so the mapping is exact and deterministic. When
/// enlarging, a span would be empty; it is widened to one pixel so every
/// output cell samples something (nearest-neighbor behavior).
#[inline]
fn span(i: u32, src: u32, dst: u32) -> (u32, u32) {
    let start = (i as u64 * src as u64 / dst as u64) as u32;
    let end = ((i as u64 + 1) * src as u64 / dst as u64) as u32;
    let start = start.min(src - 1);
    (start, end.max(start + 1).min(src))
}

/// Resample a grayscale plane to new dimensions.
///
/// Each output value is the average of all source pixels that fall inside
/// its cell. At identical dimensions this is an exact copy.
///
/// # Arguments
/// * `gray` - Grayscale pixel data (one byte per pixel, row-major order)
/// * `src` - Dimensions of `gray`
/// * `dst` - Desired output dimensions
///
/// # Returns
/// A vector of `dst.area()` values, or an empty vector if either size is
/// zero or `gray` is shorter than `src.area()`.
pub fn resample(gray: &[u8], src: Dimensions, dst: Dimensions) -> Vec<u8> {
    let mut out = Vec::new();
    resample_into(gray, src, dst, &mut out);
    out
}

/// Resample a grayscale plane into an existing buffer.
///
/// Returns the number of values written.
pub fn resample_into(gray: &[u8], src: Dimensions, dst: Dimensions, buffer: &mut Vec<u8>) -> usize {
    buffer.clear();

    if src.area() == 0 || dst.area() == 0 || gray.len() < src.area() {
        return 0;
    }

    if src == dst {
        buffer.extend_from_slice(&gray[..src.area()]);
        return buffer.len();
    }

    buffer.reserve(dst.area());
    let row_stride = src.width as usize;

    for cy in 0..dst.height {
        let (start_y, end_y) = span(cy, src.height, dst.height);
        for cx in 0..dst.width {
            let (start_x, end_x) = span(cx, src.width, dst.width);

            let mut sum = 0u64;
            let mut count = 0u64;
            for py in start_y..end_y {
                let row = py as usize * row_stride;
                for px in start_x..end_x {
                    sum += gray[row + px as usize] as u64;
                    count += 1;
                }
            }

            buffer.push((sum / count) as u8);
        }
    }

    buffer.len()
}
