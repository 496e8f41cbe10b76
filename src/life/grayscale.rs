//! RGBA to grayscale conversion using ITU-R BT.601 luminance formula.

/// Bytes per pixel in the interleaved RGBA buffers used at the boundary.
pub const BYTES_PER_PIXEL: usize = 4;

/// Luminance of a single RGB sample, using integer math.
///
/// The coefficients are scaled by 1000 (299 + 587 + 114 = 1000), so pure
/// white maps to exactly 255 and pure black to 0.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as u32, g as u32, b as u32);
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}

/// Convert an RGBA buffer to grayscale, one byte per pixel.
///
/// The opacity channel is ignored. Any trailing partial pixel is dropped.
pub fn to_grayscale(rgba: &[u8]) -> Vec<u8> {
    let mut gray = Vec::with_capacity(rgba.len() / BYTES_PER_PIXEL);
    to_grayscale_into(rgba, &mut gray);
    gray
}

/// Convert an RGBA buffer to grayscale, reusing an existing buffer.
///
/// Returns the number of pixels written.
pub fn to_grayscale_into(rgba: &[u8], buffer: &mut Vec<u8>) -> usize {
    buffer.clear();
    buffer.reserve(rgba.len() / BYTES_PER_PIXEL);

    for px in rgba.chunks_exact(BYTES_PER_PIXEL) {
        buffer.push(luminance(px[0], px[1], px[2]));
    }

    buffer.len()
}
