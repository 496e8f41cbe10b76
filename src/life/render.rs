//! Encoding grids back into RGBA pixel buffers.

use super::cell::Cell;
use super::error::LifeError;
use super::grayscale::BYTES_PER_PIXEL;

/// Opacity written for every rendered pixel.
pub const OPAQUE: u8 = 255;

fn encode(grid: &[Cell], pixels: &mut [u8]) {
    for (cell, px) in grid.iter().zip(pixels.chunks_exact_mut(BYTES_PER_PIXEL)) {
        let v = cell.value();
        px.copy_from_slice(&[v, v, v, OPAQUE]);
    }
}

/// Write `grid` into `pixels`: alive cells white, dead cells black, all
/// fully opaque.
///
/// Only the first `grid.len() * 4` bytes are written; anything after is
/// left as is.
///
/// # Errors
/// `LifeError::BufferTooSmall` if `pixels` is shorter than `grid.len() * 4`.
/// Nothing is written in that case.
pub fn render(grid: &[Cell], pixels: &mut [u8]) -> Result<(), LifeError> {
    let required = grid.len() * BYTES_PER_PIXEL;
    if pixels.len() < required {
        return Err(LifeError::BufferTooSmall {
            required,
            actual: pixels.len(),
        });
    }

    encode(grid, pixels);
    Ok(())
}

/// Render `grid` into a freshly allocated buffer of exactly `grid.len() * 4`
/// bytes.
pub fn render_to_vec(grid: &[Cell]) -> Vec<u8> {
    let mut pixels = vec![0; grid.len() * BYTES_PER_PIXEL];
    encode(grid, &mut pixels);
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_colors() {
        let grid = vec![Cell::Alive, Cell::Dead];
        let mut pixels = vec![7; 8];
        render(&grid, &mut pixels).unwrap();
        assert_eq!(pixels, vec![255, 255, 255, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_render_leaves_tail_untouched() {
        let grid = vec![Cell::Dead];
        let mut pixels = vec![9; 6];
        render(&grid, &mut pixels).unwrap();
        assert_eq!(pixels, vec![0, 0, 0, 255, 9, 9]);
    }

    #[test]
    fn test_render_buffer_too_small() {
        let grid = vec![Cell::Alive; 3];
        let mut pixels = vec![1; 11];
        let err = render(&grid, &mut pixels).unwrap_err();
        assert_eq!(
            err,
            LifeError::BufferTooSmall {
                required: 12,
                actual: 11
            }
        );
        assert_eq!(pixels, vec![1; 11]);
    }

    #[test]
    fn test_render_to_vec() {
        let grid = vec![Cell::Dead, Cell::Alive];
        assert_eq!(render_to_vec(&grid), vec![0, 0, 0, 255, 255, 255, 255, 255]);
    }
}
