//! Frame conversion and transformation utilities.

use image::RgbaImage;

use super::types::Frame;

/// Convert a decoded RGBA image into a `Frame`.
pub fn from_rgba_image(image: RgbaImage) -> Frame {
    let (width, height) = image.dimensions();
    Frame::new(image.into_raw(), width, height)
}

/// Mirror a frame horizontally (flip left-right) for selfie mode.
pub fn mirror_horizontal(frame: &mut Frame) {
    let width = frame.width as usize;
    let bpp = frame.bytes_per_pixel();
    let stride = width * bpp;

    if stride == 0 {
        return;
    }

    for row in frame.data.chunks_exact_mut(stride) {
        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_horizontal_2x1() {
        let mut frame = Frame::new(vec![1, 2, 3, 4, 5, 6, 7, 8], 2, 1);
        mirror_horizontal(&mut frame);
        assert_eq!(frame.data, vec![5, 6, 7, 8, 1, 2, 3, 4]);
    }

    #[test]
    fn test_mirror_horizontal_3x2() {
        // Row 0: [A, B, C]
        // Row 1: [D, E, F]
        let mut frame = Frame::new(
            vec![
                1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, // Row 0
                4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, // Row 1
            ],
            3,
            2,
        );
        mirror_horizontal(&mut frame);
        assert_eq!(
            frame.data,
            vec![
                3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, // Row 0: C, B, A
                6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, // Row 1: F, E, D
            ]
        );
    }

    #[test]
    fn test_mirror_horizontal_single_pixel() {
        let mut frame = Frame::new(vec![1, 2, 3, 4], 1, 1);
        mirror_horizontal(&mut frame);
        assert_eq!(frame.data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_rgba_image() {
        let image = RgbaImage::from_raw(2, 1, vec![10, 20, 30, 40, 50, 60, 70, 80]).unwrap();
        let frame = from_rgba_image(image);
        assert_eq!((frame.width, frame.height), (2, 1));
        assert_eq!(frame.data, vec![10, 20, 30, 40, 50, 60, 70, 80]);
    }
}
