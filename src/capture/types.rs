//! Capture types and data structures.

use std::path::PathBuf;

use crate::life::{Dimensions, BYTES_PER_PIXEL};

/// A captured still frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data in RGBA format (4 bytes per pixel)
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl Frame {
    /// Build a frame from RGBA data.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// A frame filled with a single opaque gray level.
    pub fn solid(width: u32, height: u32, level: u8) -> Self {
        let pixels = width as usize * height as usize;
        let data = [level, level, level, 255].repeat(pixels);
        Self::new(data, width, height)
    }

    /// Get the number of bytes per pixel (always 4 for RGBA).
    pub fn bytes_per_pixel(&self) -> usize {
        BYTES_PER_PIXEL
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Errors that can occur while capturing a frame.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("input image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to decode image '{}': {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("captured frame is empty ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_bytes_per_pixel() {
        let frame = Frame::new(vec![0; 8], 2, 1);
        assert_eq!(frame.bytes_per_pixel(), 4);
        assert_eq!(frame.dimensions(), Dimensions::new(2, 1));
    }

    #[test]
    fn test_solid_frame() {
        let frame = Frame::solid(2, 2, 200);
        assert_eq!(frame.data.len(), 16);
        assert_eq!(&frame.data[..4], &[200, 200, 200, 255]);
    }

    #[test]
    fn test_capture_error_display() {
        let err = CaptureError::NotFound(PathBuf::from("/tmp/missing.png"));
        assert_eq!(format!("{}", err), "input image not found: /tmp/missing.png");

        let err = CaptureError::EmptyFrame {
            width: 0,
            height: 4,
        };
        assert!(format!("{}", err).contains("0x4"));
    }
}
