//! Error types for the binarize / step / render core.

/// Precondition violations on inputs to the simulation core.
///
/// None of these are recoverable inside the core: the same input always
/// produces the same error, so the caller decides whether to abort or skip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    #[error("invalid dimensions {width}x{height} (max dimension {max_dimension}): all must be positive")]
    InvalidDimensions {
        width: u32,
        height: u32,
        max_dimension: u32,
    },

    #[error("pixel buffer has {actual} bytes, expected {expected} (width * height * 4)")]
    BufferLengthMismatch { expected: usize, actual: usize },

    #[error("grid has {actual} cells, expected {expected} (width * height)")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("pixel buffer too small: need at least {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}
