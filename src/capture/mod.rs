//! Still-frame capture.
//!
//! The simulation only ever needs one frame: it is binarized once and then
//! evolved. This module provides:
//! - The [`CaptureSource`] trait the driver pulls frames from
//! - [`ImageFileSource`] for decoding an image file
//! - [`StaticSource`] for frames already in memory

mod frame_utils;
mod source;
mod types;

pub use frame_utils::{from_rgba_image, mirror_horizontal};
pub use source::{CaptureSource, ImageFileSource, StaticSource};
pub use types::{CaptureError, Frame};
