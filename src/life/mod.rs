//! Simulation core: turning a captured image into a Game of Life grid,
//! evolving it, and encoding it back into pixels.
//!
//! 1. **Binarization** - RGBA to luminance (BT.601), area-average resampling
//!    so the longer side hits a fixed size, then a global threshold
//! 2. **Evolution** - one synchronous generation per call over a bounded
//!    grid with the 8-cell Moore neighborhood (B3/S23)
//! 3. **Rendering** - alive cells become opaque white, dead cells opaque black
//!
//! All functions here are pure: no I/O, no hidden state, no clocks.

mod binarize;
mod cell;
mod dimensions;
mod engine;
mod error;
mod grayscale;
mod render;
mod resample;

pub use binarize::{binarize, binarize_with_threshold, threshold, Binarized, DEFAULT_THRESHOLD};
pub use cell::{population, Cell, Dimensions, Grid, ALIVE_VALUE, DEAD_VALUE};
pub use dimensions::{target_dimensions, DEFAULT_MAX_DIMENSION};
pub use engine::{live_neighbors, next_state, step, step_into, step_parallel, step_parallel_into};
pub use error::LifeError;
pub use grayscale::{luminance, to_grayscale, to_grayscale_into, BYTES_PER_PIXEL};
pub use render::{render, render_to_vec, OPAQUE};
pub use resample::{resample, resample_into};
