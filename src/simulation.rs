//! Owned simulation state.
//!
//! A [`Simulation`] holds the current generation and its dimensions. Each
//! [`tick`](Simulation::tick) computes the next generation into a separate
//! buffer and swaps it in whole; nothing else holds on to the grid.

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::capture::Frame;
use crate::life::{
    binarize_with_threshold, population, render, render_to_vec, step_into, step_parallel_into,
    Cell, Dimensions, Grid, LifeError, DEFAULT_MAX_DIMENSION, DEFAULT_THRESHOLD,
};

/// How a captured frame is turned into generation 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarizeSettings {
    /// Length of the longer grid side
    pub max_dimension: u32,
    /// Luminance at or above which a cell starts alive
    pub threshold: u8,
}

impl Default for BinarizeSettings {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// A running Game of Life seeded from an image.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    scratch: Grid,
    dimensions: Dimensions,
    generation: u64,
    /// Pool for the row fan-out; `None` steps on the calling thread
    pool: Option<Arc<ThreadPool>>,
}

impl Simulation {
    /// Start a simulation from an existing grid.
    ///
    /// # Errors
    /// `LifeError::DimensionMismatch` if `grid.len()` is not `dimensions.area()`.
    pub fn from_grid(grid: Grid, dimensions: Dimensions) -> Result<Self, LifeError> {
        if grid.len() != dimensions.area() {
            return Err(LifeError::DimensionMismatch {
                expected: dimensions.area(),
                actual: grid.len(),
            });
        }

        Ok(Self {
            scratch: Vec::with_capacity(grid.len()),
            grid,
            dimensions,
            generation: 0,
            pool: None,
        })
    }

    /// Binarize an RGBA buffer into generation 0.
    pub fn from_pixels(
        pixels: &[u8],
        width: u32,
        height: u32,
        settings: &BinarizeSettings,
    ) -> Result<Self, LifeError> {
        let binarized = binarize_with_threshold(
            pixels,
            width,
            height,
            settings.max_dimension,
            settings.threshold,
        )?;
        Self::from_grid(binarized.grid, binarized.dimensions)
    }

    /// Binarize a captured frame into generation 0.
    pub fn from_frame(frame: &Frame, settings: &BinarizeSettings) -> Result<Self, LifeError> {
        Self::from_pixels(&frame.data, frame.width, frame.height, settings)
    }

    /// Split each step across `workers` threads (1 = single-threaded).
    ///
    /// The pool is built once here and reused by every tick. If it cannot be
    /// built, the simulation stays single-threaded.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.pool = None;
        if workers <= 1 {
            return self;
        }

        match ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => self.pool = Some(Arc::new(pool)),
            Err(e) => log::warn!(
                "Could not start {} step threads, stepping serially: {}",
                workers,
                e
            ),
        }
        self
    }

    /// Threads used per step.
    pub fn workers(&self) -> usize {
        self.pool.as_ref().map_or(1, |pool| pool.current_num_threads())
    }

    /// Advance one generation.
    ///
    /// Returns `true` if any cell changed.
    pub fn tick(&mut self) -> Result<bool, LifeError> {
        let Dimensions { width, height } = self.dimensions;

        match &self.pool {
            Some(pool) => {
                let (grid, scratch) = (&self.grid, &mut self.scratch);
                pool.install(|| step_parallel_into(grid, width, height, scratch))?;
            }
            None => step_into(&self.grid, width, height, &mut self.scratch)?,
        }

        let changed = self.scratch != self.grid;
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;

        Ok(changed)
    }

    /// Encode the current generation into an RGBA buffer.
    pub fn render_into(&self, pixels: &mut [u8]) -> Result<(), LifeError> {
        render(&self.grid, pixels)
    }

    /// Encode the current generation into a new RGBA buffer.
    pub fn render_to_vec(&self) -> Vec<u8> {
        render_to_vec(&self.grid)
    }

    pub fn grid(&self) -> &[Cell] {
        &self.grid
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of ticks applied since generation 0.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        population(&self.grid)
    }
}
