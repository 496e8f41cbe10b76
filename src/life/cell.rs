//! Cell states, grids, and grid dimensions.

use std::fmt;

/// Scalar value written for a live cell when encoding to pixels.
pub const ALIVE_VALUE: u8 = 255;

/// Scalar value written for a dead cell when encoding to pixels.
pub const DEAD_VALUE: u8 = 0;

/// State of a single cell. There are exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Whether the cell is alive.
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The intensity used for all three color channels when rendering.
    pub fn value(self) -> u8 {
        match self {
            Cell::Alive => ALIVE_VALUE,
            Cell::Dead => DEAD_VALUE,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// One generation of the automaton, row-major, one entry per pixel.
///
/// Width and height always travel next to the grid, never inside it.
pub type Grid = Vec<Cell>;

/// Width and height of a grid or image in cells/pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells (`width * height`).
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Number of live cells in a grid.
pub fn population(grid: &[Cell]) -> usize {
    grid.iter().filter(|c| c.is_alive()).count()
}
