//! Two-state cellular automaton step over a bounded (non-wrapping) grid.
//!
//! Every next-generation cell is computed from the previous generation only.
//! The input is borrowed immutably and the output is a separate buffer, so a
//! cell can never observe a partially updated neighbor.

use rayon::prelude::*;

use super::cell::{Cell, Grid};
use super::error::LifeError;

/// Moore neighborhood offsets, excluding the center.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn check_len(grid: &[Cell], width: u32, height: u32) -> Result<(), LifeError> {
    let expected = width as usize * height as usize;
    if grid.len() != expected {
        return Err(LifeError::DimensionMismatch {
            expected,
            actual: grid.len(),
        });
    }
    Ok(())
}

/// Transition rule for one cell given its live neighbor count.
///
/// Cases are evaluated in order:
/// fewer than 2 neighbors dies, a live cell with 2 or 3 survives, a live cell
/// with more than 3 dies, a dead cell with exactly 3 is born, anything else
/// stays dead.
#[inline]
pub fn next_state(current: Cell, neighbors: u8) -> Cell {
    match (current, neighbors) {
        (_, n) if n < 2 => Cell::Dead,
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Alive, _) => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}

/// Count live cells among the 8 neighbors of the cell at `index`.
///
/// Positions outside `[0, width) x [0, height)` do not contribute; there is
/// no wraparound. The caller guarantees `grid.len() == width * height` and
/// `index < grid.len()`.
pub fn live_neighbors(grid: &[Cell], width: u32, height: u32, index: usize) -> u8 {
    let w = width as i64;
    let h = height as i64;
    let x = index as i64 % w;
    let y = index as i64 / w;

    let mut count = 0u8;
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let nx = x + dx;
        let ny = y + dy;
        if nx < 0 || nx >= w || ny < 0 || ny >= h {
            continue;
        }
        if grid[(ny * w + nx) as usize].is_alive() {
            count += 1;
        }
    }
    count
}

/// Fill `out` with the next state of rows `first_row..` of `grid`.
///
/// `out` must hold a whole number of rows.
fn step_rows(grid: &[Cell], width: u32, height: u32, first_row: usize, out: &mut [Cell]) {
    let offset = first_row * width as usize;
    for (i, slot) in out.iter_mut().enumerate() {
        let index = offset + i;
        *slot = next_state(grid[index], live_neighbors(grid, width, height, index));
    }
}

/// Compute the next generation of `grid`.
///
/// Returns a brand-new grid of the same length; `grid` is untouched.
///
/// # Errors
/// `LifeError::DimensionMismatch` if `grid.len() != width * height`.
///
/// # Example
/// ```
/// use bloom::life::{step, Cell};
///
/// // A lone cell dies of isolation.
/// let grid = vec![Cell::Dead, Cell::Alive, Cell::Dead];
/// assert_eq!(step(&grid, 3, 1).unwrap(), vec![Cell::Dead; 3]);
/// ```
pub fn step(grid: &[Cell], width: u32, height: u32) -> Result<Grid, LifeError> {
    let mut next = Vec::with_capacity(grid.len());
    step_into(grid, width, height, &mut next)?;
    Ok(next)
}

/// Compute the next generation into an existing buffer to avoid allocation.
///
/// `next` is cleared and resized to `grid.len()`. Since `grid` is a shared
/// borrow and `next` a unique one, the two cannot alias.
pub fn step_into(
    grid: &[Cell],
    width: u32,
    height: u32,
    next: &mut Vec<Cell>,
) -> Result<(), LifeError> {
    check_len(grid, width, height)?;

    next.clear();
    next.resize(grid.len(), Cell::Dead);
    step_rows(grid, width, height, 0, next);

    Ok(())
}

/// Compute the next generation with rows fanned out over the current rayon
/// pool.
///
/// Each row reads the whole, unmodified input and writes only its own slice
/// of the output, so the result is identical to [`step`]. Call it inside
/// [`rayon::ThreadPool::install`] to choose the pool.
pub fn step_parallel(grid: &[Cell], width: u32, height: u32) -> Result<Grid, LifeError> {
    let mut next = Vec::with_capacity(grid.len());
    step_parallel_into(grid, width, height, &mut next)?;
    Ok(next)
}

/// Parallel counterpart of [`step_into`].
pub fn step_parallel_into(
    grid: &[Cell],
    width: u32,
    height: u32,
    next: &mut Vec<Cell>,
) -> Result<(), LifeError> {
    check_len(grid, width, height)?;

    next.clear();
    next.resize(grid.len(), Cell::Dead);
    if grid.is_empty() {
        return Ok(());
    }

    next.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| step_rows(grid, width, height, y, row));

    Ok(())
}
