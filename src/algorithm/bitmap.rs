//! Random fill and cellular automaton smoothing of the bitmap

use rand::Rng;

use crate::io::configuration::{OPEN_BIRTH_THRESHOLD, SMOOTHING_PASSES, WALL_BIRTH_THRESHOLD};
use crate::spatial::grid::{CellState, Grid};

/// Seed a grid: walled border, interior walls with probability `fill_percent`
///
/// Draws one uniform value per interior cell, `x` outer and `y` inner.
pub fn random_fill<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    fill_percent: f64,
    rng: &mut R,
) -> Grid {
    let mut grid = Grid::filled(width, height, CellState::Wall);

    for coord in grid.coords() {
        if grid.is_border(coord) {
            continue;
        }
        let state = if rng.random::<f64>() < fill_percent {
            CellState::Wall
        } else {
            CellState::Open
        };
        grid.set(coord, state);
    }

    grid
}

/// Run one whole-grid automaton generation
///
/// Every cell reads the previous generation only. More than
/// `WALL_BIRTH_THRESHOLD` wall neighbours makes a wall, fewer than
/// `OPEN_BIRTH_THRESHOLD` makes open ground, anything between keeps its state.
pub fn smooth_once(grid: &Grid) -> Grid {
    let mut next = grid.clone();

    for coord in grid.coords() {
        let walls = grid.wall_neighbours(coord);
        if walls > WALL_BIRTH_THRESHOLD {
            next.set(coord, CellState::Wall);
        } else if walls < OPEN_BIRTH_THRESHOLD {
            next.set(coord, CellState::Open);
        }
    }

    next
}

/// Fill and smooth a fresh bitmap with the standard number of passes
pub fn generate_bitmap<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    fill_percent: f64,
    rng: &mut R,
) -> Grid {
    let mut grid = random_fill(width, height, fill_percent, rng);
    for _ in 0..SMOOTHING_PASSES {
        grid = smooth_once(&grid);
    }
    grid
}
