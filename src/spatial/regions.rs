//! Breadth-first flood fill over 4-connected cells
//!
//! Regions keep their cells in discovery order. The first cell is the seed
//! and the tail holds the cells of the deepest BFS layer, which the landmark
//! placement relies on.

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::{CellState, Coord, Grid};

/// Maximal 4-connected set of cells in BFS order from its seed
pub type Region = Vec<Coord>;

// Cross-shaped neighbourhood in the order of the 3×3 scan it is cut from
const CROSS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Visited flags for one grid, one bit per cell
struct VisitedCells {
    bits: BitVec,
    height: usize,
}

impl VisitedCells {
    fn new(grid: &Grid) -> Self {
        Self {
            bits: bitvec![0; grid.width() * grid.height()],
            height: grid.height(),
        }
    }

    fn contains(&self, coord: Coord) -> bool {
        self.bits
            .get(coord.x * self.height + coord.y)
            .as_deref()
            .copied()
            .unwrap_or(true)
    }

    fn insert(&mut self, coord: Coord) {
        let index = coord.x * self.height + coord.y;
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }
}

// Shared BFS, marking every accepted cell in `visited`
fn flood<F>(grid: &Grid, seed: Coord, visited: &mut VisitedCells, accept: &F) -> Region
where
    F: Fn(CellState) -> bool,
{
    let mut cells = Vec::new();
    let mut queue = VecDeque::new();
    visited.insert(seed);
    queue.push_back(seed);

    while let Some(cell) = queue.pop_front() {
        cells.push(cell);

        for (dx, dy) in CROSS {
            let Some(next) = cell.offset(dx, dy) else {
                continue;
            };
            if visited.contains(next) {
                continue;
            }
            if grid.get(next).is_some_and(accept) {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }

    cells
}

/// Find every region of `state`, in scan order of their first cell
pub fn find_regions(grid: &Grid, state: CellState) -> Vec<Region> {
    let mut visited = VisitedCells::new(grid);
    let mut regions = Vec::new();

    for coord in grid.coords() {
        if !visited.contains(coord) && grid.get(coord) == Some(state) {
            let same_state = |cell: CellState| cell == state;
            regions.push(flood(grid, coord, &mut visited, &same_state));
        }
    }

    regions
}

/// Region of whatever state the seed cell holds
///
/// # Errors
///
/// Returns `EmptyRegion` if the seed lies outside the grid
pub fn region_from(grid: &Grid, seed: Coord) -> Result<Region> {
    let state = grid.get(seed).ok_or(GenerationError::EmptyRegion {
        x: seed.x,
        y: seed.y,
    })?;
    region_matching(grid, seed, |cell: CellState| cell == state)
}

/// Region of cells satisfying `accept`, flooded from `seed`
///
/// # Errors
///
/// Returns `EmptyRegion` if the seed lies outside the grid or is rejected
/// by `accept` itself
pub fn region_matching<F>(grid: &Grid, seed: Coord, accept: F) -> Result<Region>
where
    F: Fn(CellState) -> bool,
{
    if !grid.get(seed).is_some_and(&accept) {
        return Err(GenerationError::EmptyRegion {
            x: seed.x,
            y: seed.y,
        });
    }
    let mut visited = VisitedCells::new(grid);
    Ok(flood(grid, seed, &mut visited, &accept))
}

/// Flip every cell of a region to `state`
pub fn fill_region(grid: &mut Grid, region: &[Coord], state: CellState) {
    for &coord in region {
        grid.set(coord, state);
    }
}
