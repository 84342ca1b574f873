//! Landmark placement biased toward the far end of the gate's region

use rand::Rng;

use crate::io::configuration::{LANDMARK_INITIAL_CHANCE, LANDMARK_RAMP_FRACTION};
use crate::io::error::{GenerationError, Result};
use crate::math::probability::RisingChance;
use crate::spatial::grid::{CellState, Coord, Grid};
use crate::spatial::regions::region_matching;
use crate::spatial::squares::Square;

/// Open cells reachable from the gate, nearest first
///
/// Floods from the gate's top-left corner over walkable cells so corridors
/// do not cut the gate's area apart, then keeps only the `Open` cells.
///
/// # Errors
///
/// Returns `EmptyRegion` if the cell above the gate is a wall
pub fn landmark_candidates(grid: &Grid, gate: &Square) -> Result<Vec<Coord>> {
    let region = region_matching(grid, gate.top_left(), CellState::is_walkable)?;
    Ok(region
        .into_iter()
        .filter(|&coord| grid.get(coord) == Some(CellState::Open))
        .collect())
}

/// Pick a cell from the tail of a BFS-ordered list
///
/// The last cell is accepted with chance 0.2; every rejection drops it and
/// raises the chance by `0.8 / (0.4 n)`, reaching certainty after `0.4 n`
/// rejections. A single remaining cell is taken without a draw.
pub fn sample_tail<R: Rng + ?Sized>(candidates: &[Coord], rng: &mut R) -> Option<Coord> {
    let size = candidates.len() as f64;
    let increment = (1.0 - LANDMARK_INITIAL_CHANCE) / (LANDMARK_RAMP_FRACTION * size);
    let mut chance = RisingChance::new(LANDMARK_INITIAL_CHANCE, increment);
    let mut remaining = candidates;

    while let [rest @ .., last] = remaining {
        if rest.is_empty() || chance.trial(rng) {
            return Some(*last);
        }
        remaining = rest;
    }

    None
}

/// Choose and mark the landmark cell
///
/// # Errors
///
/// Returns `EmptyRegion` if the gate does not open onto walkable ground, or
/// `NoLandmarkSite` when corridors left no open cell in its region
pub fn place_landmark<R: Rng + ?Sized>(
    grid: &mut Grid,
    gate: &Square,
    rng: &mut R,
) -> Result<Coord> {
    let candidates = landmark_candidates(grid, gate)?;
    let chosen = sample_tail(&candidates, rng).ok_or(GenerationError::NoLandmarkSite {
        gate_x: gate.x,
        gate_y: gate.y,
    })?;
    grid.set(chosen, CellState::Landmark);
    Ok(chosen)
}
