//! Gate selection on flat three-square openings

use rand::Rng;

use crate::io::error::{GenerationError, Result};
use crate::math::probability::RisingChance;
use crate::spatial::grid::Coord;
use crate::spatial::squares::{FLAT_BOTTOM, Square, SquareGrid};

/// Collect squares with a flat bottom wall flanked by two more of the same
///
/// Scans `x` from `width - 2` down to `1` and, within each column, `y` from
/// `height - 2` down to `0`. Both neighbours and the square above every
/// candidate therefore exist.
pub fn gate_candidates(squares: &SquareGrid) -> Vec<Square> {
    let mut candidates = Vec::new();
    let x_max = squares.width().saturating_sub(2);
    let y_max = squares.height().saturating_sub(2);
    if squares.width() < 3 || squares.height() < 2 {
        return candidates;
    }

    for x in (1..=x_max).rev() {
        for y in (0..=y_max).rev() {
            let is_flat = |cx: usize| {
                squares
                    .configuration(Coord::new(cx, y))
                    .is_some_and(|c| c.is(FLAT_BOTTOM))
            };
            let flanked = is_flat(x) && is_flat(x - 1) && is_flat(x + 1);
            if let Some(square) = squares.get(Coord::new(x, y)).filter(|_| flanked) {
                candidates.push(square);
            }
        }
    }

    candidates
}

/// Commit to one gate candidate
///
/// Walks the candidates in scan order with a chance starting at `1/n` and
/// rising by `1/n` after each rejection, so later candidates are favoured.
///
/// # Errors
///
/// Returns `NoGateFound` if there are no candidates or every one is rejected
pub fn select_gate<R: Rng + ?Sized>(squares: &SquareGrid, rng: &mut R) -> Result<Square> {
    let candidates = gate_candidates(squares);
    let mut chance = RisingChance::uniform_ramp(candidates.len());

    for &candidate in &candidates {
        if chance.trial(rng) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::NoGateFound {
        candidates: candidates.len(),
    })
}
