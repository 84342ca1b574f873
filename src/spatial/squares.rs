//! Marching-squares classification of the cell grid
//!
//! Square `(x, y)` spans grid cells `(x, y)` to `(x + 1, y + 1)`. The `y`
//! axis grows north, so the bottom edge of a square is row `y` and its top
//! edge is row `y + 1`. Each corner holding a wall sets one bit:
//!
//! | bit | corner       | cell           |
//! |-----|--------------|----------------|
//! | 8   | top-left     | `(x, y+1)`     |
//! | 4   | top-right    | `(x+1, y+1)`   |
//! | 2   | bottom-right | `(x+1, y)`     |
//! | 1   | bottom-left  | `(x, y)`       |

use ndarray::Array2;

use crate::spatial::grid::{Coord, Grid};

/// Configuration with every corner open
pub const OPEN_SQUARE: u8 = 0;
/// Configuration with a flat wall along the bottom edge
pub const FLAT_BOTTOM: u8 = 0b0011;
/// Configuration with every corner walled
pub const SOLID_SQUARE: u8 = 0b1111;

/// Classification of one square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Configuration {
    /// Geometric corner mask in `0..=15`
    Corners(u8),
    /// Consumed by the corridor network
    ReservedForPath,
}

impl Configuration {
    /// Corner mask, `None` once reserved
    pub const fn corners(self) -> Option<u8> {
        match self {
            Self::Corners(mask) => Some(mask),
            Self::ReservedForPath => None,
        }
    }

    /// Whether the square holds exactly this corner mask
    pub const fn is(self, mask: u8) -> bool {
        matches!(self, Self::Corners(m) if m == mask)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::Corners(OPEN_SQUARE)
    }
}

/// A square together with its position in the derived grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    /// Square column
    pub x: usize,
    /// Square row
    pub y: usize,
    /// Classification at the time the square was read
    pub configuration: Configuration,
}

impl Square {
    /// Position in the square grid
    pub const fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Top-left corner cell
    pub const fn top_left(&self) -> Coord {
        Coord::new(self.x, self.y + 1)
    }

    /// Top-right corner cell
    pub const fn top_right(&self) -> Coord {
        Coord::new(self.x + 1, self.y + 1)
    }

    /// Bottom-right corner cell
    pub const fn bottom_right(&self) -> Coord {
        Coord::new(self.x + 1, self.y)
    }

    /// Bottom-left corner cell, also the square's anchor cell
    pub const fn bottom_left(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// (W-1)×(H-1) grid of square configurations, indexed `[x, y]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareGrid {
    configurations: Array2<Configuration>,
}

impl SquareGrid {
    /// Number of square columns
    pub fn width(&self) -> usize {
        self.configurations.dim().0
    }

    /// Number of square rows
    pub fn height(&self) -> usize {
        self.configurations.dim().1
    }

    /// Square at a position, `None` when out of range
    pub fn get(&self, coord: Coord) -> Option<Square> {
        self.configurations
            .get([coord.x, coord.y])
            .map(|&configuration| Square {
                x: coord.x,
                y: coord.y,
                configuration,
            })
    }

    /// Configuration at a position, `None` when out of range
    pub fn configuration(&self, coord: Coord) -> Option<Configuration> {
        self.configurations.get([coord.x, coord.y]).copied()
    }

    /// Mark a square as consumed by a corridor
    pub fn reserve(&mut self, coord: Coord) {
        if let Some(configuration) = self.configurations.get_mut([coord.x, coord.y]) {
            *configuration = Configuration::ReservedForPath;
        }
    }

    /// Number of squares reserved for corridors
    pub fn reserved_count(&self) -> usize {
        self.configurations
            .iter()
            .filter(|&&c| c == Configuration::ReservedForPath)
            .count()
    }

    /// Underlying array, indexed `[x, y]`
    pub const fn configurations(&self) -> &Array2<Configuration> {
        &self.configurations
    }
}

/// Corner mask of the square anchored at `(x, y)`
///
/// Corners outside the grid count as walls, so the mask is defined for any
/// anchor, not just those of the derived grid.
pub fn corner_mask(grid: &Grid, x: isize, y: isize) -> u8 {
    let mut mask = 0;
    if grid.is_wall_or_outside(x, y + 1) {
        mask |= 8;
    }
    if grid.is_wall_or_outside(x + 1, y + 1) {
        mask |= 4;
    }
    if grid.is_wall_or_outside(x + 1, y) {
        mask |= 2;
    }
    if grid.is_wall_or_outside(x, y) {
        mask |= 1;
    }
    mask
}

/// Classify every square of the grid
///
/// Pure with respect to the grid; rerun it after any bitmap change.
pub fn classify(grid: &Grid) -> SquareGrid {
    let width = grid.width().saturating_sub(1);
    let height = grid.height().saturating_sub(1);
    let configurations = Array2::from_shape_fn((width, height), |(x, y)| {
        Configuration::Corners(corner_mask(grid, x as isize, y as isize))
    });
    SquareGrid { configurations }
}
