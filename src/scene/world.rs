//! World-space layout and the scene placement hook
//!
//! Rendering layers consume generated grids through [`ScenePlacer`]: one call
//! per cell a visitor can see, carrying its world position. The camera and
//! player layers only need [`WorldLayout::spawn_point`].

use crate::io::configuration::{DEFAULT_SPACING_X, DEFAULT_SPACING_Y};
use crate::spatial::grid::{CellState, Coord, Grid};
use crate::spatial::squares::Square;

/// Mapping from grid coordinates to world space
///
/// The grid is centred on the origin. Grid `x` maps to world `x`, grid `y`
/// to world `z`; world `y` is height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldLayout {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// World units between cells along x
    pub spacing_x: f32,
    /// World units between cells along z
    pub spacing_y: f32,
}

impl WorldLayout {
    /// Layout for a grid with explicit spacing
    pub const fn new(width: usize, height: usize, spacing_x: f32, spacing_y: f32) -> Self {
        Self {
            width,
            height,
            spacing_x,
            spacing_y,
        }
    }

    /// Layout for a grid with the default spacing
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(
            grid.width(),
            grid.height(),
            DEFAULT_SPACING_X,
            DEFAULT_SPACING_Y,
        )
    }

    /// World position of a cell centre on the ground plane
    pub fn world_position(&self, coord: Coord) -> [f32; 3] {
        [
            self.spacing_x.mul_add(coord.x as f32, -self.spacing_x * self.width as f32 / 2.0),
            0.0,
            self.spacing_y.mul_add(coord.y as f32, -self.spacing_y * self.height as f32 / 2.0),
        ]
    }

    /// Where the player enters: midway between the gate's two top corners
    pub fn spawn_point(&self, gate: &Square) -> [f32; 3] {
        let left = self.world_position(gate.top_left());
        let right = self.world_position(gate.top_right());
        [
            (left[0] + right[0]) / 2.0,
            0.0,
            (left[2] + right[2]) / 2.0,
        ]
    }
}

/// Consumer of placeable cells, implemented by rendering layers
pub trait ScenePlacer {
    /// Called once per `Open`, `Path` or `Landmark` cell
    fn place(&mut self, position: [f32; 3], coord: Coord, state: CellState);
}

impl<F> ScenePlacer for F
where
    F: FnMut([f32; 3], Coord, CellState),
{
    fn place(&mut self, position: [f32; 3], coord: Coord, state: CellState) {
        self(position, coord, state);
    }
}

/// Hand every non-wall cell to a placer in scan order
///
/// Returns the number of cells placed.
pub fn place_scene<P: ScenePlacer + ?Sized>(
    grid: &Grid,
    layout: &WorldLayout,
    placer: &mut P,
) -> usize {
    let mut placed = 0;
    for coord in grid.coords() {
        let Some(state) = grid.get(coord) else {
            continue;
        };
        if state.is_walkable() {
            placer.place(layout.world_position(coord), coord, state);
            placed += 1;
        }
    }
    placed
}
