//! Cell-state grid backing every generation stage
//!
//! The grid is a flat `Array2` addressed by `[x, y]`. Neighbour relations are
//! computed from coordinates on demand, so a grid can be dropped and rebuilt
//! on retry without invalidating anything that refers into it.

use ndarray::Array2;

/// State of one bitmap cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Solid boundary or hedge
    #[default]
    Wall,
    /// Free ground, eligible for graves
    Open,
    /// Ground reserved by the corridor network
    Path,
    /// The single specially placed landmark cell
    Landmark,
}

impl CellState {
    /// Whether the cell counts as an active corner for marching squares
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Whether a visitor can stand on the cell
    pub const fn is_walkable(self) -> bool {
        !self.is_wall()
    }
}

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column, growing east
    pub x: usize,
    /// Row, growing north
    pub y: usize,
}

impl Coord {
    /// Build a coordinate
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset, `None` when the result would be negative
    pub const fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

/// W×H array of cell states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    /// Create a grid with every cell set to `state`
    pub fn filled(width: usize, height: usize, state: CellState) -> Self {
        Self {
            cells: Array2::from_elem((width, height), state),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// Check whether signed coordinates fall inside the grid
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Whether a cell lies on the outer ring
    pub fn is_border(&self, coord: Coord) -> bool {
        coord.x == 0
            || coord.y == 0
            || coord.x + 1 == self.width()
            || coord.y + 1 == self.height()
    }

    /// State at a coordinate, `None` when out of range
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.cells.get([coord.x, coord.y]).copied()
    }

    /// Overwrite a cell; out-of-range writes are ignored
    pub fn set(&mut self, coord: Coord, state: CellState) {
        if let Some(cell) = self.cells.get_mut([coord.x, coord.y]) {
            *cell = state;
        }
    }

    /// Cells outside the grid read as walls
    pub fn is_wall_or_outside(&self, x: isize, y: isize) -> bool {
        if !self.in_bounds(x, y) {
            return true;
        }
        self.get(Coord::new(x as usize, y as usize))
            .is_none_or(CellState::is_wall)
    }

    /// Count walls among the 8 surrounding cells, outside counting as wall
    pub fn wall_neighbours(&self, coord: Coord) -> usize {
        let (cx, cy) = (coord.x as isize, coord.y as isize);
        let mut count = 0;
        for nx in cx - 1..=cx + 1 {
            for ny in cy - 1..=cy + 1 {
                if (nx != cx || ny != cy) && self.is_wall_or_outside(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of cells in a given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// All coordinates in scan order (`x` outer, `y` inner)
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width(), self.height());
        (0..width).flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
    }

    /// Underlying array, indexed `[x, y]`
    pub const fn cells(&self) -> &Array2<CellState> {
        &self.cells
    }
}
