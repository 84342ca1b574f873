//! Corridor growth from the gate through open squares

use std::collections::VecDeque;

use rand::Rng;

use crate::spatial::grid::{CellState, Coord, Grid};
use crate::spatial::squares::{OPEN_SQUARE, Square, SquareGrid};

/// One of the eight compass directions, `North` being `+y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, +1)`
    North,
    /// `(+1, +1)`
    NorthEast,
    /// `(+1, 0)`
    East,
    /// `(+1, -1)`
    SouthEast,
    /// `(0, -1)`
    South,
    /// `(-1, -1)`
    SouthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, +1)`
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Unit step; diagonals move both axes at once
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::East => (1, 0),
            Self::SouthEast => (1, -1),
            Self::South => (0, -1),
            Self::SouthWest => (-1, -1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }

    /// Uniformly random direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index = rng.random_range(0..Self::ALL.len());
        Self::ALL.get(index).copied().unwrap_or(Self::North)
    }
}

/// Corridor growth parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathConfig {
    /// Mean walk length; each walk draws from `avg - 1 ..= avg + 1`
    pub avg_length: usize,
    /// Child walks spawned from the end of a walk
    pub branches: usize,
    /// Walks of this generation or deeper no longer branch
    pub generations: usize,
}

/// Record of one directional walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathWalk {
    /// Square the walk steps away from; not itself visited
    pub origin: Coord,
    /// Fixed heading
    pub direction: Direction,
    /// Squares the walk may reserve at most
    pub target_length: usize,
    /// Squares reserved so far
    pub advanced: usize,
    /// 0 for the walk leaving the gate, +1 per branching
    pub generation: usize,
}

impl PathWalk {
    /// Square reached after `steps` steps, `None` when off the grid
    pub fn step(&self, steps: usize) -> Option<Coord> {
        let (dx, dy) = self.direction.delta();
        let steps = steps as isize;
        self.origin.offset(dx * steps, dy * steps)
    }

    /// Last reserved square, the origin when nothing was reserved
    pub fn end(&self) -> Coord {
        self.step(self.advanced).unwrap_or(self.origin)
    }
}

/// Outcome of growing the corridor network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathNetwork {
    /// Every walk in the order it ran
    pub walks: Vec<PathWalk>,
    /// Reserved squares in reservation order
    pub reserved: Vec<Coord>,
}

// Draw a target length uniformly from avg - 1 ..= avg + 1
fn draw_length<R: Rng + ?Sized>(avg_length: usize, rng: &mut R) -> usize {
    rng.random_range(avg_length.saturating_sub(1)..=avg_length + 1)
}

// Advance a walk while it is under length and the next square is fully open
fn run_walk(
    walk: &mut PathWalk,
    squares: &mut SquareGrid,
    grid: &mut Grid,
    reserved: &mut Vec<Coord>,
) {
    while walk.advanced < walk.target_length {
        let Some(next) = walk.step(walk.advanced + 1) else {
            break;
        };
        if !squares
            .configuration(next)
            .is_some_and(|c| c.is(OPEN_SQUARE))
        {
            break;
        }
        squares.reserve(next);
        grid.set(next, CellState::Path);
        reserved.push(next);
        walk.advanced += 1;
    }
}

/// Grow corridors north from the gate, then branch from walk ends
///
/// Each walk draws its length when it starts. Walks run first-in first-out;
/// a walk that reserved at least one square and sits below the generation
/// limit queues `branches` children with random headings from its end.
/// Reserved squares mark their anchor cell as `Path` in the grid.
pub fn grow_paths<R: Rng + ?Sized>(
    gate: &Square,
    squares: &mut SquareGrid,
    grid: &mut Grid,
    config: &PathConfig,
    rng: &mut R,
) -> PathNetwork {
    let mut network = PathNetwork::default();
    let mut queue = VecDeque::new();
    queue.push_back((gate.coord(), Direction::North, 0));

    while let Some((origin, direction, generation)) = queue.pop_front() {
        let mut walk = PathWalk {
            origin,
            direction,
            target_length: draw_length(config.avg_length, rng),
            advanced: 0,
            generation,
        };
        run_walk(&mut walk, squares, grid, &mut network.reserved);

        if walk.advanced > 0 && generation < config.generations {
            let end = walk.end();
            for _ in 0..config.branches {
                queue.push_back((end, Direction::random(rng), generation + 1));
            }
        }

        network.walks.push(walk);
    }

    network
}
