//! Decorative prop scatter over placeable cells

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::scene::world::{ScenePlacer, WorldLayout};
use crate::spatial::grid::{CellState, Coord};

/// Height offset keeping tree meshes out of the ground
pub const TREE_LIFT: f32 = 3.0;
/// Height offset of lamp posts
pub const LAMP_LIFT: f32 = 2.7;
/// Tilt applied to meshes authored lying down
pub const UPRIGHT_TILT: f32 = 270.0;
/// Number of discrete yaw steps
pub const ROTATION_STEPS: u32 = 12;
/// Degrees per yaw step
pub const ROTATION_STEP_DEGREES: f32 = 30.0;
// Rolls 0..=8 are graves, 9 a tree, 10 a lamp
const PROP_ROLLS: u32 = 11;

/// Kind of prop a cell turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKind {
    /// First tombstone mesh
    GraveA,
    /// Second tombstone mesh
    GraveB,
    /// Third tombstone mesh
    GraveC,
    /// Dead tree
    Tree,
    /// Lamp post
    Lamp,
    /// The landmark grave
    CursedGrave,
}

/// One placed prop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prop {
    /// What to instantiate
    pub kind: PropKind,
    /// Source cell
    pub coord: Coord,
    /// World position including jitter and lift
    pub position: [f32; 3],
    /// Euler angles in degrees
    pub rotation: [f32; 3],
}

/// Scene placer turning cells into tombstones, trees and lamps
///
/// Carries its own random stream so scattering never disturbs generation.
pub struct PropScatter {
    layout: WorldLayout,
    leeway: f32,
    rng: StdRng,
    props: Vec<Prop>,
}

impl PropScatter {
    /// Scatter with `leeway` as the fraction of a cell a prop may drift
    pub fn new(layout: WorldLayout, leeway: f32, seed: u64) -> Self {
        Self {
            layout,
            leeway,
            rng: StdRng::seed_from_u64(seed),
            props: Vec::new(),
        }
    }

    /// Props placed so far
    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    /// Consume the scatter, keeping its props
    pub fn into_props(self) -> Vec<Prop> {
        self.props
    }

    fn jitter(&mut self, spacing: f32) -> f32 {
        (self.rng.random::<f32>() - 0.5) * self.leeway * spacing
    }

    fn yaw(&mut self) -> f32 {
        self.rng.random_range(0..ROTATION_STEPS) as f32 * ROTATION_STEP_DEGREES
    }

    fn scatter_open(&mut self, position: [f32; 3], coord: Coord) {
        let jittered = [
            position[0] + self.jitter(self.layout.spacing_x),
            position[1],
            position[2] + self.jitter(self.layout.spacing_y),
        ];

        let (kind, position, rotation) = match self.rng.random_range(0..PROP_ROLLS) {
            0..=2 => (PropKind::GraveA, jittered, [0.0, self.yaw(), 0.0]),
            3..=5 => (PropKind::GraveB, jittered, [0.0, self.yaw(), 0.0]),
            6..=8 => (PropKind::GraveC, jittered, [0.0, self.yaw(), 0.0]),
            9 => (
                PropKind::Tree,
                lifted(jittered, TREE_LIFT),
                [UPRIGHT_TILT, self.yaw(), 0.0],
            ),
            _ => (
                PropKind::Lamp,
                lifted(jittered, LAMP_LIFT),
                [UPRIGHT_TILT, 0.0, 0.0],
            ),
        };

        self.props.push(Prop {
            kind,
            coord,
            position,
            rotation,
        });
    }
}

const fn lifted(position: [f32; 3], lift: f32) -> [f32; 3] {
    [position[0], position[1] + lift, position[2]]
}

impl ScenePlacer for PropScatter {
    fn place(&mut self, position: [f32; 3], coord: Coord, state: CellState) {
        match state {
            CellState::Open => self.scatter_open(position, coord),
            CellState::Path => self.props.push(Prop {
                kind: PropKind::Lamp,
                coord,
                position: lifted(position, LAMP_LIFT),
                rotation: [UPRIGHT_TILT, 0.0, 0.0],
            }),
            CellState::Landmark => self.props.push(Prop {
                kind: PropKind::CursedGrave,
                coord,
                position,
                rotation: [0.0; 3],
            }),
            CellState::Wall => {}
        }
    }
}
