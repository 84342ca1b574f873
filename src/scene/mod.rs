//! Hand-off of generated layouts to scene construction

/// Prop scatter over placeable cells
pub mod props;
/// World-space layout and placement hook
pub mod world;

pub use world::{ScenePlacer, WorldLayout, place_scene};
