//! Seeded graveyard layout generation
//!
//! A cellular automaton carves a walled bitmap, undersized regions are cleaned
//! away, marching squares classify the boundary, and a gate, a branching
//! corridor network and a single landmark are placed on the result. Every
//! random draw comes from one seeded stream, so a seed fully determines the
//! layout.

#![forbid(unsafe_code)]

/// Generation pipeline stages and the retrying executor
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Incremental probability sampling
pub mod math;
/// World-space placement of generated layouts
pub mod scene;
/// Grid, region and marching-squares data structures
pub mod spatial;

pub use algorithm::executor::{GenerationConfig, GenerationResult, GraveyardGenerator, generate};
pub use io::error::{GenerationError, Result};
