//! Spatial data structures for the layout pipeline
//!
//! This module contains spatial-related functionality including:
//! - The cell-state grid and coordinates
//! - Region flood fills
//! - Marching-squares classification

/// Cell-state grid and coordinates
pub mod grid;
/// Breadth-first region discovery
pub mod regions;
/// Marching-squares configuration grid
pub mod squares;

pub use grid::{CellState, Coord, Grid};
pub use regions::Region;
pub use squares::{Configuration, Square, SquareGrid};
