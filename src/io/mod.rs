//! Input/output: CLI, configuration, errors and debug exports

/// Command-line parsing and batch orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and helpers
pub mod error;
/// PNG export of grids
pub mod image;
/// Batch progress display
pub mod progress;
/// Pipeline stage capture and GIF export
pub mod visualization;
