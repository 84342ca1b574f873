//! Mathematical utilities for the generator

/// Incremental acceptance sampling
pub mod probability;
