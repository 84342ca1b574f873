/// Random fill and cellular automaton smoothing
pub mod bitmap;
/// Pipeline orchestration with bounded retries
pub mod executor;
/// Gate candidate scan and incremental selection
pub mod gate;
/// Landmark tail sampling over the gate region
pub mod landmark;
/// Corridor walks and branching
pub mod paths;
/// Undersized region elimination
pub mod pockets;
