//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 20;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 20;
/// Default probability that an interior cell starts as a wall
pub const DEFAULT_FILL_PERCENT: f64 = 0.45;
/// Wall regions smaller than this are opened up
pub const DEFAULT_WALL_MIN_SIZE: usize = 10;
/// Open regions smaller than this are filled in
pub const DEFAULT_POCKET_MIN_SIZE: usize = 20;
/// Mean corridor walk length in squares
pub const DEFAULT_AVG_PATH_LENGTH: usize = 4;
/// Child walks spawned at the end of each corridor walk
pub const DEFAULT_PATH_BRANCHES: usize = 2;
/// Deepest branch generation that may still spawn children
pub const DEFAULT_PATH_GENERATIONS: usize = 2;
/// Default number of pipeline attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Smallest grid that still has an interior and a gate row
pub const MIN_GRID_DIMENSION: usize = 3;

// Cellular automaton rules
/// Number of whole-grid smoothing generations
pub const SMOOTHING_PASSES: usize = 7;
/// A cell with more wall neighbours than this becomes a wall
pub const WALL_BIRTH_THRESHOLD: usize = 5;
/// A cell with fewer wall neighbours than this becomes open
pub const OPEN_BIRTH_THRESHOLD: usize = 4;

// Landmark tail sampling
/// Acceptance probability of the farthest cell
pub const LANDMARK_INITIAL_CHANCE: f64 = 0.2;
/// Fraction of the region over which the chance ramps to certainty
pub const LANDMARK_RAMP_FRACTION: f64 = 0.4;

// Scene placement
/// World units between neighbouring cells along x
pub const DEFAULT_SPACING_X: f32 = 20.0;
/// World units between neighbouring cells along y
pub const DEFAULT_SPACING_Y: f32 = 20.0;
/// Fraction of a cell a prop may be nudged off its centre
pub const DEFAULT_LEEWAY: f32 = 0.4;

// Output settings
/// Prefix for generated map filenames
pub const OUTPUT_PREFIX: &str = "graveyard";
/// Default pixels per cell in exported images
pub const DEFAULT_PIXEL_SCALE: u32 = 8;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Debug palette, one RGBA colour per cell state
/// Wall colour
pub const WALL_COLOR: [u8; 4] = [34, 32, 38, 255];
/// Open ground colour
pub const OPEN_COLOR: [u8; 4] = [92, 128, 72, 255];
/// Corridor colour
pub const PATH_COLOR: [u8; 4] = [176, 162, 128, 255];
/// Landmark colour
pub const LANDMARK_COLOR: [u8; 4] = [196, 40, 48, 255];
