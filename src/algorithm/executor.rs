use crate::{
    algorithm::bitmap::{random_fill, smooth_once},
    algorithm::gate::select_gate,
    algorithm::landmark::place_landmark,
    algorithm::paths::{PathConfig, PathNetwork, grow_paths},
    algorithm::pockets::eliminate_pockets,
    io::configuration::{
        DEFAULT_AVG_PATH_LENGTH, DEFAULT_FILL_PERCENT, DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS,
        DEFAULT_PATH_BRANCHES, DEFAULT_PATH_GENERATIONS, DEFAULT_POCKET_MIN_SIZE, DEFAULT_SEED,
        DEFAULT_WALL_MIN_SIZE, DEFAULT_WIDTH, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION,
        SMOOTHING_PASSES,
    },
    io::error::{GenerationError, Result, invalid_parameter},
    io::visualization::VisualizationCapture,
    spatial::{Coord, Grid, Square, SquareGrid, squares::classify},
};
use rand::{SeedableRng, rngs::StdRng};

/// Parameters controlling one generation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Probability that an interior cell starts as a wall, in `[0, 1]`
    pub fill_percent: f64,
    /// Wall regions smaller than this are opened up
    pub wall_min_size: usize,
    /// Open regions smaller than this are filled in
    pub pocket_min_size: usize,
    /// Mean corridor walk length in squares
    pub avg_path_length: usize,
    /// Child walks spawned at the end of each walk
    pub path_branches: usize,
    /// Deepest walk generation that may still branch
    pub path_generations: usize,
    /// Seed of the single random stream
    pub seed: u64,
    /// Pipeline attempts before giving up
    pub max_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill_percent: DEFAULT_FILL_PERCENT,
            wall_min_size: DEFAULT_WALL_MIN_SIZE,
            pocket_min_size: DEFAULT_POCKET_MIN_SIZE,
            avg_path_length: DEFAULT_AVG_PATH_LENGTH,
            path_branches: DEFAULT_PATH_BRANCHES,
            path_generations: DEFAULT_PATH_GENERATIONS,
            seed: DEFAULT_SEED,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GenerationConfig {
    /// Reject parameters the pipeline cannot honour
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` naming the first offending parameter
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if !(MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION).contains(&value) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between {MIN_GRID_DIMENSION} and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.fill_percent) {
            return Err(invalid_parameter(
                "fill_percent",
                &self.fill_percent,
                &"must be within [0, 1]",
            ));
        }

        // The border ring is the smallest wall region that can exist
        let border_ring = 2 * self.width + 2 * self.height - 4;
        if self.wall_min_size > border_ring {
            return Err(invalid_parameter(
                "wall_min_size",
                &self.wall_min_size,
                &format!("must not exceed the border ring of {border_ring} cells"),
            ));
        }

        if self.avg_path_length == 0 {
            return Err(invalid_parameter(
                "avg_path_length",
                &self.avg_path_length,
                &"must be positive",
            ));
        }

        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"must be positive",
            ));
        }

        Ok(())
    }

    /// Corridor parameters derived from this configuration
    pub const fn path_config(&self) -> PathConfig {
        PathConfig {
            avg_length: self.avg_path_length,
            branches: self.path_branches,
            generations: self.path_generations,
        }
    }
}

/// A fully generated layout
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    /// Final cell states
    pub grid: Grid,
    /// Square configurations, corridors marked as reserved
    pub squares: SquareGrid,
    /// The committed gate square
    pub gate: Square,
    /// The landmark cell
    pub landmark: Coord,
    /// Corridor walks and their reserved squares
    pub paths: PathNetwork,
    /// Attempts used, counting the successful one
    pub attempts: u32,
}

/// Layout pipeline executor
///
/// Owns the random stream shared by every stage. Failed attempts leave the
/// stream where they stopped, so the next attempt continues it rather than
/// reseeding.
pub struct GraveyardGenerator {
    config: GenerationConfig,
    rng: StdRng,
    attempts: u32,
    /// Optional stage capture of the latest attempt
    pub visualization: Option<VisualizationCapture>,
}

impl GraveyardGenerator {
    /// Create an executor for a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the configuration is rejected
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
            attempts: 0,
            visualization: None,
        })
    }

    /// Enable capture of pipeline stages for GIF export
    pub fn enable_visualization(&mut self, scale: u32) {
        self.visualization = Some(VisualizationCapture::new(scale));
    }

    /// Attempts made so far
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Configuration in use
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn record(&mut self, label: impl Into<String>, grid: &Grid) {
        if let Some(ref mut viz) = self.visualization {
            viz.record(label, grid);
        }
    }

    /// Run the pipeline once
    ///
    /// # Errors
    ///
    /// Returns `NoGateFound` or `NoLandmarkSite` when this attempt fails;
    /// both are retryable
    pub fn run_attempt(&mut self) -> Result<GenerationResult> {
        self.attempts += 1;
        if let Some(ref mut viz) = self.visualization {
            viz.clear();
        }

        let config = self.config;
        let mut grid = random_fill(
            config.width,
            config.height,
            config.fill_percent,
            &mut self.rng,
        );
        self.record("fill", &grid);

        for pass in 1..=SMOOTHING_PASSES {
            grid = smooth_once(&grid);
            self.record(format!("smooth {pass}"), &grid);
        }

        eliminate_pockets(&mut grid, config.wall_min_size, config.pocket_min_size);
        self.record("pockets", &grid);

        let mut squares = classify(&grid);
        let gate = select_gate(&squares, &mut self.rng)?;

        let paths = grow_paths(
            &gate,
            &mut squares,
            &mut grid,
            &config.path_config(),
            &mut self.rng,
        );
        self.record("paths", &grid);

        let landmark = place_landmark(&mut grid, &gate, &mut self.rng)?;
        self.record("landmark", &grid);

        Ok(GenerationResult {
            grid,
            squares,
            gate,
            landmark,
            paths,
            attempts: self.attempts,
        })
    }

    /// Retry the pipeline until it succeeds or the attempt cap is reached
    ///
    /// # Errors
    ///
    /// Returns `GenerationExhausted` once `max_attempts` attempts have failed
    pub fn generate(&mut self) -> Result<GenerationResult> {
        while self.attempts < self.config.max_attempts {
            match self.run_attempt() {
                Ok(result) => return Ok(result),
                Err(error) if error.is_retryable() => {}
                Err(error) => return Err(error),
            }
        }

        Err(GenerationError::GenerationExhausted {
            attempts: self.attempts,
        })
    }
}

/// Generate a layout from a configuration in one call
///
/// # Errors
///
/// Returns `InvalidConfiguration` for rejected parameters or
/// `GenerationExhausted` when no attempt within the cap produced a gate
pub fn generate(config: &GenerationConfig) -> Result<GenerationResult> {
    GraveyardGenerator::new(*config)?.generate()
}
