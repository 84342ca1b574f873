//! Command-line interface for batch generation of graveyard maps

use crate::algorithm::executor::{GenerationConfig, GraveyardGenerator};
use crate::io::configuration::{
    DEFAULT_AVG_PATH_LENGTH, DEFAULT_FILL_PERCENT, DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_PATH_BRANCHES, DEFAULT_PATH_GENERATIONS, DEFAULT_PIXEL_SCALE,
    DEFAULT_POCKET_MIN_SIZE, DEFAULT_SEED, DEFAULT_WALL_MIN_SIZE, DEFAULT_WIDTH,
    GIF_FRAME_DELAY_MS, OUTPUT_PREFIX,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "graveyard")]
#[command(
    author,
    version,
    about = "Generate graveyard layouts from consecutive seeds"
)]
/// Command-line arguments for the layout generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory receiving the generated images
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output: PathBuf,

    /// Seed of the first map
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of maps, seeded consecutively from --seed
    #[arg(short, long, default_value_t = 1)]
    pub count: u64,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Probability that an interior cell starts as a wall
    #[arg(short, long, default_value_t = DEFAULT_FILL_PERCENT)]
    pub fill: f64,

    /// Wall regions smaller than this are opened up
    #[arg(long, default_value_t = DEFAULT_WALL_MIN_SIZE)]
    pub wall_min_size: usize,

    /// Open regions smaller than this are filled in
    #[arg(long, default_value_t = DEFAULT_POCKET_MIN_SIZE)]
    pub pocket_min_size: usize,

    /// Mean corridor walk length in squares
    #[arg(short = 'l', long, default_value_t = DEFAULT_AVG_PATH_LENGTH)]
    pub path_length: usize,

    /// Child walks spawned at the end of each corridor walk
    #[arg(long, default_value_t = DEFAULT_PATH_BRANCHES)]
    pub branches: usize,

    /// Deepest corridor generation that may still branch
    #[arg(long, default_value_t = DEFAULT_PATH_GENERATIONS)]
    pub generations: usize,

    /// Pipeline attempts per map before giving up
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Pixels per cell in exported images
    #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
    pub scale: u32,

    /// Also export an animated GIF of the pipeline stages
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate maps even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seeds of the batch in generation order
    pub fn seeds(&self) -> impl Iterator<Item = u64> + use<> {
        let first = self.seed;
        (0..self.count).map(move |offset| first.wrapping_add(offset))
    }

    /// Generation parameters for one seed of the batch
    pub const fn generation_config(&self, seed: u64) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            fill_percent: self.fill,
            wall_min_size: self.wall_min_size,
            pocket_min_size: self.pocket_min_size,
            avg_path_length: self.path_length,
            path_branches: self.branches,
            path_generations: self.generations,
            seed,
            max_attempts: self.max_attempts,
        }
    }
}

/// Orchestrates batch generation with progress tracking
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every map of the batch
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a map exhausts its
    /// attempts, or an image cannot be written
    pub fn process(&mut self) -> Result<()> {
        let seeds: Vec<u64> = self
            .cli
            .seeds()
            .filter(|&seed| self.should_process_seed(seed))
            .collect();

        if seeds.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        for seed in seeds {
            self.process_seed(seed)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn should_process_seed(&self, seed: u64) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(&self.cli.output, seed);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: seed {seed} ({} exists)", output_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_seed(&mut self, seed: u64) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_map(seed);
        }

        let mut generator = GraveyardGenerator::new(self.cli.generation_config(seed))?;
        if self.cli.visualize {
            generator.enable_visualization(self.cli.scale);
        }

        let result = generator.generate()?;

        export_grid_as_png(
            &result.grid,
            self.cli.scale,
            &Self::get_output_path(&self.cli.output, seed),
        )?;

        if let Some(ref viz) = generator.visualization {
            viz.export_gif(
                &Self::get_visualization_path(&self.cli.output, seed),
                GIF_FRAME_DELAY_MS,
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_map(seed, result.attempts, start_time.elapsed());
        }

        Ok(())
    }

    /// Image path for one seed
    pub fn get_output_path(output_dir: &Path, seed: u64) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}_{seed}.png"))
    }

    /// Stage animation path for one seed
    pub fn get_visualization_path(output_dir: &Path, seed: u64) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}_{seed}_stages.gif"))
    }
}
