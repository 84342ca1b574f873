//! PNG export of generated grids, one scaled block per cell

use crate::io::configuration::{LANDMARK_COLOR, OPEN_COLOR, PATH_COLOR, WALL_COLOR};
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::{CellState, Coord, Grid};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Debug palette colour of a cell state
pub const fn cell_color(state: CellState) -> Rgba<u8> {
    match state {
        CellState::Wall => Rgba(WALL_COLOR),
        CellState::Open => Rgba(OPEN_COLOR),
        CellState::Path => Rgba(PATH_COLOR),
        CellState::Landmark => Rgba(LANDMARK_COLOR),
    }
}

/// Render a grid with `scale`×`scale` pixels per cell
///
/// North is up: grid row `height - 1` becomes the first image row.
pub fn render_grid(grid: &Grid, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let width = grid.width() as u32 * scale;
    let height = grid.height() as u32 * scale;
    let top_row = (grid.height() as u32).saturating_sub(1);

    ImageBuffer::from_fn(width, height, |px, py| {
        let x = (px / scale) as usize;
        let y = (top_row - py / scale) as usize;
        grid.get(Coord::new(x, y))
            .map_or(Rgba([0, 0, 0, 0]), cell_color)
    })
}

/// Create the parent directory of an output file if needed
///
/// # Errors
///
/// Returns a `FileSystem` error if the directory cannot be created
pub fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, scale: u32, output_path: &Path) -> Result<()> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(GenerationError::InvalidConfiguration {
            parameter: "grid",
            value: format!("{}x{}", grid.width(), grid.height()),
            reason: "cannot export an empty grid".to_string(),
        });
    }

    let img = render_grid(grid, scale);
    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
