//! Stage capture and GIF generation for pipeline visualization

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{GenerationError, Result};
use crate::io::image::{ensure_parent_dir, render_grid};
use crate::spatial::grid::Grid;
use image::Frame;
use std::path::Path;

/// Grid as it stood after one pipeline stage
#[derive(Debug, Clone)]
pub struct StageSnapshot {
    /// Stage name, e.g. `"smooth 3"`
    pub label: String,
    /// Grid contents at that point
    pub grid: Grid,
}

/// Captures grid snapshots for visualization
///
/// Only the attempt that succeeds is kept; the executor clears the capture
/// whenever a new attempt starts.
pub struct VisualizationCapture {
    pub(crate) snapshots: Vec<StageSnapshot>,
    scale: u32,
}

impl VisualizationCapture {
    /// Capture frames rendered at `scale` pixels per cell
    pub fn new(scale: u32) -> Self {
        Self {
            snapshots: Vec::new(),
            scale: scale.max(1),
        }
    }

    /// Record the grid after a stage
    pub fn record(&mut self, label: impl Into<String>, grid: &Grid) {
        self.snapshots.push(StageSnapshot {
            label: label.into(),
            grid: grid.clone(),
        });
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Returns all recorded snapshots
    pub fn snapshots(&self) -> &[StageSnapshot] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots
    pub const fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Export the snapshots as an animated GIF, one frame per stage
    ///
    /// Delays below what viewers support are raised to that minimum. The last
    /// frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.snapshots.is_empty() {
            return Err(GenerationError::InvalidConfiguration {
                parameter: "visualization",
                value: String::new(),
                reason: "no stages captured".to_string(),
            });
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let frames = self.generate_frames(delay_ms);

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32) -> Vec<Frame> {
        let mut frames: Vec<Frame> = self
            .snapshots
            .iter()
            .map(|snapshot| {
                Frame::from_parts(
                    render_grid(&snapshot.grid, self.scale),
                    0,
                    0,
                    image::Delay::from_numer_denom_ms(delay_ms, 1),
                )
            })
            .collect();

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms * 5, 1),
            ));
        }

        frames
    }
}
