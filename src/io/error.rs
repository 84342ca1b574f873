//! Error types for layout generation and debug export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Generation parameter validation failed
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No flat three-square opening was accepted for the gate
    ///
    /// Occurs when the classified grid has no candidate at all, or when the
    /// incremental sampler rejected every candidate. Recoverable by retrying
    /// the whole pipeline.
    NoGateFound {
        /// Number of candidates that were considered
        candidates: usize,
    },

    /// The gate region had no open cell left for the landmark
    NoLandmarkSite {
        /// Gate square column
        gate_x: usize,
        /// Gate square row
        gate_y: usize,
    },

    /// Every attempt up to the cap failed to produce a gate
    GenerationExhausted {
        /// Number of attempts made
        attempts: u32,
    },

    /// Region query seeded on a coordinate with no matching cell
    EmptyRegion {
        /// Seed column
        x: usize,
        /// Seed row
        y: usize,
    },

    /// Failed to save an exported image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl GenerationError {
    /// Whether a fresh pipeline attempt can recover from this error
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::NoGateFound { .. } | Self::NoLandmarkSite { .. })
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoGateFound { candidates } => {
                write!(f, "No gate accepted among {candidates} candidates")
            }
            Self::NoLandmarkSite { gate_x, gate_y } => {
                write!(
                    f,
                    "No open cell left for the landmark behind gate ({gate_x}, {gate_y})"
                )
            }
            Self::GenerationExhausted { attempts } => {
                write!(f, "Generation exhausted after {attempts} attempts")
            }
            Self::EmptyRegion { x, y } => {
                write!(f, "No matching region at ({x}, {y})")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

