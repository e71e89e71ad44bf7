//! Error types for name generation and image assembly

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum AmogusError {
    /// Action tag is not one of `extend`, `cut` or `mirror`
    InvalidAction {
        /// The rejected action string
        value: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A retry loop gave up before producing an acceptable value
    ///
    /// Occurs when a strategy's output space is no larger than its
    /// recent-result history, or collapses onto the base word.
    RetriesExhausted {
        /// Name of the operation that was retried
        operation: &'static str,
        /// Number of attempts made
        attempts: usize,
    },

    /// Tile image file does not exist in the tile directory
    MissingTile {
        /// Tile identifier
        tile: String,
        /// Path that was looked up
        path: PathBuf,
    },

    /// Tile file exists but could not be decoded
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Tile size differs from the other tiles of the same image
    TileDimensions {
        /// Tile identifier
        tile: String,
        /// Size of the first tile (width, height)
        expected: (u32, u32),
        /// Size of the offending tile (width, height)
        found: (u32, u32),
    },

    /// Failed to save generated image to disk
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

impl fmt::Display for AmogusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction { value } => {
                write!(
                    f,
                    "Invalid action '{value}': action must be extend, cut, mirror or unset (for random action)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RetriesExhausted {
                operation,
                attempts,
            } => {
                write!(
                    f,
                    "Gave up on {operation} after {attempts} attempts without a fresh result"
                )
            }
            Self::MissingTile { tile, path } => {
                write!(f, "Tile '{tile}' not found at '{}'", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::TileDimensions {
                tile,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile '{tile}' is {}x{} but other tiles are {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
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

impl std::error::Error for AmogusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, AmogusError>;

impl From<image::ImageError> for AmogusError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AmogusError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AmogusError {
    AmogusError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a retries exhausted error
pub const fn retries_exhausted(operation: &'static str, attempts: usize) -> AmogusError {
    AmogusError::RetriesExhausted {
        operation,
        attempts,
    }
}
