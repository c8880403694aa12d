//! Error types for mosaic generation operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to load or decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode the finished mosaic
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// The tile directory could not be listed
    DirectoryAccess {
        /// Path to the tile directory
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Grid division count yields non-positive cell sizes
    InvalidGrid {
        /// Requested division count
        divisions: u32,
        /// Computed horizontal cell size
        x_delta: u32,
        /// Computed vertical cell size
        y_delta: u32,
    },

    /// No usable tiles remained after filtering and decoding
    EmptyPalette {
        /// Directory that was scanned for tiles
        directory: PathBuf,
    },

    /// A zero-area region was requested for color averaging
    DegenerateRegion {
        /// Left edge of the rejected region
        x_min: u32,
        /// Top edge of the rejected region
        y_min: u32,
        /// Right edge of the rejected region
        x_max: u32,
        /// Bottom edge of the rejected region
        y_max: u32,
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

    /// An internal computation violated its invariants
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode mosaic: {source}")
            }
            Self::DirectoryAccess { path, source } => {
                write!(
                    f,
                    "Failed to read tile directory '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidGrid {
                divisions,
                x_delta,
                y_delta,
            } => {
                write!(
                    f,
                    "Invalid grid: {divisions} divisions yield cell sizes \
                     x_delta={x_delta}, y_delta={y_delta}, both must be > 0"
                )
            }
            Self::EmptyPalette { directory } => {
                write!(
                    f,
                    "No usable tiles found in '{}'",
                    directory.display()
                )
            }
            Self::DegenerateRegion {
                x_min,
                y_min,
                x_max,
                y_max,
            } => {
                write!(
                    f,
                    "Degenerate region [{x_min},{y_min})..[{x_max},{y_max}) covers no pixels"
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageEncode { source } => Some(source),
            Self::DirectoryAccess { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an internal computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
