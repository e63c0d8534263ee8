//! Error types for tiling, batching and output operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode a canvas to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
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

    /// Failed to serialize a normalized matrix
    Serialization {
        /// Path the matrix was destined for
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Run parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A composition was requested with no source images
    EmptyGroup,

    /// Noise level outside the closed unit interval
    InvalidNoiseLevel {
        /// Rejected noise level
        level: f64,
    },

    /// A tile could not be scaled to its cell
    Resize {
        /// Source dimensions (width, height)
        from: (u32, u32),
        /// Requested dimensions (width, height)
        to: (u32, u32),
    },

    /// A pool directory does not exist
    MissingPool {
        /// Pool label
        label: &'static str,
        /// Directory that was expected
        path: PathBuf,
    },

    /// The pools are too small for the requested batch size
    NoBatches {
        /// Total images across both pools
        total_images: usize,
        /// Requested batch size
        batch_size: usize,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize matrix for '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyGroup => {
                write!(f, "Source images array cannot be empty")
            }
            Self::InvalidNoiseLevel { level } => {
                write!(f, "Noise level {level} must be between 0.0 and 1.0")
            }
            Self::Resize { from, to } => {
                write!(
                    f,
                    "Cannot resize {}x{} image to {}x{}",
                    from.0, from.1, to.0, to.1
                )
            }
            Self::MissingPool { label, path } => {
                write!(
                    f,
                    "Directory not found for {label} pool: {}",
                    path.display()
                )
            }
            Self::NoBatches {
                total_images,
                batch_size,
            } => {
                write!(
                    f,
                    "{total_images} images cannot fill a single batch of size {batch_size}"
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation name to a raw I/O error
pub fn io_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> TilingError {
    TilingError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

impl TilingError {
    /// Whether this error aborts the whole run rather than a single group
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::EmptyGroup | Self::InvalidNoiseLevel { .. } | Self::Resize { .. }
        )
    }
}
