//! Run constants and runtime configuration defaults

// Canvas geometry
/// Width of every output canvas in pixels
pub const CANVAS_WIDTH: u32 = 200;
/// Height of every output canvas in pixels
pub const CANVAS_HEIGHT: u32 = 200;

/// Number of source images composed onto one canvas
pub const GROUP_SIZE: usize = 4;

/// Background intensity of a fresh canvas (white)
pub const BACKGROUND_INTENSITY: u8 = 255;

// Salt-and-pepper values
/// Intensity written for pepper noise
pub const PEPPER: u8 = 0;
/// Intensity written for salt noise
pub const SALT: u8 = 255;

/// Decimal places kept when normalizing intensities
pub const MATRIX_PRECISION: i32 = 3;

// Default values for configurable parameters
/// Fixed seed for reproducible shuffling and noise
pub const DEFAULT_SEED: u64 = 5;

/// Default number of images per class per batch
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Default fraction of canvas pixels hit by noise
pub const DEFAULT_NOISE_LEVEL: f64 = 0.01;

/// File extensions accepted into a pool (compared lowercase)
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

// Output settings
/// Extension of the canvas bitmap written per group
pub const CANVAS_EXTENSION: &str = "bmp";
/// Extension of the normalized matrix written per group
pub const MATRIX_EXTENSION: &str = "json";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Environment variable consulted for the log filter
pub const LOG_ENV_VAR: &str = "TILESHEET_LOG";
