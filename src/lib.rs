//! Deterministic contact-sheet tiling of labeled image pools for model training
//!
//! Two class pools are split into equal batches, each batch is shuffled with a
//! seeded generator, and consecutive groups of four images are desaturated,
//! laid out on a fixed-size grayscale canvas, optionally noised, and emitted as
//! a bitmap plus a matrix of intensities normalized to `[0, 1]`.

#![forbid(unsafe_code)]

/// Batch planning, pool discovery and group assembly
pub mod batch;
/// Input/output operations and error handling
pub mod io;
/// Desaturation, grid composition, noise and matrix serialization
pub mod tiling;

pub use io::error::{Result, TilingError};
