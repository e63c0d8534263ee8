//! Tiling and transform engine
//!
//! This module contains the per-group image transformations:
//! - Desaturation and tile resizing
//! - Square-grid composition onto a fixed canvas
//! - Salt-and-pepper noise and matrix normalization

/// Minimum-channel desaturation
pub mod desaturate;
/// Grid geometry and canvas composition
pub mod grid;
/// Normalized matrix serialization
pub mod matrix;
/// Salt-and-pepper noise injection
pub mod noise;
/// Group-level canvas and matrix production
pub mod pipeline;
/// Exact-size tile scaling
pub mod resize;
/// Decoded image or failure marker
pub mod source;

pub use grid::{GridGeometry, compose};
pub use matrix::NormalizedMatrix;
pub use pipeline::{TileSettings, TiledOutput, create_tiled_output};
pub use source::SourceImage;
