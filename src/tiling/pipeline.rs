//! Group-level tiling: compose, add noise, serialize

use crate::io::error::Result;
use crate::tiling::grid::compose;
use crate::tiling::matrix::NormalizedMatrix;
use crate::tiling::noise::{apply_salt_and_pepper, validate_noise_level};
use crate::tiling::source::SourceImage;
use image::GrayImage;
use rand::Rng;

/// Canvas geometry and noise shared by every group in a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSettings {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Fraction of canvas pixels hit by salt-and-pepper noise
    pub noise_level: f64,
}

/// The two artifacts produced for one group
#[derive(Debug, Clone)]
pub struct TiledOutput {
    /// Composed single-channel canvas
    pub canvas: GrayImage,
    /// Normalized matrix of the canvas after noise
    pub matrix: NormalizedMatrix,
}

/// Produce the canvas and normalized matrix for one group of sources
///
/// # Errors
///
/// Returns an error if `sources` is empty or the noise level is outside `[0.0, 1.0]`
pub fn create_tiled_output<R: Rng + ?Sized>(
    sources: &[SourceImage],
    settings: &TileSettings,
    rng: &mut R,
) -> Result<TiledOutput> {
    validate_noise_level(settings.noise_level)?;

    let mut canvas = compose(sources, settings.canvas_width, settings.canvas_height)?;
    apply_salt_and_pepper(&mut canvas, settings.noise_level, rng)?;
    let matrix = NormalizedMatrix::from_canvas(&canvas);

    Ok(TiledOutput { canvas, matrix })
}
