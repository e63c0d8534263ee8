//! Salt-and-pepper noise injection

use crate::io::configuration::{PEPPER, SALT};
use crate::io::error::{Result, TilingError};
use image::{GrayImage, Luma};
use rand::Rng;

/// Reject noise levels outside `[0.0, 1.0]`
///
/// # Errors
///
/// Returns [`TilingError::InvalidNoiseLevel`] for out-of-range or NaN levels
pub fn validate_noise_level(noise_level: f64) -> Result<()> {
    if (0.0..=1.0).contains(&noise_level) {
        Ok(())
    } else {
        Err(TilingError::InvalidNoiseLevel { level: noise_level })
    }
}

/// Number of overwrite attempts for a canvas, `floor(width * height * noise_level)`
pub fn pixels_to_affect(width: u32, height: u32, noise_level: f64) -> usize {
    let total = u64::from(width) * u64::from(height);
    (total as f64 * noise_level).floor() as usize
}

/// Overwrite randomly chosen pixels with pure black or pure white
///
/// Pixels are drawn with replacement, so fewer distinct pixels than the attempt
/// count may change. Returns the number of attempts made.
///
/// # Errors
///
/// Returns [`TilingError::InvalidNoiseLevel`] when `noise_level` is outside `[0.0, 1.0]`
pub fn apply_salt_and_pepper<R: Rng + ?Sized>(
    canvas: &mut GrayImage,
    noise_level: f64,
    rng: &mut R,
) -> Result<usize> {
    validate_noise_level(noise_level)?;

    let (width, height) = canvas.dimensions();
    let attempts = pixels_to_affect(width, height, noise_level);

    for _ in 0..attempts {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let value = if rng.random_bool(0.5) { PEPPER } else { SALT };
        canvas.put_pixel(x, y, Luma([value]));
    }

    Ok(attempts)
}
