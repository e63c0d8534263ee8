//! Exact-size scaling of intensity tiles

use crate::io::error::{Result, TilingError};
use image::GrayImage;
use image::imageops::{self, FilterType};

/// Interpolation used for every tile; bilinear keeps output deterministic and cheap
pub const TILE_FILTER: FilterType = FilterType::Triangle;

/// Scale an intensity image to exactly `width` x `height`
///
/// # Errors
///
/// Returns [`TilingError::Resize`] if either the source or the target has zero area
pub fn resize_tile(tile: &GrayImage, width: u32, height: u32) -> Result<GrayImage> {
    let from = tile.dimensions();
    if from.0 == 0 || from.1 == 0 || width == 0 || height == 0 {
        return Err(TilingError::Resize {
            from,
            to: (width, height),
        });
    }

    if from == (width, height) {
        return Ok(tile.clone());
    }

    Ok(imageops::resize(tile, width, height, TILE_FILTER))
}
