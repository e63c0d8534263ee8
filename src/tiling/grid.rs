//! Square-grid layout of a group of images onto a fixed-size canvas
//!
//! A group of `n` images is laid out on the smallest square grid that holds
//! it, row-major from the top-left cell. Cell sizes come from integer division
//! of the canvas, so any remainder along the right and bottom edges stays at
//! the background intensity.

use crate::io::configuration::BACKGROUND_INTENSITY;
use crate::io::error::{Result, TilingError};
use crate::tiling::desaturate::desaturate;
use crate::tiling::resize::resize_tile;
use crate::tiling::source::SourceImage;
use image::{GrayImage, Luma, imageops};

/// Derived layout of a group on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    grid_size: u32,
    cell_width: u32,
    cell_height: u32,
}

impl GridGeometry {
    /// Compute the layout for `count` images on a `canvas_width` x `canvas_height` canvas
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::EmptyGroup`] when `count` is zero
    pub fn new(count: usize, canvas_width: u32, canvas_height: u32) -> Result<Self> {
        if count == 0 {
            return Err(TilingError::EmptyGroup);
        }
        let grid_size = grid_size(count) as u32;
        Ok(Self {
            grid_size,
            cell_width: canvas_width / grid_size,
            cell_height: canvas_height / grid_size,
        })
    }

    /// Cells per row and per column, never zero
    pub const fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Width of each cell in pixels
    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Height of each cell in pixels
    pub const fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Top-left pixel of the cell holding the `index`-th image
    pub const fn cell_origin(&self, index: usize) -> (u32, u32) {
        let row = index as u32 / self.grid_size;
        let col = index as u32 % self.grid_size;
        (col * self.cell_width, row * self.cell_height)
    }

    /// Whether a source of the given size is large enough to be placed
    ///
    /// Both dimensions are compared against the cell height, including the width.
    pub const fn admits(&self, source_width: u32, source_height: u32) -> bool {
        source_height > self.cell_height && source_width > self.cell_height
    }
}

/// Side length of the smallest square grid holding `count` cells, `ceil(sqrt(count))`
pub const fn grid_size(count: usize) -> usize {
    let root = count.isqrt();
    if root * root < count { root + 1 } else { root }
}

/// Create a canvas filled with the background intensity
pub fn blank_canvas(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([BACKGROUND_INTENSITY]))
}

/// Compose a group of source images onto a fresh canvas
///
/// Failed slots, sources that do not pass the size guard, and tiles that cannot
/// be resized leave their cell blank; none of them abort the composition.
///
/// # Errors
///
/// Returns [`TilingError::EmptyGroup`] when `sources` is empty
pub fn compose(
    sources: &[SourceImage],
    canvas_width: u32,
    canvas_height: u32,
) -> Result<GrayImage> {
    let geometry = GridGeometry::new(sources.len(), canvas_width, canvas_height)?;
    let mut canvas = blank_canvas(canvas_width, canvas_height);

    for (index, source) in sources.iter().enumerate() {
        let Some(image) = source.as_decoded() else {
            continue;
        };

        let (source_width, source_height) = image.dimensions();
        if !geometry.admits(source_width, source_height) {
            tracing::debug!(
                index,
                source_width,
                source_height,
                cell_height = geometry.cell_height(),
                "source smaller than cell, leaving blank"
            );
            continue;
        }

        let tile = match resize_tile(
            &desaturate(image),
            geometry.cell_width(),
            geometry.cell_height(),
        ) {
            Ok(tile) => tile,
            Err(e) => {
                tracing::warn!(index, %e, "Error processing image");
                continue;
            }
        };

        let (x, y) = geometry.cell_origin(index);
        imageops::replace(&mut canvas, &tile, i64::from(x), i64::from(y));
    }

    Ok(canvas)
}
