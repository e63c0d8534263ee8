//! Minimum-channel desaturation of color images

use image::{GrayImage, RgbImage};
use rayon::prelude::*;

/// Intensity of a single RGB pixel
///
/// Gray pixels keep their common value; any colored pixel collapses to its
/// darkest channel.
pub fn pixel_intensity([r, g, b]: [u8; 3]) -> u8 {
    if r == g && g == b { g } else { r.min(g).min(b) }
}

/// Convert a color image to single-channel intensities of identical dimensions
///
/// Rows are independent and are processed on the rayon pool.
pub fn desaturate(source: &RgbImage) -> GrayImage {
    let (width, height) = source.dimensions();
    let mut output = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return output;
    }

    let row_len = width as usize;
    output
        .par_chunks_mut(row_len)
        .zip(source.par_chunks(row_len * 3))
        .for_each(|(out_row, src_row)| {
            for (out, rgb) in out_row.iter_mut().zip(src_row.chunks_exact(3)) {
                if let &[r, g, b] = rgb {
                    *out = pixel_intensity([r, g, b]);
                }
            }
        });

    output
}
