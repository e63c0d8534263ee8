//! Canvas to normalized numeric matrix conversion

use crate::io::configuration::MATRIX_PRECISION;
use image::GrayImage;
use ndarray::Array2;
use serde_json::{Map, Value};

/// Row-major matrix of intensities normalized to `[0, 1]` at fixed precision
///
/// Shape is `(height, width)` of the canvas it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMatrix {
    values: Array2<f64>,
}

/// Round to [`MATRIX_PRECISION`] decimals, ties to even
pub fn round_to_precision(value: f64) -> f64 {
    let scale = 10f64.powi(MATRIX_PRECISION);
    (value * scale).round_ties_even() / scale
}

/// Normalized value of one 8-bit intensity
pub fn normalize_intensity(intensity: u8) -> f64 {
    round_to_precision(f64::from(intensity) / 255.0)
}

impl NormalizedMatrix {
    /// Build the matrix for a canvas, one row per canvas row top to bottom
    pub fn from_canvas(canvas: &GrayImage) -> Self {
        let (width, height) = canvas.dimensions();
        let values = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            canvas
                .get_pixel_checked(col as u32, row as u32)
                .map_or(0.0, |pixel| normalize_intensity(pixel.0[0]))
        });
        Self { values }
    }

    /// Number of rows (canvas height)
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns (canvas width)
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Normalized value at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// Borrow the underlying array
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Recover 8-bit intensities via `round(value * 255)`
    pub fn to_intensities(&self) -> Array2<u8> {
        self.values
            .mapv(|value| (value * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// JSON object keyed by decimal row index, each row an array of numbers
    pub fn to_json(&self) -> Value {
        let mut rows = Map::with_capacity(self.rows());
        for (index, row) in self.values.outer_iter().enumerate() {
            let cells = row.iter().map(|&value| Value::from(value)).collect();
            rows.insert(index.to_string(), Value::Array(cells));
        }
        Value::Object(rows)
    }
}
