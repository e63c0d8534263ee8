//! Writes the bitmap and matrix pair for each composed group

use crate::io::configuration::{CANVAS_EXTENSION, MATRIX_EXTENSION};
use crate::io::error::{Result, TilingError, io_error};
use crate::io::image::export_canvas_as_bmp;
use crate::tiling::matrix::NormalizedMatrix;
use crate::tiling::pipeline::TiledOutput;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Files written for one group, sharing a random identifier as stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupArtifacts {
    /// Shared filename stem
    pub id: String,
    /// Path of the canvas bitmap
    pub canvas_path: PathBuf,
    /// Path of the normalized matrix
    pub matrix_path: PathBuf,
}

/// New 128-bit identifier rendered as 32 lowercase hex digits
///
/// Drawn from the thread-local generator so that seeded runs keep their
/// shuffle and noise sequences independent of file naming.
pub fn new_group_id() -> String {
    let bits: u128 = rand::rng().random();
    format!("{bits:032x}")
}

/// Serialize a matrix as JSON to `path`
///
/// # Errors
///
/// Returns an error if the file cannot be created or the JSON cannot be written
pub fn write_matrix_json(matrix: &NormalizedMatrix, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error(path, "create", e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &matrix.to_json()).map_err(|e| {
        TilingError::Serialization {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    writer.flush().map_err(|e| io_error(path, "write", e))
}

/// Write `<id>.bmp` and `<id>.json` for a tiled group into `output_dir`
///
/// # Errors
///
/// Returns an error if either file cannot be written
pub fn write_group_output(output_dir: &Path, output: &TiledOutput) -> Result<GroupArtifacts> {
    let id = new_group_id();
    let canvas_path = output_dir.join(format!("{id}.{CANVAS_EXTENSION}"));
    let matrix_path = output_dir.join(format!("{id}.{MATRIX_EXTENSION}"));

    export_canvas_as_bmp(&output.canvas, &canvas_path)?;
    write_matrix_json(&output.matrix, &matrix_path)?;

    tracing::debug!(%id, "wrote group output");

    Ok(GroupArtifacts {
        id,
        canvas_path,
        matrix_path,
    })
}
