//! Discovery of labeled image pools on disk

use crate::io::error::{Result, TilingError, io_error};
use crate::io::image::has_supported_extension;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Ordered list of image files available for one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePool {
    label: &'static str,
    paths: Vec<PathBuf>,
}

impl ImagePool {
    /// Scan `dir` for files with a supported image extension
    ///
    /// Non-matching files and subdirectories are ignored. Paths are sorted so
    /// that batch offsets address the same files on every run.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` does not exist or cannot be listed
    pub fn discover(label: &'static str, dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(TilingError::MissingPool {
                label,
                path: dir.to_path_buf(),
            });
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| io_error(dir, "read_dir", e))? {
            let path = entry.map_err(|e| io_error(dir, "read_dir", e))?.path();
            if path.is_file() && has_supported_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        Ok(Self { label, paths })
    }

    /// Build a pool from an explicit list of paths, preserving their order
    pub const fn from_paths(label: &'static str, paths: Vec<PathBuf>) -> Self {
        Self { label, paths }
    }

    /// Class label of this pool
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Number of files in the pool
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the pool holds no files
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All paths in pool order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Paths in `range`, truncated at the end of the pool
    pub fn slice(&self, range: Range<usize>) -> &[PathBuf] {
        let end = range.end.min(self.paths.len());
        let start = range.start.min(end);
        self.paths.get(start..end).unwrap_or(&[])
    }
}
