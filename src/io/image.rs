//! Image decoding into source slots and bitmap export of canvases

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{Result, TilingError};
use crate::tiling::source::SourceImage;
use image::{GrayImage, ImageFormat, RgbImage};
use std::path::Path;

/// Decodes image files into RGB pixel buffers
pub trait PixelSource {
    /// Decode the file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    fn decode(&self, path: &Path) -> Result<RgbImage>;

    /// Decode the file at `path`, degrading any failure to [`SourceImage::Failed`]
    fn load(&self, path: &Path) -> SourceImage {
        match self.decode(path) {
            Ok(image) => SourceImage::Decoded(image),
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Error loading image");
                SourceImage::Failed
            }
        }
    }
}

/// Decodes any format the `image` crate recognizes, dropping alpha
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFileSource;

impl PixelSource for ImageFileSource {
    fn decode(&self, path: &Path) -> Result<RgbImage> {
        let img = image::open(path).map_err(|e| TilingError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(img.to_rgb8())
    }
}

/// Whether the path carries one of the supported image extensions (case-insensitive)
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Load an explicit list of files, one slot per path
///
/// Missing files and unsupported extensions become failed slots without
/// attempting a decode.
pub fn load_sources<S: PixelSource + ?Sized, P: AsRef<Path>>(
    pixel_source: &S,
    paths: &[P],
) -> Vec<SourceImage> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            if !path.is_file() {
                tracing::warn!(path = %path.display(), "File not found");
                SourceImage::Failed
            } else if !has_supported_extension(path) {
                tracing::warn!(path = %path.display(), "Unsupported file format");
                SourceImage::Failed
            } else {
                pixel_source.load(path)
            }
        })
        .collect()
}

/// Write a canvas as a standard bitmap
///
/// # Errors
///
/// Returns an error if the bitmap cannot be encoded or written
pub fn export_canvas_as_bmp(canvas: &GrayImage, output_path: &Path) -> Result<()> {
    canvas
        .save_with_format(output_path, ImageFormat::Bmp)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
