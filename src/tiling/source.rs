//! Decoded source images and the failure marker that stands in for undecodable files

use image::RgbImage;

/// One slot in a group: either a decoded color image or a marker for a failed decode
///
/// Failed slots keep their position in the group so that grid placement of the
/// remaining images is unaffected; their cell simply stays blank.
#[derive(Debug, Clone)]
pub enum SourceImage {
    /// Successfully decoded RGB pixels
    Decoded(RgbImage),
    /// The file could not be read or decoded
    Failed,
}

impl SourceImage {
    /// Borrow the decoded pixels, if any
    pub const fn as_decoded(&self) -> Option<&RgbImage> {
        match self {
            Self::Decoded(image) => Some(image),
            Self::Failed => None,
        }
    }

    /// Whether this slot is a failure marker
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl From<RgbImage> for SourceImage {
    fn from(image: RgbImage) -> Self {
        Self::Decoded(image)
    }
}
