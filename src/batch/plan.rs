//! Batch count and per-class slice arithmetic

use crate::io::error::{Result, TilingError, invalid_parameter};
use std::ops::Range;

/// Immutable per-run partition of two class pools into equal batches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    /// Images available in the cat pool
    pub total_cats: usize,
    /// Images available in the dog pool
    pub total_dogs: usize,
    /// Number of batches, `floor((cats + dogs) / (2 * batch_size))`
    pub batch_count: usize,
    /// Cat images drawn per batch, `floor(cats / batch_count)`
    pub cats_per_batch: usize,
    /// Dog images drawn per batch, `floor(dogs / batch_count)`
    pub dogs_per_batch: usize,
}

impl BatchPlan {
    /// Partition the pools for the desired batch size
    ///
    /// # Errors
    ///
    /// Returns an error if `batch_size` is zero or the pools cannot fill a single batch
    pub fn new(total_cats: usize, total_dogs: usize, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(invalid_parameter(
                "batch_size",
                &batch_size,
                &"must be greater than zero",
            ));
        }

        let total_images = total_cats + total_dogs;
        let divisor = batch_size.checked_mul(2).ok_or_else(|| {
            invalid_parameter("batch_size", &batch_size, &"is too large")
        })?;
        let batch_count = total_images / divisor;
        if batch_count == 0 {
            return Err(TilingError::NoBatches {
                total_images,
                batch_size,
            });
        }

        Ok(Self {
            total_cats,
            total_dogs,
            batch_count,
            cats_per_batch: total_cats / batch_count,
            dogs_per_batch: total_dogs / batch_count,
        })
    }

    /// Images entering the tiling pipeline per batch
    pub const fn images_per_batch(&self) -> usize {
        self.cats_per_batch + self.dogs_per_batch
    }

    /// Mean of the two per-class counts, as reported at the start of a run
    pub const fn average_batch_size(&self) -> usize {
        self.images_per_batch() / 2
    }

    /// Offsets into the cat pool for batch `batch`
    pub const fn cat_range(&self, batch: usize) -> Range<usize> {
        let start = batch * self.cats_per_batch;
        start..start + self.cats_per_batch
    }

    /// Offsets into the dog pool for batch `batch`
    pub const fn dog_range(&self, batch: usize) -> Range<usize> {
        let start = batch * self.dogs_per_batch;
        start..start + self.dogs_per_batch
    }

    /// Groups produced per batch, counting a final partial group
    pub const fn groups_per_batch(&self, group_size: usize) -> usize {
        self.images_per_batch().div_ceil(group_size)
    }
}
