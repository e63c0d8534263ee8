//! Batch assembly: per-class slices, seeded interleaving, groups of four
//!
//! Each batch takes a contiguous slice from both pools, shuffles the combined
//! list with the run's generator and tiles it in consecutive groups. Only file
//! paths are held for the whole batch; pixels are decoded per group and
//! dropped before the next group starts.

use crate::batch::plan::BatchPlan;
use crate::batch::pool::ImagePool;
use crate::io::configuration::GROUP_SIZE;
use crate::io::error::Result;
use crate::io::image::PixelSource;
use crate::tiling::pipeline::{TileSettings, TiledOutput, create_tiled_output};
use crate::tiling::source::SourceImage;
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::PathBuf;

/// Outcome counts for one processed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Groups whose output pair was handed to the sink
    pub groups_written: usize,
    /// Groups rejected by the tiling pipeline
    pub groups_skipped: usize,
    /// Sources that could not be decoded
    pub failed_sources: usize,
}

/// Splits two labeled pools into batches and feeds them to the tiling pipeline
#[derive(Debug, Clone)]
pub struct BatchAssembler {
    cats: ImagePool,
    dogs: ImagePool,
    plan: BatchPlan,
    group_size: usize,
}

impl BatchAssembler {
    /// Plan batches of `batch_size` over the two pools
    ///
    /// # Errors
    ///
    /// Returns an error if `batch_size` is zero or the pools are too small for one batch
    pub fn new(cats: ImagePool, dogs: ImagePool, batch_size: usize) -> Result<Self> {
        let plan = BatchPlan::new(cats.len(), dogs.len(), batch_size)?;
        Ok(Self {
            cats,
            dogs,
            plan,
            group_size: GROUP_SIZE,
        })
    }

    /// The batch plan computed from the pool sizes
    pub const fn plan(&self) -> &BatchPlan {
        &self.plan
    }

    /// Number of sources per tiling call
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// Combined, shuffled source paths for batch `batch`
    ///
    /// Draws from `rng`, so the order for a batch depends on every draw made
    /// before it in the run.
    pub fn batch_paths<R: Rng + ?Sized>(&self, batch: usize, rng: &mut R) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .cats
            .slice(self.plan.cat_range(batch))
            .iter()
            .chain(self.dogs.slice(self.plan.dog_range(batch)))
            .cloned()
            .collect();
        paths.shuffle(rng);
        paths
    }

    /// Tile every group of batch `batch`, handing each output to `sink`
    ///
    /// Groups rejected by the pipeline are logged and skipped. Decoded pixels
    /// for a group are released before the next group is decoded.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `sink`, or any run-fatal pipeline error
    pub fn process_batch<R, S, F>(
        &self,
        batch: usize,
        rng: &mut R,
        pixel_source: &S,
        settings: &TileSettings,
        mut sink: F,
    ) -> Result<BatchReport>
    where
        R: Rng + ?Sized,
        S: PixelSource + ?Sized,
        F: FnMut(TiledOutput) -> Result<()>,
    {
        let paths = self.batch_paths(batch, rng);
        let mut report = BatchReport::default();

        for (group_index, group) in paths.chunks(self.group_size).enumerate() {
            let sources: Vec<SourceImage> =
                group.iter().map(|path| pixel_source.load(path)).collect();
            report.failed_sources += sources.iter().filter(|s| s.is_failed()).count();

            let tiled = create_tiled_output(&sources, settings, rng);
            drop(sources);

            match tiled {
                Ok(output) => {
                    sink(output)?;
                    report.groups_written += 1;
                }
                Err(e) if !e.is_fatal() => {
                    tracing::warn!(batch, group = group_index, %e, "skipping group");
                    report.groups_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}
