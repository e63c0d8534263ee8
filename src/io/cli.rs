//! Command-line interface for tiling two labeled image pools into training sheets

use crate::batch::{BatchAssembler, BatchReport, ImagePool};
use crate::io::configuration::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_BATCH_SIZE, DEFAULT_NOISE_LEVEL, DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_parameter, io_error};
use crate::io::export::write_group_output;
use crate::io::image::ImageFileSource;
use crate::io::progress::ProgressManager;
use crate::tiling::noise::validate_noise_level;
use crate::tiling::pipeline::TileSettings;
use clap::Parser;
use indicatif::MultiProgress;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilesheet")]
#[command(
    author,
    version,
    about = "Tile labeled image pools into grayscale contact sheets and normalized matrices"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// Directory holding the cat pool
    #[arg(value_name = "CAT_DIR")]
    pub cat_dir: PathBuf,

    /// Directory holding the dog pool
    #[arg(value_name = "DOG_DIR")]
    pub dog_dir: PathBuf,

    /// Directory receiving `<id>.bmp` and `<id>.json` pairs
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Desired images per class per batch
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Random seed for reproducible shuffling and noise
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Fraction of canvas pixels overwritten by salt-and-pepper noise
    #[arg(short, long, default_value_t = DEFAULT_NOISE_LEVEL)]
    pub noise: f64,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = CANVAS_HEIGHT)]
    pub height: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Canvas and noise settings shared by every group
    pub const fn tile_settings(&self) -> TileSettings {
        TileSettings {
            canvas_width: self.width,
            canvas_height: self.height,
            noise_level: self.noise,
        }
    }

    /// Check run parameters before any pool is read
    ///
    /// # Errors
    ///
    /// Returns an error for a zero batch size, zero canvas dimension, or noise outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(invalid_parameter(
                "batch_size",
                &self.batch_size,
                &"must be greater than zero",
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{}x{}", self.width, self.height),
                &"dimensions must be greater than zero",
            ));
        }
        validate_noise_level(self.noise)
    }
}

/// Totals accumulated over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Batches fully processed
    pub batches: usize,
    /// Output pairs written
    pub groups_written: usize,
    /// Groups skipped after a per-group error
    pub groups_skipped: usize,
    /// Sources that failed to decode
    pub failed_sources: usize,
}

impl RunSummary {
    fn record(&mut self, report: BatchReport) {
        self.batches += 1;
        self.groups_written += report.groups_written;
        self.groups_skipped += report.groups_skipped;
        self.failed_sources += report.failed_sources;
    }
}

/// Orchestrates a full tiling run with progress tracking
pub struct RunProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RunProcessor {
    /// Create a new run processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Progress display for this run, `None` when quiet
    pub fn progress_display(&self) -> Option<&MultiProgress> {
        self.progress_manager
            .as_ref()
            .map(ProgressManager::multi_progress)
    }

    /// Process every batch according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid, a pool directory is missing,
    /// the pools cannot fill a batch, or an output file cannot be written
    pub fn process(&mut self) -> Result<RunSummary> {
        self.cli.validate()?;

        let cats = ImagePool::discover("cat", &self.cli.cat_dir)?;
        let dogs = ImagePool::discover("dog", &self.cli.dog_dir)?;
        for pool in [&cats, &dogs] {
            tracing::debug!(pool = pool.label(), images = pool.len(), "discovered pool");
        }
        let assembler = BatchAssembler::new(cats, dogs, self.cli.batch_size)?;
        let plan = *assembler.plan();

        tracing::info!(
            "Total images: Cats={}, Dogs={}",
            plan.total_cats,
            plan.total_dogs
        );
        tracing::info!(
            "Calculated N={}, will take {} cats and {} dogs per batch",
            plan.batch_count,
            plan.cats_per_batch,
            plan.dogs_per_batch
        );
        tracing::info!("Average batch size will be {}", plan.average_batch_size());

        std::fs::create_dir_all(&self.cli.output_dir)
            .map_err(|e| io_error(&self.cli.output_dir, "create_dir_all", e))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(plan.batch_count);
        }

        let settings = self.cli.tile_settings();
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut summary = RunSummary::default();

        for batch in 0..plan.batch_count {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_batch(batch, plan.groups_per_batch(assembler.group_size()));
            }

            let output_dir = &self.cli.output_dir;
            let progress = self.progress_manager.as_ref();
            let report = assembler.process_batch(
                batch,
                &mut rng,
                &ImageFileSource,
                &settings,
                |output| {
                    write_group_output(output_dir, &output)?;
                    if let Some(pm) = progress {
                        pm.complete_group();
                    }
                    Ok(())
                },
            )?;
            summary.record(report);

            if let Some(ref pm) = self.progress_manager {
                pm.complete_batch();
            }
            tracing::info!("Processed batch {} of {}", batch + 1, plan.batch_count);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(summary)
    }
}
