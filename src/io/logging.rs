//! Tracing subscriber setup for the command-line tool
//!
//! Log lines go to stderr. While progress bars are drawn, each line is written
//! with the bars suspended so the two never interleave on the terminal.

use crate::io::configuration::LOG_ENV_VAR;
use indicatif::MultiProgress;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive: informational run output, or warnings only when quiet
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "tilesheet=warn" } else { "tilesheet=info" }
}

/// Build the log filter from the environment, falling back to [`default_directive`]
pub fn log_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)))
}

/// Stderr writer that hides any attached progress bars for the duration of a write
#[derive(Clone, Default)]
pub struct ProgressAwareWriter {
    multi_progress: Option<MultiProgress>,
}

impl ProgressAwareWriter {
    /// Writer that suspends `multi_progress` around every log line, if given
    pub fn new(multi_progress: Option<&MultiProgress>) -> Self {
        Self {
            multi_progress: multi_progress.cloned(),
        }
    }

    /// Whether writes are coordinated with progress bars
    pub const fn is_attached(&self) -> bool {
        self.multi_progress.is_some()
    }
}

impl Write for ProgressAwareWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // one formatted event per call; write it whole so the bars redraw once
        let write_line = || io::stderr().lock().write_all(buf);
        match self.multi_progress {
            Some(ref mp) => mp.suspend(write_line),
            None => write_line(),
        }?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for ProgressAwareWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install the global subscriber; later calls are ignored
///
/// Pass the run's progress display so log lines are printed between redraws.
pub fn init_logging(quiet: bool, progress: Option<&MultiProgress>) {
    let _ = tracing_subscriber::registry()
        .with(log_filter(quiet))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(ProgressAwareWriter::new(progress)),
        )
        .try_init();
}
