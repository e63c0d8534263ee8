//! Input/output, configuration and error handling

/// Command-line arguments and run orchestration
pub mod cli;
/// Run constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Group output writers
pub mod export;
/// Image decoding and bitmap export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars
pub mod progress;
