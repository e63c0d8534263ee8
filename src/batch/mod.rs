//! Partitioning of labeled pools into batches and groups

/// Slice, shuffle and group sources for the tiling pipeline
pub mod assembler;
/// Batch count and per-class slice arithmetic
pub mod plan;
/// Image pool discovery
pub mod pool;

pub use assembler::{BatchAssembler, BatchReport};
pub use plan::BatchPlan;
pub use pool::ImagePool;
