// THEORY:
// Every fault the engine can raise lives in one taxonomy so that callers get
// a single error type out of the pipeline. The engine performs no local
// recovery: configuration problems are rejected before any work starts, and
// any fault raised mid-scan aborts the whole computation, because a partially
// built histogram cannot be safely resumed or merged.

use std::io;
use thiserror::Error;

/// All faults the census engine can surface. Every variant is fatal to the
/// run; none are retried.
#[derive(Debug, Error)]
pub enum CensusError {
    /// Rejected before any work starts. Bad worker count, an empty pixel
    /// grid, or an unsupported scale fraction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A worker's coordinate math escaped the grid. The partitioner
    /// guarantees this cannot happen for valid inputs, so this variant
    /// indicates a programming defect rather than bad data.
    #[error(
        "worker {worker_id} (pixels {range_start}..{range_end}) ran out of bounds at ({x}, {y}) on a {width}x{height} grid"
    )]
    OutOfBounds {
        worker_id: usize,
        range_start: usize,
        range_end: usize,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The image bytes could not be decoded. Propagated unchanged from the
    /// pixel-source collaborator.
    #[error("failed to decode image: {0}")]
    DecodeFailure(#[from] image::ImageError),

    /// The image file could not be read at all.
    #[error("failed to read image source: {0}")]
    SourceUnavailable(#[from] io::Error),
}
