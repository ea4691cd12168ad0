// THEORY:
// The `Partitioner` decides which worker scans which pixels. It divides the
// linear pixel index space `[0, P)` into `W` equally sized contiguous
// ranges, one per worker, and owns the math that maps a linear index back to
// `(x, y)` coordinates.
//
// Key architectural principles:
// 1.  **Contiguity**: Each worker receives one contiguous slab of the index
//     space. Contiguous slabs keep the scan cache-friendly and make the
//     worker's wrap-to-next-row walk trivial.
// 2.  **Documented Remainder Drop**: When `P` is not evenly divisible by
//     `W`, the remainder (`P mod W`, at most `W - 1` pixels) is silently
//     dropped from the tail of the index space. This is a stated boundary
//     behavior of the engine, carried over deliberately — at most `W - 1`
//     pixels out of the whole image never shift the ranking in practice.
// 3.  **Fail Before Work**: A zero worker count or an empty grid is rejected
//     here, before any task is spawned.

use crate::errors::CensusError;

/// One contiguous half-open range of linear pixel indices assigned to a
/// single worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Which worker owns this range, for fault reporting.
    pub worker_id: usize,
    /// First linear pixel index in the range (inclusive).
    pub start: usize,
    /// One past the last linear pixel index in the range (exclusive).
    pub end: usize,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `pixel_count` linear indices into `worker_count` equal contiguous
/// ranges. Remainder pixels past `worker_count * floor(P / W)` belong to no
/// range and are dropped (see module THEORY).
pub fn partition(pixel_count: usize, worker_count: usize) -> Result<Vec<Partition>, CensusError> {
    if worker_count == 0 {
        return Err(CensusError::InvalidConfiguration(
            "worker count must be at least 1".to_string(),
        ));
    }
    if pixel_count == 0 {
        return Err(CensusError::InvalidConfiguration(
            "pixel grid is empty".to_string(),
        ));
    }

    let chunk_size = pixel_count / worker_count;
    Ok((0..worker_count)
        .map(|worker_id| Partition {
            worker_id,
            start: worker_id * chunk_size,
            end: (worker_id + 1) * chunk_size,
        })
        .collect())
}

/// Maps a linear pixel index to `(x, y)` coordinates for a grid of the given
/// width.
#[inline]
pub fn coordinates(index: usize, grid_width: u32) -> (u32, u32) {
    let width = grid_width as usize;
    ((index % width) as u32, (index / width) as u32)
}
