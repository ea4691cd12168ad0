// THEORY:
// The `Worker` module is the hot loop of the engine: one call scans one
// partition of the pixel index space and produces one local histogram. It is
// a pure function of the grid and the partition — no shared mutable state is
// touched during the scan, which is what allows every worker to run in full
// parallel with no ordering constraints between them.
//
// The walk keeps running `(x, y)` coordinates instead of dividing on every
// iteration: when `x` runs past the grid width it wraps to the start of the
// next row. If `y` ever runs past the grid height the partitioning invariant
// has been violated, and the scan aborts with a typed fault instead of
// reading garbage — partial results from a broken walk must never reach the
// shared histogram.

use crate::core_modules::histogram::LocalHistogram;
use crate::core_modules::partitioner::{coordinates, Partition};
use crate::core_modules::pixel::pixel::{Channel, ColorKey};
use crate::core_modules::pixel_grid::PixelGrid;
use crate::errors::CensusError;

/// Scans one partition of the grid and counts color occurrences into a fresh
/// local histogram.
pub fn scan_partition(
    grid: &PixelGrid,
    partition: &Partition,
    quantization_offset: Channel,
) -> Result<LocalHistogram, CensusError> {
    let mut local = LocalHistogram::new();
    let (mut x, mut y) = coordinates(partition.start, grid.width());

    for _ in partition.start..partition.end {
        if x >= grid.width() {
            x = 0;
            y += 1;
        }

        if y >= grid.height() {
            return Err(CensusError::OutOfBounds {
                worker_id: partition.worker_id,
                range_start: partition.start,
                range_end: partition.end,
                x,
                y,
                width: grid.width(),
                height: grid.height(),
            });
        }

        let pixel = grid.at(x, y);
        local.increment(ColorKey::from_pixel(&pixel, quantization_offset));
        x += 1;
    }

    Ok(local)
}
