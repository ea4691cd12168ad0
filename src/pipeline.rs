// THEORY:
// The `pipeline` module is the top-level API for the histogram engine. It
// encapsulates the full stack — partitioning, the worker pool, the merge,
// and the ranking — behind a single, easy-to-use interface.
//
// Key architectural principles:
// 1.  **Validate, Then Spawn**: The configuration is checked before any task
//     is created. A bad worker count or an empty grid never reaches the
//     worker pool.
// 2.  **Scan Private, Merge Locked**: Each worker scans its partition into a
//     private local histogram with zero synchronization, then takes the
//     shared-histogram mutex just long enough to fold its counts in. A
//     worker that finishes early folds and releases; it never waits on the
//     others.
// 3.  **Full Join Barrier**: Ranking starts only after every worker has both
//     finished scanning and finished folding. No partial result is ever
//     visible to a caller.
// 4.  **Fail Fast**: The first fault from any worker aborts the whole run.
//     The faulting worker never folds its partial histogram, and the
//     combined result is discarded.

use crate::core_modules::histogram::SharedHistogram;
use crate::core_modules::partitioner::partition;
use crate::core_modules::pixel::pixel::Channel;
use crate::core_modules::pixel_grid::PixelGrid;
use crate::core_modules::ranker::rank;
use crate::core_modules::worker::scan_partition;
use crate::errors::CensusError;
use std::sync::{Arc, Mutex};

// Re-export key data structures for the public API.
pub use crate::core_modules::image_source::{load_pixel_grid, ScaleFactor};
pub use crate::core_modules::pixel::pixel::ColorKey;
pub use crate::core_modules::ranker::RankedEntry;

const DEFAULT_TOP_K: usize = 10;

/// Configuration for the census engine, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct CensusConfig {
    /// Number of parallel workers the pixel space is split across. Must be
    /// at least 1.
    pub worker_count: usize,
    /// How many ranked entries to return.
    pub top_k: usize,
    /// Channel bucketing width used to merge near-duplicate colors before
    /// counting. 0 or 1 disables quantization.
    pub quantization_offset: Channel,
    /// Downscale applied when loading the image, to bound total pixel work.
    pub scale: ScaleFactor,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get().max(1),
            top_k: DEFAULT_TOP_K,
            quantization_offset: 0,
            scale: ScaleFactor::default(),
        }
    }
}

impl CensusConfig {
    fn validate(&self) -> Result<(), CensusError> {
        if self.worker_count == 0 {
            return Err(CensusError::InvalidConfiguration(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// The parallel color-frequency engine. One instance runs one census per
/// call; the pixel grid is shared read-only across all workers.
pub struct CensusPipeline {
    config: CensusConfig,
}

impl CensusPipeline {
    pub fn new(config: CensusConfig) -> Self {
        Self { config }
    }

    /// Runs the full scan → merge → rank sequence over a pixel grid and
    /// returns up to `top_k` entries, most frequent first.
    pub async fn run(&self, grid: Arc<PixelGrid>) -> Result<Vec<RankedEntry>, CensusError> {
        self.config.validate()?;
        let partitions = partition(grid.pixel_count(), self.config.worker_count)?;

        log::info!(
            "scanning {} pixels across {} workers ({} per partition)",
            grid.pixel_count(),
            partitions.len(),
            partitions.first().map(|p| p.len()).unwrap_or(0)
        );

        let shared = Arc::new(Mutex::new(SharedHistogram::new()));
        let mut workers = Vec::with_capacity(partitions.len());

        for part in partitions {
            let grid = Arc::clone(&grid);
            let shared = Arc::clone(&shared);
            let quantization_offset = self.config.quantization_offset;

            workers.push(tokio::spawn(async move {
                // Scan phase: worker-private, no synchronization.
                let local = scan_partition(&grid, &part, quantization_offset)?;
                log::debug!(
                    "worker {} counted {} distinct colors",
                    part.worker_id,
                    local.distinct_colors()
                );

                // Fold phase: hold the lock only for this worker's merge.
                let mut histogram = shared.lock().unwrap();
                histogram.fold(&local);
                Ok::<(), CensusError>(())
            }));
        }

        // Join barrier: every worker must finish scanning and folding before
        // the histogram is read.
        let results = futures::future::try_join_all(workers)
            .await
            .expect("census worker panicked");
        for result in results {
            result?;
        }

        let histogram = Arc::into_inner(shared)
            .expect("workers still hold the shared histogram after join")
            .into_inner()
            .unwrap();

        log::info!(
            "merged histogram holds {} distinct colors ({} pixels counted)",
            histogram.distinct_colors(),
            histogram.total()
        );

        Ok(rank(&histogram, self.config.top_k))
    }
}
