// THEORY:
// The histogram module holds the two counting structures of the engine and
// the `fold` operation that connects them.
//
// Key architectural principles:
// 1.  **Private Then Shared**: A `LocalHistogram` is owned by exactly one
//     worker for the whole scan phase; it is never visible to any other task
//     until the worker folds it into the `SharedHistogram`. All contention
//     is therefore concentrated in the fold, which runs in time proportional
//     to the number of *distinct* colors in that worker's partition — far
//     smaller than the partition itself.
// 2.  **Commutative Accumulation**: Folding is pure addition per key, so the
//     order in which workers happen to finish can never change the final
//     counts.
// 3.  **Saturating Nothing**: Counts are `u64`; a grid large enough to
//     overflow one is not representable in memory anyway.

use crate::core_modules::pixel::pixel::{ColorKey, Count};
use std::collections::HashMap;

/// A worker-private frequency map, built during the scan phase.
#[derive(Debug, Default, Clone)]
pub struct LocalHistogram {
    counts: HashMap<ColorKey, Count>,
}

impl LocalHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of a color.
    pub fn increment(&mut self, key: ColorKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn distinct_colors(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> Count {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColorKey, &Count)> {
        self.counts.iter()
    }
}

/// The authoritative global frequency map. Mutated only through `fold`,
/// which the pipeline calls under a mutex; read only after every worker has
/// joined.
#[derive(Debug, Default)]
pub struct SharedHistogram {
    counts: HashMap<ColorKey, Count>,
}

impl SharedHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates one worker's local counts. Addition per key, so folds
    /// commute across workers.
    pub fn fold(&mut self, local: &LocalHistogram) {
        for (key, count) in local.iter() {
            *self.counts.entry(*key).or_insert(0) += count;
        }
    }

    pub fn distinct_colors(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts across every color.
    pub fn total(&self) -> Count {
        self.counts.values().sum()
    }

    pub fn count_for(&self, key: &ColorKey) -> Count {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColorKey, &Count)> {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel::pixel::Pixel;

    fn key(r: u8, g: u8, b: u8) -> ColorKey {
        ColorKey::from_pixel(&Pixel::new(r, g, b), 0)
    }

    #[test]
    fn fold_sums_counts_per_key() {
        let mut a = LocalHistogram::new();
        a.increment(key(1, 2, 3));
        a.increment(key(1, 2, 3));
        let mut b = LocalHistogram::new();
        b.increment(key(1, 2, 3));
        b.increment(key(9, 9, 9));

        let mut shared = SharedHistogram::new();
        shared.fold(&a);
        shared.fold(&b);

        assert_eq!(shared.count_for(&key(1, 2, 3)), 3);
        assert_eq!(shared.count_for(&key(9, 9, 9)), 1);
        assert_eq!(shared.total(), 4);
        assert_eq!(shared.distinct_colors(), 2);
    }

    #[test]
    fn fold_order_does_not_change_counts() {
        let mut locals = Vec::new();
        for worker in 0..4u8 {
            let mut local = LocalHistogram::new();
            for i in 0..worker + 1 {
                local.increment(key(worker, i, 0));
                local.increment(key(0, 0, 0));
            }
            locals.push(local);
        }

        let mut forward = SharedHistogram::new();
        for local in &locals {
            forward.fold(local);
        }
        let mut backward = SharedHistogram::new();
        for local in locals.iter().rev() {
            backward.fold(local);
        }

        assert_eq!(forward.total(), backward.total());
        for (color, count) in forward.iter() {
            assert_eq!(backward.count_for(color), *count);
        }
    }
}
