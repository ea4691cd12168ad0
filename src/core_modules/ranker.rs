// THEORY:
// The `Ranker` turns the finalized shared histogram into the engine's
// output: an ordered list of the most frequent colors. It runs strictly
// after the join barrier, so it only ever sees a fully merged histogram.
//
// Ordering is by count descending. Counts alone leave ties unordered, which
// would make the output flap between runs, so equal counts fall back to
// ascending lexicographic order on the color key. The tie-break is part of
// the output contract: the same grid and configuration always rank the same.

use crate::core_modules::histogram::SharedHistogram;
use crate::core_modules::pixel::pixel::{ColorKey, Count};

/// One entry of the ranked output: a color and how often it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    pub color: ColorKey,
    pub count: Count,
}

/// Produces up to `top_k` entries sorted by count descending, ties broken by
/// ascending color key. Asking for more entries than there are distinct
/// colors returns every distinct color.
pub fn rank(histogram: &SharedHistogram, top_k: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = histogram
        .iter()
        .map(|(color, count)| RankedEntry {
            color: *color,
            count: *count,
        })
        .collect();

    entries.sort_unstable_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.color.cmp(&b.color))
    });
    entries.truncate(top_k);
    entries
}
