use std::collections::BTreeMap;
use std::ops::Range;

use tracing::{debug, warn};

use crate::data::row_sample::RowSample;
use crate::grid::width_estimator::WidthEstimator;

/// Sparse mapping from logical column index to absolute left pixel offset.
///
/// Column 0 is the permanent anchor at offset 0; every other offset is
/// derived from a known neighbor by relative extension:
///
/// ```text
/// offset(k) = offset(k - 1) + width(k)      rightward
/// offset(k) = offset(k + 1) - width(k + 1)  leftward
/// ```
///
/// The two formulas describe the same value, so extension is idempotent and
/// independent of the direction the window grew from. Entries outside the
/// active neighborhood are evicted by `prune`; the anchor never is.
///
/// The retained bounds live in an explicit field next to the map rather than
/// as sentinel entries inside it.
#[derive(Debug, Clone)]
pub struct ColumnOffsetCache {
    offsets: BTreeMap<usize, f64>,
    retained: Range<usize>,
    estimator: WidthEstimator,
}

impl ColumnOffsetCache {
    pub fn new(estimator: WidthEstimator) -> Self {
        let mut offsets = BTreeMap::new();
        offsets.insert(0, 0.0);
        Self {
            offsets,
            retained: 0..0,
            estimator,
        }
    }

    /// Derive offsets for every column in `columns` not already present.
    ///
    /// Two directed passes over the full range, rightward then leftward, so
    /// each pass chains off offsets it just computed and a single call
    /// propagates outward from any known anchor inside or adjacent to the
    /// range. A column whose neighbors are both unknown, or whose header
    /// name failed to decode, is left unresolved for this call.
    pub fn extend(&mut self, sample: &RowSample, columns: Range<usize>) {
        if columns.is_empty() {
            return;
        }

        // The rightward pass needs width(k) for k in range, the leftward
        // pass width(k + 1); estimate both in one positional sweep.
        let widths_from = columns.start;
        let widths = self
            .estimator
            .estimate(sample, widths_from..columns.end + 1);
        let width = |index: usize| widths[index - widths_from];

        let mut inserted = 0usize;

        // Rightward pass, ascending: chain off the left neighbor.
        for index in columns.clone() {
            if self.offsets.contains_key(&index) || sample.column_index(index).is_none() {
                continue;
            }
            if index > 0 {
                if let Some(&left) = self.offsets.get(&(index - 1)) {
                    self.offsets.insert(index, left + width(index));
                    inserted += 1;
                }
            }
        }

        // Leftward pass, descending: chain off the right neighbor.
        for index in columns.clone().rev() {
            if self.offsets.contains_key(&index) || sample.column_index(index).is_none() {
                continue;
            }
            if let Some(&right) = self.offsets.get(&(index + 1)) {
                self.offsets.insert(index, right - width(index + 1));
                inserted += 1;
            }
        }

        let unresolved: Vec<usize> = columns
            .clone()
            .filter(|&index| {
                sample.column_index(index).is_some() && !self.offsets.contains_key(&index)
            })
            .collect();
        if !unresolved.is_empty() {
            // Caller contract: requested ranges must touch a known offset.
            warn!(
                target: "offset_cache",
                "extend({:?}) left {} columns unresolved (no adjacent known offset): {:?}",
                columns, unresolved.len(), unresolved
            );
        }
        debug!(
            target: "offset_cache",
            "extend({:?}): {} inserted, {} entries cached",
            columns, inserted, self.offsets.len()
        );
    }

    /// Evict every entry outside `retain`, keeping the index-0 anchor.
    pub fn prune(&mut self, retain: Range<usize>) {
        let before = self.offsets.len();
        self.offsets
            .retain(|&index, _| index == 0 || retain.contains(&index));
        self.retained = retain;
        let evicted = before - self.offsets.len();
        if evicted > 0 {
            debug!(
                target: "offset_cache",
                "prune({:?}): {} evicted, {} retained",
                self.retained, evicted, self.offsets.len()
            );
        }
    }

    /// The cached left pixel offset of a column, or `None` while unresolved.
    /// Callers must not render a column whose offset is unresolved.
    pub fn offset_of(&self, index: usize) -> Option<f64> {
        self.offsets.get(&index).copied()
    }

    /// The neighborhood bounds applied by the last `prune`.
    pub fn retained_range(&self) -> Range<usize> {
        self.retained.clone()
    }

    /// Indices currently resolved, in ascending order.
    pub fn resolved_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
