use std::ops::Range;

use tracing::{debug, warn};

use crate::config::GridConfig;
use crate::data::row_sample::RowSample;
use crate::grid::offset_cache::ColumnOffsetCache;
use crate::grid::width_estimator::WidthEstimator;

/// Which way the window moved while handling a scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowShift {
    Forward,
    Backward,
    None,
}

/// Owns the preload window and drives the offset cache as scroll samples
/// arrive.
///
/// The window `[scroll_start_index, scroll_end_index)` covers
/// `visible_column_count * preload_multiplier` columns and moves in strides
/// of `visible_column_count`. Each scroll sample runs one synchronous
/// pipeline: compare position against cached bounds, shift, re-slice,
/// extend, prune, publish. Samples must be rate-limited upstream; the
/// controller assumes at most one in-flight pipeline and takes no locks.
///
/// All mutable state lives here, so multiple grids can coexist without
/// interference.
pub struct ScrollWindowController {
    sample: RowSample,
    cache: ColumnOffsetCache,
    scroll_start_index: usize,
    scroll_end_index: usize,
    visible_column_count: usize,
    viewport_width_px: f64,
    scroll_slack_multiplier: f64,
    /// The published slice for the active window, header row first.
    rows: Vec<Vec<String>>,
}

impl ScrollWindowController {
    /// Build the controller over an already-loaded sample and run the
    /// initial extension so the first window renders immediately.
    ///
    /// `viewport_width_px` is the on-screen width of the scroll container,
    /// measured by the view.
    pub fn new(sample: RowSample, config: &GridConfig, viewport_width_px: f64) -> Self {
        let visible = config.visible_column_count.max(1);
        let preload = config.preload_window();
        let estimator = WidthEstimator::from_config(config);

        let mut controller = Self {
            sample,
            cache: ColumnOffsetCache::new(estimator),
            scroll_start_index: 0,
            scroll_end_index: preload,
            visible_column_count: visible,
            viewport_width_px,
            scroll_slack_multiplier: config.scroll_slack_multiplier,
            rows: Vec::new(),
        };
        controller.update_rows();
        controller
    }

    /// Handle one absolute horizontal scroll position sample.
    ///
    /// Forward is checked before backward, so a position beyond both bounds
    /// shifts forward. Backward shifting is guarded so the start index never
    /// goes below zero; scrolling back past the first page is a no-op.
    pub fn on_scroll(&mut self, scroll_left: f64) -> WindowShift {
        let stride = self.visible_column_count;

        let (left_bound, end_offset) = match (
            self.cache.offset_of(self.scroll_start_index),
            self.cache.offset_of(self.scroll_end_index),
        ) {
            (Some(left), Some(end)) => (left, end),
            _ => {
                // Either edge of the preload window has no resolved offset,
                // which happens when the window has run past the table's
                // real width or header names in range failed to decode.
                warn!(
                    target: "controller",
                    "window bounds unresolved at [{}, {}), holding position",
                    self.scroll_start_index, self.scroll_end_index
                );
                self.update_rows();
                return WindowShift::None;
            }
        };
        let right_bound = end_offset - self.viewport_width_px * self.scroll_slack_multiplier;

        let shift = if scroll_left > right_bound {
            self.scroll_start_index += stride;
            self.scroll_end_index += stride;
            WindowShift::Forward
        } else if scroll_left < left_bound && self.scroll_start_index >= stride {
            self.scroll_start_index -= stride;
            self.scroll_end_index -= stride;
            WindowShift::Backward
        } else {
            WindowShift::None
        };

        if shift != WindowShift::None {
            debug!(
                target: "controller",
                "scroll_left {:.0} outside [{:.0}, {:.0}], window now [{}, {})",
                scroll_left, left_bound, right_bound,
                self.scroll_start_index, self.scroll_end_index
            );
        }

        self.update_rows();
        shift
    }

    /// Re-slice the sample to the current window, extend the cache over it
    /// (end index included, so the right bound and the trailing spacer stay
    /// derivable), and prune to the retained neighborhood of one stride on
    /// each side.
    fn update_rows(&mut self) {
        let stride = self.visible_column_count;
        self.rows = self
            .sample
            .slice_columns(self.scroll_start_index..self.scroll_end_index);
        self.cache
            .extend(&self.sample, self.scroll_start_index..self.scroll_end_index + 1);
        self.cache.prune(
            self.scroll_start_index.saturating_sub(stride)..self.scroll_end_index + stride,
        );
    }

    /// The currently sliced rows for the active window, header row first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Left pixel offset for a render-local column index.
    ///
    /// The render index is translated back to a logical column index through
    /// the sliced header names; an index at or past the slice width maps to
    /// the column one past the last, whose offset the cache already derived
    /// from the last column's offset plus its width, so a trailing spacer
    /// can be positioned. `None` means unresolved: don't render.
    pub fn left_pixel_offset(&self, render_index: usize) -> Option<f64> {
        let header = self.rows.first()?;
        if header.is_empty() {
            return None;
        }

        let logical = if render_index >= header.len() {
            let last_position = self.scroll_start_index + header.len() - 1;
            self.sample.column_index(last_position)? + 1
        } else {
            self.sample.column_index(self.scroll_start_index + render_index)?
        };
        self.cache.offset_of(logical)
    }

    /// The active preload window `[scroll_start_index, scroll_end_index)`.
    pub fn window(&self) -> Range<usize> {
        self.scroll_start_index..self.scroll_end_index
    }

    pub fn visible_column_count(&self) -> usize {
        self.visible_column_count
    }

    pub fn cache(&self) -> &ColumnOffsetCache {
        &self.cache
    }

    pub fn sample(&self) -> &RowSample {
        &self.sample
    }
}
