use std::ops::Range;

use crate::config::GridConfig;
use crate::data::row_sample::RowSample;

/// Estimates per-column pixel widths from the sampled data rows.
///
/// A column's width is driven by the longest cell observed in the sample
/// (header excluded), converted to pixels with a fixed per-character factor
/// and floored at the configured minimum. Pure: no dependency on cache or
/// window state.
#[derive(Debug, Clone)]
pub struct WidthEstimator {
    min_column_width_px: f64,
    char_to_pixel_factor: f64,
}

impl WidthEstimator {
    pub fn new(min_column_width_px: f64, char_to_pixel_factor: f64) -> Self {
        Self {
            min_column_width_px,
            char_to_pixel_factor,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.min_column_width_px, config.char_to_pixel_factor)
    }

    /// One width per column ordinal in `columns`, aligned by position.
    ///
    /// Missing cells (ragged rows, or columns past a row's end) count as
    /// length 0, so a column that no sampled row reaches still estimates to
    /// the minimum width rather than failing.
    pub fn estimate(&self, sample: &RowSample, columns: Range<usize>) -> Vec<f64> {
        columns.map(|col| self.estimate_column(sample, col)).collect()
    }

    fn estimate_column(&self, sample: &RowSample, column: usize) -> f64 {
        let max_chars = sample
            .data_rows()
            .iter()
            .map(|row| row.get(column).map_or(0, |cell| cell.chars().count()))
            .max()
            .unwrap_or(0);

        (max_chars as f64 * self.char_to_pixel_factor).max(self.min_column_width_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_with(cells: Vec<Vec<&str>>) -> RowSample {
        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        let mut rows: Vec<Vec<String>> =
            vec![(0..columns).map(|i| format!("field_{}", i)).collect()];
        for row in cells {
            rows.push(row.into_iter().map(str::to_string).collect());
        }
        RowSample::new(rows, "field_").unwrap()
    }

    #[test]
    fn width_from_longest_cell_with_minimum_floor() {
        let estimator = WidthEstimator::new(200.0, 10.0);
        let sample = sample_with(vec![
            vec!["abc", "1234567890123456789012345"],
            vec!["abcdef", "x"],
        ]);

        let widths = estimator.estimate(&sample, 0..2);
        // 6 chars * 10 = 60 → floored at 200; 25 chars * 10 = 250.
        assert_eq!(widths, vec![200.0, 250.0]);
    }

    #[test]
    fn header_row_does_not_count() {
        let estimator = WidthEstimator::new(100.0, 10.0);
        // Header names are long but the single data cell is short.
        let sample = sample_with(vec![vec!["ab"]]);
        assert_eq!(estimator.estimate(&sample, 0..1), vec![100.0]);
    }

    #[test]
    fn ragged_and_out_of_range_columns_estimate_to_minimum() {
        let estimator = WidthEstimator::new(200.0, 10.0);
        let sample = sample_with(vec![vec!["abcdefghij", "klmnopqrstuvwxyzabcdefghij"]]);

        // Column 5 exists in no row at all.
        let widths = estimator.estimate(&sample, 1..6);
        assert_eq!(widths[0], 260.0);
        assert!(widths[1..].iter().all(|&w| w == 200.0));
    }
}
