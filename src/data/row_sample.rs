use std::ops::Range;

use tracing::warn;

use crate::error::{GridError, Result};

/// Decode a column name of the form `<prefix><ordinal>` into its logical
/// column index. Returns `None` for anything that doesn't match.
pub fn decode_column_index(name: &str, prefix: &str) -> Option<usize> {
    name.strip_prefix(prefix)?.parse::<usize>().ok()
}

/// A fixed sample of the dataset: header row first, then up to 49 data rows.
///
/// Loaded once, immutable for the lifetime of the session. The width
/// estimator measures these rows; the cache and controller work on the
/// logical column indices decoded from the header names.
#[derive(Debug, Clone)]
pub struct RowSample {
    /// Row 0 is the header row.
    rows: Vec<Vec<String>>,
    /// Logical column index per header position; `None` means the header
    /// name didn't match the expected `<prefix><ordinal>` pattern.
    decoded: Vec<Option<usize>>,
}

impl RowSample {
    /// Build a sample from already-parsed rows. The first row is the header;
    /// malformed header names are reported and left undecodable rather than
    /// failing the load.
    pub fn new(rows: Vec<Vec<String>>, column_name_prefix: &str) -> Result<Self> {
        let header = rows.first().ok_or(GridError::EmptySample)?;

        let decoded: Vec<Option<usize>> = header
            .iter()
            .map(|name| {
                let index = decode_column_index(name, column_name_prefix);
                if index.is_none() {
                    warn!(
                        target: "sample",
                        "column name {:?} does not match pattern {:?}<ordinal>, column left unresolved",
                        name, column_name_prefix
                    );
                }
                index
            })
            .collect();

        Ok(Self { rows, decoded })
    }

    /// All sampled rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The data rows only (header excluded).
    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Total column count of the underlying dataset, per the header row.
    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Logical column index at a header position, or `None` past the header
    /// or where the name failed to decode.
    pub fn column_index(&self, position: usize) -> Option<usize> {
        self.decoded.get(position).copied().flatten()
    }

    /// Slice every row (header included) down to a contiguous column range.
    /// Rows shorter than the range contribute only the cells they have.
    pub fn slice_columns(&self, columns: Range<usize>) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let end = columns.end.min(row.len());
                if columns.start >= end {
                    Vec::new()
                } else {
                    row[columns.start..end].to_vec()
                }
            })
            .collect()
    }
}
