use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading or parsing the row sample.
///
/// These surface before the grid core is ever instantiated; the cache and
/// controller never see partial data.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse delimited text: {0}")]
    Csv(#[from] csv::Error),

    /// The sample contained no header row at all.
    #[error("sample is empty: no header row")]
    EmptySample,
}

pub type Result<T> = std::result::Result<T, GridError>;
