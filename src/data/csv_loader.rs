use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::SourceConfig;
use crate::data::row_sample::RowSample;
use crate::error::{GridError, Result};

/// Load the row sample from a file path or an HTTP(S) URL.
///
/// Loading happens once, before the grid core is constructed; any failure
/// here is surfaced to the caller and the core never sees partial data.
pub fn load_sample(source: &str, config: &SourceConfig) -> Result<RowSample> {
    let raw = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_text(source)?
    } else {
        read_file(Path::new(source))?
    };
    parse_sample(&raw, config)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn fetch_text(url: &str) -> Result<String> {
    let map_err = |source: reqwest::Error| GridError::Http {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(map_err)?;
    response.text().map_err(map_err)
}

/// Parse raw delimited text into the fixed row sample: header row plus at
/// most `sample_row_count - 1` data rows. Ragged rows are kept as-is; the
/// estimator treats their missing cells as length 0.
pub fn parse_sample(raw: &str, config: &SourceConfig) -> Result<RowSample> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
        if rows.len() >= config.sample_row_count {
            break;
        }
    }

    let sample = RowSample::new(rows, &config.column_name_prefix)?;
    info!(
        target: "sample",
        "loaded sample: {} columns, {} data rows",
        sample.column_count(),
        sample.data_rows().len()
    );
    Ok(sample)
}
