use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for the viewer.
///
/// The TUI owns the terminal, so log output goes to a session log file; set
/// `RUST_LOG` to adjust the filter (defaults to `info`).
pub fn init_tracing(log_path: Option<PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = Arc::new(File::create(&path)?);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .compact()
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .compact()
                .init();
        }
    }

    tracing::info!(target: "system", "tracing initialized");
    Ok(())
}

/// Default session log location under the user's cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    Some(dirs::cache_dir()?.join("wide-grid").join("wide-grid.log"))
}
