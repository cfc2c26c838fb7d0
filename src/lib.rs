pub mod config;
pub mod data;
pub mod error;
pub mod grid;
pub mod logging;
pub mod throttle;
pub mod ui;

pub use config::{Config, GridConfig, SourceConfig};
pub use data::{load_sample, RowSample};
pub use error::GridError;
pub use grid::{ColumnOffsetCache, ScrollWindowController, WidthEstimator, WindowShift};
pub use throttle::ScrollThrottle;
