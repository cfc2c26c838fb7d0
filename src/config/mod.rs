//! Configuration module
//!
//! Recognized options for the grid core and the data source, loaded from a
//! TOML file with serde defaults filling anything omitted.

pub mod config;

pub use config::{Config, GridConfig, SourceConfig};
