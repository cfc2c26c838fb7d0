//! Data layer: the fixed row sample and the loaders that produce it.
//!
//! Loading and parsing happen once, upstream of the grid core; the core only
//! ever sees a fully built, immutable `RowSample`.

pub mod csv_loader;
pub mod row_sample;

pub use csv_loader::{load_sample, parse_sample};
pub use row_sample::{decode_column_index, RowSample};
