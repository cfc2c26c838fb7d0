//! User interface layer
//!
//! The terminal view adapter: a render context snapshotted from the
//! controller after each pipeline run, and a pure render function over it.

pub mod grid_view;

pub use grid_view::{render_grid, GridRenderContext};
