//! The grid core: width estimation, the column offset cache, and the
//! sliding-window scroll controller.
//!
//! Architecture:
//! RowSample (immutable 50-row slice of the dataset)
//!     → WidthEstimator (content-driven pixel widths)
//!         → ColumnOffsetCache (sparse index → offset map, anchored at 0)
//!             → ScrollWindowController (preload window + scroll pipeline)
//!                 → view adapter (renders at published offsets)

pub mod controller;
pub mod offset_cache;
pub mod width_estimator;

pub use controller::{ScrollWindowController, WindowShift};
pub use offset_cache::ColumnOffsetCache;
pub use width_estimator::WidthEstimator;
