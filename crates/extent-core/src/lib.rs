// File: crates/extent-core/src/lib.rs
// Summary: Core library entry point; exports the grid model and display-extent API.

pub mod axis;
pub mod error;
pub mod extent;
pub mod grid;
pub mod ranges;
pub mod types;

pub use axis::Axis;
pub use error::{ExtentError, GridError};
pub use extent::{compute_extent, compute_extent_with, Extent};
pub use grid::Grid;
pub use ranges::AxisRanges;
pub use types::{ExtentOptions, Origin, PIXEL_HALF_WIDTH};
