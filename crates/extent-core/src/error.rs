// File: crates/extent-core/src/error.rs
// Summary: Error types for grid construction and extent computation.

use thiserror::Error;

/// Errors raised while computing a display extent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtentError {
    /// A selected axis has fewer than two samples, so no step can be derived.
    #[error("axis {axis} has {len} sample(s); at least 2 are needed to derive a step")]
    TooFewSamples { axis: usize, len: usize },
}

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A per-axis parameter does not have one entry per dimension.
    #[error("{name} has {actual} entries but the grid has {expected} dimensions")]
    ParameterLength { name: &'static str, expected: usize, actual: usize },

    #[error("axis {axis} has no samples")]
    EmptyAxis { axis: usize },

    #[error("axis {axis} has non-finite step {step}")]
    InvalidStep { axis: usize, step: f64 },
}
