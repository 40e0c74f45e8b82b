// File: crates/extent-core/src/grid.rs
// Summary: Uniformly sampled n-dimensional coordinate grid.

use crate::error::{ExtentError, GridError};
use crate::extent::{compute_extent, Extent};
use crate::ranges::AxisRanges;

/// Coordinates along each axis of a sampled grid, outer axis first.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    ranges: Vec<Vec<f64>>,
}

impl Grid {
    /// Grid centred on the origin: the sample at index `shape[d] / 2` sits at 0.
    pub fn new(shape: &[usize], step: &[f64]) -> Result<Self, GridError> {
        let center = vec![0.0; shape.len()];
        Self::with_center(shape, step, &center)
    }

    /// Grid whose sample at index `shape[d] / 2` sits at `center[d]`.
    pub fn with_center(shape: &[usize], step: &[f64], center: &[f64]) -> Result<Self, GridError> {
        check_len("step", shape.len(), step.len())?;
        check_len("center", shape.len(), center.len())?;
        let first: Vec<f64> = shape
            .iter()
            .zip(step)
            .zip(center)
            .map(|((&n, &dx), &c)| c - dx * (n / 2) as f64)
            .collect();
        Self::with_first(shape, step, &first)
    }

    /// Grid with an explicit first coordinate per axis.
    pub fn with_first(shape: &[usize], step: &[f64], first: &[f64]) -> Result<Self, GridError> {
        check_len("step", shape.len(), step.len())?;
        check_len("first", shape.len(), first.len())?;
        let mut ranges = Vec::with_capacity(shape.len());
        for (axis, ((&n, &dx), &x0)) in shape.iter().zip(step).zip(first).enumerate() {
            if n == 0 { return Err(GridError::EmptyAxis { axis }); }
            if !dx.is_finite() { return Err(GridError::InvalidStep { axis, step: dx }); }
            ranges.push((0..n).map(|k| x0 + dx * k as f64).collect());
        }
        Ok(Self { ranges })
    }

    /// Wrap per-axis coordinates that were built elsewhere.
    pub fn from_ranges(ranges: Vec<Vec<f64>>) -> Result<Self, GridError> {
        if let Some(axis) = ranges.iter().position(|r| r.is_empty()) {
            return Err(GridError::EmptyAxis { axis });
        }
        Ok(Self { ranges })
    }

    pub fn ndim(&self) -> usize { self.ranges.len() }

    pub fn shape(&self) -> Vec<usize> {
        self.ranges.iter().map(Vec::len).collect()
    }

    /// Spacing per axis, taken from the first two samples (0 for a single sample).
    pub fn step(&self) -> Vec<f64> {
        self.ranges
            .iter()
            .map(|r| if r.len() >= 2 { r[1] - r[0] } else { 0.0 })
            .collect()
    }

    pub fn first(&self) -> Vec<f64> {
        self.ranges.iter().map(|r| r[0]).collect()
    }

    /// Coordinate of the sample at index `len / 2` on each axis.
    pub fn center(&self) -> Vec<f64> {
        self.ranges.iter().map(|r| r[r.len() / 2]).collect()
    }

    pub fn range(&self, axis: usize) -> Option<&[f64]> {
        self.ranges.get(axis).map(Vec::as_slice)
    }

    pub fn ranges(&self) -> &[Vec<f64>] { &self.ranges }

    /// Display extent of the last two axes, see [`compute_extent`].
    pub fn extent(&self) -> Result<Extent, ExtentError> {
        compute_extent(self)
    }
}

impl AxisRanges for Grid {
    fn ndim(&self) -> usize { self.ranges.len() }
    fn axis(&self, index: usize) -> &[f64] { &self.ranges[index] }
}

fn check_len(name: &'static str, expected: usize, actual: usize) -> Result<(), GridError> {
    if expected != actual {
        return Err(GridError::ParameterLength { name, expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_grid_puts_middle_sample_at_zero() {
        let g = Grid::new(&[4, 3], &[1.0, 2.0]).unwrap();
        assert_eq!(g.range(0).unwrap(), &[-2.0, -1.0, 0.0, 1.0]);
        assert_eq!(g.range(1).unwrap(), &[-2.0, 0.0, 2.0]);
        assert_eq!(g.center(), vec![0.0, 0.0]);
        assert_eq!(g.shape(), vec![4, 3]);
        assert_eq!(g.step(), vec![1.0, 2.0]);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            Grid::new(&[2, 2], &[1.0]),
            Err(GridError::ParameterLength { name: "step", expected: 2, actual: 1 })
        );
        assert_eq!(Grid::new(&[3, 0], &[1.0, 1.0]), Err(GridError::EmptyAxis { axis: 1 }));
        assert!(matches!(
            Grid::new(&[3], &[f64::NAN]),
            Err(GridError::InvalidStep { axis: 0, .. })
        ));
        assert_eq!(Grid::from_ranges(vec![vec![1.0], vec![]]), Err(GridError::EmptyAxis { axis: 1 }));
    }

    #[test]
    fn single_sample_axis_has_zero_step() {
        let g = Grid::with_first(&[1, 2], &[5.0, 1.0], &[7.0, 0.0]).unwrap();
        assert_eq!(g.range(0).unwrap(), &[7.0]);
        assert_eq!(g.step(), vec![0.0, 1.0]);
    }
}
