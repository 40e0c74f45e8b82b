// File: crates/extent-core/src/extent.rs
// Summary: Pixel-edge display extent for the last two axes of a grid.

use std::fmt;

use log::{debug, warn};

use crate::axis::Axis;
use crate::error::ExtentError;
use crate::ranges::AxisRanges;
use crate::types::{ExtentOptions, PIXEL_HALF_WIDTH};

/// Boundary values for an image-display call, `[left, right, bottom, top]`
/// when two axes were supplied, `[first, last]` for one, empty for none.
#[derive(Clone, Debug, PartialEq)]
pub struct Extent {
    values: Vec<f64>,
    ignored_axes: usize,
}

impl Extent {
    pub fn as_slice(&self) -> &[f64] { &self.values }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn into_vec(self) -> Vec<f64> { self.values }

    /// The four boundaries, when both display axes are present.
    pub fn to_array(&self) -> Option<[f64; 4]> {
        self.values.as_slice().try_into().ok()
    }

    /// Leading axes that were dropped because only the last two are displayed.
    pub fn ignored_axes(&self) -> usize { self.ignored_axes }

    /// Left/right boundaries, from the innermost axis.
    pub fn horizontal(&self) -> Option<Axis> {
        match self.values.as_slice() {
            [left, right, ..] => Some(Axis::new("horizontal", *left, *right)),
            _ => None,
        }
    }

    /// Bottom/top boundaries, from the second-to-last axis.
    pub fn vertical(&self) -> Option<Axis> {
        match self.values.as_slice() {
            [_, _, bottom, top] => Some(Axis::new("vertical", *bottom, *top)),
            _ => None,
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Extent of the last two axes of `ranges` with an upper image origin.
///
/// Axes are ordered outer-to-inner, so for a 2D image `ranges` holds the
/// vertical coordinates first and the horizontal ones second. Each axis is
/// widened by half a step beyond its outermost samples so pixels are centred
/// on their coordinates. Only the first two and the last sample of an axis
/// are read; uniform spacing is assumed, not checked.
///
/// With more than two axes a warning is logged and the leading axes are
/// skipped; their count is reported by [`Extent::ignored_axes`].
pub fn compute_extent<R: AxisRanges + ?Sized>(ranges: &R) -> Result<Extent, ExtentError> {
    compute_extent_with(ranges, &ExtentOptions::default())
}

/// Same as [`compute_extent`], with a configurable display origin.
pub fn compute_extent_with<R: AxisRanges + ?Sized>(
    ranges: &R,
    opts: &ExtentOptions,
) -> Result<Extent, ExtentError> {
    let ndim = ranges.ndim();
    let ignored_axes = ndim.saturating_sub(2);
    if ignored_axes > 0 {
        warn!("Only using the last two of {} axes for the display extent.", ndim);
    }

    let mut values = Vec::with_capacity(4);
    for (sel, axis) in (ignored_axes..ndim).rev().enumerate() {
        let (mut first, mut last) = pixel_bounds(axis, ranges.axis(axis))?;
        if sel == 1 && opts.origin.flips_vertical() {
            std::mem::swap(&mut first, &mut last);
        }
        values.push(first);
        values.push(last);
    }
    debug!("Display extent {:?} ({:?} origin, {} axes)", values, opts.origin, ndim);

    Ok(Extent { values, ignored_axes })
}

/// Outer pixel edges of one axis: half a step before the first sample and
/// after the last one.
fn pixel_bounds(axis: usize, rng: &[f64]) -> Result<(f64, f64), ExtentError> {
    match rng {
        [x0, x1, ..] => {
            let step = x1 - x0;
            let xn = rng[rng.len() - 1];
            Ok((x0 - PIXEL_HALF_WIDTH * step, xn + PIXEL_HALF_WIDTH * step))
        }
        _ => Err(ExtentError::TooFewSamples { axis, len: rng.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_bounds_of_two_samples() {
        assert_eq!(pixel_bounds(0, &[5.0, 7.0]), Ok((4.0, 8.0)));
    }

    #[test]
    fn pixel_bounds_reads_only_first_two_and_last() {
        assert_eq!(pixel_bounds(0, &[0.0, 1.0, 10.0, 11.0]), Ok((-0.5, 11.5)));
    }

    #[test]
    fn pixel_bounds_reports_short_axis() {
        assert_eq!(pixel_bounds(3, &[1.0]), Err(ExtentError::TooFewSamples { axis: 3, len: 1 }));
        assert_eq!(pixel_bounds(0, &[]), Err(ExtentError::TooFewSamples { axis: 0, len: 0 }));
    }

    #[test]
    fn display_lists_values() {
        let e = compute_extent(&vec![vec![0.0, 1.0], vec![0.0, 2.0]]).unwrap();
        assert_eq!(e.to_string(), "[-1, 3, 1.5, -0.5]");
    }
}
