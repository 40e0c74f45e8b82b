// File: crates/extent-core/src/ranges.rs
// Summary: Capability trait for anything that yields one coordinate range per dimension.

/// Indexable-by-dimension source of coordinate ranges.
///
/// Implemented by [`Grid`](crate::Grid) and by plain ordered collections of
/// per-axis sequences, so both can be passed to the extent functions.
/// Axes are ordered outer-to-inner (vertical before horizontal).
pub trait AxisRanges {
    /// Number of dimensions.
    fn ndim(&self) -> usize;

    /// Flattened coordinates of dimension `index`.
    ///
    /// Panics when `index >= self.ndim()`.
    fn axis(&self, index: usize) -> &[f64];
}

impl<T: AxisRanges + ?Sized> AxisRanges for &T {
    fn ndim(&self) -> usize { (**self).ndim() }
    fn axis(&self, index: usize) -> &[f64] { (**self).axis(index) }
}

impl AxisRanges for [Vec<f64>] {
    fn ndim(&self) -> usize { self.len() }
    fn axis(&self, index: usize) -> &[f64] { &self[index] }
}

impl AxisRanges for Vec<Vec<f64>> {
    fn ndim(&self) -> usize { self.len() }
    fn axis(&self, index: usize) -> &[f64] { &self[index] }
}

impl AxisRanges for [&[f64]] {
    fn ndim(&self) -> usize { self.len() }
    fn axis(&self, index: usize) -> &[f64] { self[index] }
}

impl AxisRanges for Vec<&[f64]> {
    fn ndim(&self) -> usize { self.len() }
    fn axis(&self, index: usize) -> &[f64] { self[index] }
}

impl<const N: usize, const D: usize> AxisRanges for [[f64; N]; D] {
    fn ndim(&self) -> usize { D }
    fn axis(&self, index: usize) -> &[f64] { &self[index] }
}

impl<const D: usize> AxisRanges for [&[f64]; D] {
    fn ndim(&self) -> usize { D }
    fn axis(&self, index: usize) -> &[f64] { self[index] }
}

#[cfg(test)]
mod tests {
    use super::AxisRanges;

    fn dims<R: AxisRanges + ?Sized>(r: &R) -> Vec<usize> {
        (0..r.ndim()).map(|i| r.axis(i).len()).collect()
    }

    #[test]
    fn collections_report_dimensions() {
        let owned = vec![vec![0.0, 1.0, 2.0], vec![5.0, 6.0]];
        assert_eq!(dims(&owned), vec![3, 2]);
        assert_eq!(dims(owned.as_slice()), vec![3, 2]);

        let v = [0.0, 1.0];
        let h = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(dims(&[&v[..], &h[..]]), vec![2, 4]);
        assert_eq!(dims(&vec![&h[..]]), vec![4]);
        assert_eq!(dims(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]), vec![2, 2, 2]);
    }
}
