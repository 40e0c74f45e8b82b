// File: crates/extent-core/src/axis.rs
// Summary: Display axis bounds derived from an extent.

/// One display axis: `min` is the boundary drawn at the start of the axis
/// (left or bottom), `max` the one at the end. For an upper-origin image
/// the vertical axis runs downward, so `min > max`.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Absolute length covered by the axis.
    pub fn span(&self) -> f64 { (self.max - self.min).abs() }

    pub fn is_inverted(&self) -> bool { self.max < self.min }

    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.is_inverted() { (self.max, self.min) } else { (self.min, self.max) };
        v >= lo && v <= hi
    }
}
