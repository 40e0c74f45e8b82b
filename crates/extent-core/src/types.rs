// File: crates/extent-core/src/types.rs
// Summary: Shared constants and extent options (display origin).

/// Fraction of a step added beyond the outermost sample centres.
pub const PIXEL_HALF_WIDTH: f64 = 0.5;

/// Where the display places row 0 of the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    /// Row 0 at the top; the vertical boundary pair is reversed.
    #[default]
    Upper,
    /// Row 0 at the bottom; both pairs keep ascending order.
    Lower,
}

impl Origin {
    /// Whether the vertical boundaries are emitted last-then-first.
    pub const fn flips_vertical(&self) -> bool {
        matches!(self, Origin::Upper)
    }
}

impl std::str::FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" => Ok(Origin::Upper),
            "lower" => Ok(Origin::Lower),
            other => Err(format!("unknown origin '{other}', expected 'upper' or 'lower'")),
        }
    }
}

/// Options for extent computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtentOptions {
    pub origin: Origin,
}

impl ExtentOptions {
    pub const fn new(origin: Origin) -> Self {
        Self { origin }
    }
}
