// File: crates/extent-demo/src/main.rs
// Summary: Demo loads per-axis coordinate ranges from CSV (or builds a sample grid) and prints the display extent.

use anyhow::{Context, Result};
use extent_core::{compute_extent_with, ExtentOptions, Grid, Origin};
use std::path::Path;

fn main() -> Result<()> {
    // Usage: extent-demo [ranges.csv] [upper|lower]
    let mut args = std::env::args().skip(1);
    let input = args.next();
    let origin = match args.next() {
        Some(s) => s.parse::<Origin>().map_err(anyhow::Error::msg)?,
        None => Origin::default(),
    };
    let opts = ExtentOptions::new(origin);

    let grid = match input.as_deref() {
        Some(raw) => {
            let path = Path::new(raw);
            println!("Using input file: {}", path.display());
            let ranges = load_ranges_csv(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            Grid::from_ranges(ranges)?
        }
        None => {
            println!("No input file, using a 4x3 sample grid");
            Grid::new(&[4, 3], &[1.0, 10.0])?
        }
    };

    println!("Loaded {} axes with shape {:?}", grid.ndim(), grid.shape());
    for (i, rng) in grid.ranges().iter().enumerate() {
        println!("  axis {i}: {} samples from {} to {}", rng.len(), rng[0], rng[rng.len() - 1]);
    }

    let extent = compute_extent_with(&grid, &opts)?;
    if extent.ignored_axes() > 0 {
        println!("Note: ignored the first {} axes; only the last two are displayed", extent.ignored_axes());
    }
    println!("Origin: {:?}", opts.origin);
    println!("Extent: {extent}");
    if let (Some(x), Some(y)) = (extent.horizontal(), extent.vertical()) {
        println!("  {}: {} .. {}", x.label, x.min, x.max);
        println!("  {}: {} .. {}", y.label, y.min, y.max);
    }
    Ok(())
}

/// One record per axis, outer axis first; records may have different lengths.
fn load_ranges_csv(path: &Path) -> Result<Vec<Vec<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let axis = rec
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f64>()
                    .with_context(|| format!("row {}: '{}' is not a number", row + 1, s))
            })
            .collect::<Result<Vec<f64>>>()?;
        if axis.is_empty() {
            continue;
        }
        out.push(axis);
    }
    if out.is_empty() {
        anyhow::bail!("no axis ranges found in {}", path.display());
    }
    Ok(out)
}
