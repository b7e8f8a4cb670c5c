//! Integration tests for isocline grid construction
//!
//! Tests are organized by topic:
//! - `scenarios` - Reference explorations with known grids
//! - `ordering` - Independence from the order runs are enumerated in
//! - `isocline` - Payloads, orientation modes and hover info

mod scenarios;

use crate::model::{MetricSet, Sample};

/// Complete `xs x ys` sweep enumerated row-major, with metric `m = f(i, j)`
pub(crate) fn sweep(xs: &[f64], ys: &[f64], f: impl Fn(usize, usize) -> Option<f64>) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(xs.len() * ys.len());
    for (i, &x) in xs.iter().enumerate() {
        for (j, &y) in ys.iter().enumerate() {
            samples.push(Sample::new(
                x,
                y,
                format!("x{i}y{j}"),
                MetricSet::new().with("m", f(i, j)),
            ));
        }
    }
    samples
}
